use anyhow::Result;
use clap::Parser;
use weather_scenes::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_scenes::run(cli).await
}
