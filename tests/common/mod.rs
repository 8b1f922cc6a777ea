#![allow(dead_code)]

use clap::Parser;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tokio::sync::mpsc;
use weather_scenes::{
    app::{events::AppEvent, state::AppState},
    cli::Cli,
    domain::{
        catalog::{MockCatalog, PhenomenonCatalog},
        phenomenon::Phenomenon,
    },
    ui,
};

#[derive(Debug)]
pub struct EmptyCatalog;

impl PhenomenonCatalog for EmptyCatalog {
    fn create_weather_phenomena(&self) -> Vec<Phenomenon> {
        Vec::new()
    }
}

/// Deterministic CLI: fixed seed plus the given flags.
pub fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["weather-scenes", "--seed", "7"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

pub fn ready_state(cli: &Cli, tx: &mpsc::Sender<AppEvent>) -> AppState {
    ready_state_with(cli, tx, Box::new(MockCatalog))
}

pub fn ready_state_with(
    cli: &Cli,
    tx: &mpsc::Sender<AppEvent>,
    catalog: Box<dyn PhenomenonCatalog>,
) -> AppState {
    let mut state = AppState::new(cli, catalog);
    state.load(tx);
    state
}

pub fn render_buffer(state: &AppState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");
    terminal.backend().buffer().clone()
}

pub fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let buffer = render_buffer(state, width, height);
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
