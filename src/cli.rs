#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{domain::phenomenon::PhenomenonKind, i18n::Locale};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PhenomenonArg {
    Rain,
    Sun,
    Cloud,
    Snow,
    Storm,
}

impl From<PhenomenonArg> for PhenomenonKind {
    fn from(value: PhenomenonArg) -> Self {
        match value {
            PhenomenonArg::Rain => PhenomenonKind::Rain,
            PhenomenonArg::Sun => PhenomenonKind::Sun,
            PhenomenonArg::Cloud => PhenomenonKind::Cloud,
            PhenomenonArg::Snow => PhenomenonKind::Snow,
            PhenomenonArg::Storm => PhenomenonKind::Storm,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LocaleArg {
    En,
    Ru,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::En,
            LocaleArg::Ru => Locale::Ru,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-scenes",
    version,
    about = "Animated terminal weather scenes"
)]
pub struct Cli {
    /// Phenomenon shown at launch (default: random)
    #[arg(long, value_enum)]
    pub phenomenon: Option<PhenomenonArg>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Display language
    #[arg(long, value_enum, default_value_t = LocaleArg::En)]
    pub locale: LocaleArg,

    /// Icon set for the selector strip
    #[arg(long, value_enum, default_value_t = IconMode::Unicode)]
    pub icons: IconMode,

    /// Disable particle animation
    #[arg(long)]
    pub no_animation: bool,

    /// Disable thunder flash
    #[arg(long)]
    pub no_flash: bool,

    /// Keep clouds drifting instead of a single pass
    #[arg(long)]
    pub repeat_clouds: bool,

    /// Seed for the scene randomness
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn initial_phenomenon(&self) -> Option<PhenomenonKind> {
        self.phenomenon.map(PhenomenonKind::from)
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.into()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, IconMode, LocaleArg, PhenomenonArg};
    use crate::{domain::phenomenon::PhenomenonKind, i18n::Locale};

    #[test]
    fn defaults_to_random_phenomenon() {
        let cli = Cli::parse_from(["weather-scenes"]);
        assert_eq!(cli.phenomenon, None);
        assert_eq!(cli.initial_phenomenon(), None);
        assert_eq!(cli.fps, 30);
        assert_eq!(cli.icons, IconMode::Unicode);
        assert_eq!(cli.locale(), Locale::En);
    }

    #[test]
    fn parses_phenomenon_override() {
        let cli = Cli::parse_from(["weather-scenes", "--phenomenon", "storm"]);
        assert_eq!(cli.phenomenon, Some(PhenomenonArg::Storm));
        assert_eq!(cli.initial_phenomenon(), Some(PhenomenonKind::Storm));
    }

    #[test]
    fn parses_locale_and_icons() {
        let cli = Cli::parse_from(["weather-scenes", "--locale", "ru", "--icons", "ascii"]);
        assert_eq!(cli.locale, LocaleArg::Ru);
        assert_eq!(cli.locale(), Locale::Ru);
        assert_eq!(cli.icons, IconMode::Ascii);
    }

    #[test]
    fn rejects_fps_out_of_range() {
        let err = Cli::try_parse_from(["weather-scenes", "--fps", "5"]).expect_err("expected range");
        assert!(err.to_string().contains("--fps"));
    }

    #[test]
    fn rejects_unknown_phenomenon() {
        assert!(Cli::try_parse_from(["weather-scenes", "--phenomenon", "hail"]).is_err());
    }
}
