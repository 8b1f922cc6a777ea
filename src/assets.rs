//! Named art used by the scenes: background palettes, sprite glyph art and
//! particle glyphs.

use ratatui::style::Color;
use thiserror::Error;

pub const RAINY_BACKGROUND: &str = "RainyBackground";
pub const SUNNY_BACKGROUND: &str = "SunnyBackground";
pub const CLOUDY_BACKGROUND: &str = "CloudyBackground";
pub const SNOW_BACKGROUND: &str = "SnowBackground";
pub const STORM_BACKGROUND: &str = "StormBackground";
pub const SUN_SPRITE: &str = "Sun";
pub const CLOUD_SPRITE: &str = "Cloud";
pub const RAINDROPS: &str = "Raindrops";
pub const SNOWFLAKES: &str = "Snowflakes";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("no background named `{0}`")]
    MissingBackground(String),
    #[error("no sprite named `{0}`")]
    MissingSprite(String),
    #[error("no particle glyphs named `{0}`")]
    MissingParticles(String),
}

/// Vertical gradient filling the whole scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub top: Color,
    pub bottom: Color,
}

impl Backdrop {
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            top: color,
            bottom: color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteArt {
    pub lines: &'static [&'static str],
    pub color: Color,
}

impl SpriteArt {
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Glyphs ordered from smallest to largest particle scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleArt {
    pub glyphs: &'static [char],
    pub color: Color,
}

const SUN_ART: &[&str] = &[
    r"   \   /   ",
    r"    .-.    ",
    r" --(   )-- ",
    r"    `-'    ",
    r"   /   \   ",
];

const CLOUD_ART: &[&str] = &[r"    .--.    ", r" .-(    ).  ", r"(___.__)__) "];

pub fn backdrop(key: &str) -> Result<Backdrop, AssetError> {
    let (top, bottom) = match key {
        RAINY_BACKGROUND => ((38, 52, 74), (78, 94, 112)),
        SUNNY_BACKGROUND => ((42, 132, 214), (250, 206, 120)),
        CLOUDY_BACKGROUND => ((96, 112, 132), (170, 180, 192)),
        SNOW_BACKGROUND => ((128, 156, 190), (232, 238, 246)),
        STORM_BACKGROUND => ((14, 16, 30), (52, 48, 74)),
        _ => return Err(AssetError::MissingBackground(key.to_string())),
    };
    Ok(Backdrop {
        top: Color::Rgb(top.0, top.1, top.2),
        bottom: Color::Rgb(bottom.0, bottom.1, bottom.2),
    })
}

pub fn sprite(key: &str) -> Result<SpriteArt, AssetError> {
    match key {
        SUN_SPRITE => Ok(SpriteArt {
            lines: SUN_ART,
            color: Color::Rgb(255, 214, 64),
        }),
        CLOUD_SPRITE => Ok(SpriteArt {
            lines: CLOUD_ART,
            color: Color::Rgb(245, 247, 250),
        }),
        _ => Err(AssetError::MissingSprite(key.to_string())),
    }
}

pub fn particles(key: &str) -> Result<ParticleArt, AssetError> {
    match key {
        RAINDROPS => Ok(ParticleArt {
            glyphs: &['╷', '│', '┃'],
            color: Color::Rgb(150, 190, 235),
        }),
        SNOWFLAKES => Ok(ParticleArt {
            glyphs: &['·', '*', '❄'],
            color: Color::Rgb(250, 250, 255),
        }),
        _ => Err(AssetError::MissingParticles(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_background_resolves() {
        for key in [
            RAINY_BACKGROUND,
            SUNNY_BACKGROUND,
            CLOUDY_BACKGROUND,
            SNOW_BACKGROUND,
            STORM_BACKGROUND,
        ] {
            assert!(backdrop(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn missing_assets_name_the_key() {
        let err = backdrop("Volcano").expect_err("unknown background");
        assert_eq!(err.to_string(), "no background named `Volcano`");
        assert!(matches!(sprite("Moon"), Err(AssetError::MissingSprite(_))));
        assert!(matches!(
            particles("Hail"),
            Err(AssetError::MissingParticles(_))
        ));
    }

    #[test]
    fn sprite_dimensions_cover_art() {
        let sun = sprite(SUN_SPRITE).expect("sun");
        assert_eq!(sun.height(), 5);
        assert_eq!(sun.width(), 11);
        let cloud = sprite(CLOUD_SPRITE).expect("cloud");
        assert_eq!(cloud.height(), 3);
    }

    #[test]
    fn solid_backdrop_has_equal_stops() {
        let solid = Backdrop::solid(Color::Black);
        assert_eq!(solid.top, solid.bottom);
    }
}
