use std::ops::RangeInclusive;

use crate::{assets, domain::phenomenon::PhenomenonKind};

/// Scene geometry is authored on a portrait phone-sized canvas and scaled to
/// the terminal when drawn.
pub const REFERENCE_WIDTH: f32 = 390.0;
pub const REFERENCE_HEIGHT: f32 = 844.0;

/// Caption baseline distance from the bottom edge and its side insets.
pub const CAPTION_BOTTOM_INSET: f32 = 70.0;
pub const CAPTION_SIDE_INSET: f32 = 30.0;

pub const CROSS_DISSOLVE_SECS: f32 = 0.3;
pub const LIGHTNING_PERIOD_SECS: RangeInclusive<f32> = 2.0..=5.0;
pub const CLOUD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterConfig {
    pub particles_key: &'static str,
    /// Particles per second.
    pub birth_rate: f32,
    /// Seconds.
    pub lifetime: f32,
    /// Points per second, downward.
    pub velocity: f32,
    pub velocity_range: f32,
    /// Points per second squared.
    pub y_acceleration: f32,
    pub scale: f32,
    pub scale_range: f32,
}

pub const RAIN_EMITTER: EmitterConfig = EmitterConfig {
    particles_key: assets::RAINDROPS,
    birth_rate: 150.0,
    lifetime: 20.0,
    velocity: 200.0,
    velocity_range: 50.0,
    y_acceleration: 80.0,
    scale: 0.02,
    scale_range: 0.02,
};

pub const STORM_EMITTER: EmitterConfig = EmitterConfig {
    particles_key: assets::RAINDROPS,
    birth_rate: 150.0,
    lifetime: 20.0,
    velocity: 200.0,
    velocity_range: 50.0,
    y_acceleration: 100.0,
    scale: 0.04,
    scale_range: 0.04,
};

pub const SNOW_EMITTER: EmitterConfig = EmitterConfig {
    particles_key: assets::SNOWFLAKES,
    birth_rate: 30.0,
    lifetime: 20.0,
    velocity: 100.0,
    velocity_range: 50.0,
    y_acceleration: 20.0,
    scale: 0.07,
    scale_range: 0.02,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorRecipe {
    Emitter(EmitterConfig),
    Sun,
    Clouds { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub background_key: &'static str,
    pub caption_key: &'static str,
    pub decor: DecorRecipe,
    pub lightning: bool,
}

#[must_use]
pub fn scene_config(kind: PhenomenonKind) -> SceneConfig {
    let (background_key, decor, lightning) = match kind {
        PhenomenonKind::Rain => (
            assets::RAINY_BACKGROUND,
            DecorRecipe::Emitter(RAIN_EMITTER),
            false,
        ),
        PhenomenonKind::Sun => (assets::SUNNY_BACKGROUND, DecorRecipe::Sun, false),
        PhenomenonKind::Cloud => (
            assets::CLOUDY_BACKGROUND,
            DecorRecipe::Clouds { count: CLOUD_COUNT },
            false,
        ),
        PhenomenonKind::Snow => (
            assets::SNOW_BACKGROUND,
            DecorRecipe::Emitter(SNOW_EMITTER),
            false,
        ),
        PhenomenonKind::Storm => (
            assets::STORM_BACKGROUND,
            DecorRecipe::Emitter(STORM_EMITTER),
            true,
        ),
    };
    SceneConfig {
        background_key,
        caption_key: kind.caption_key(),
        decor,
        lightning,
    }
}
