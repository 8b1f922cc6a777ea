use rand::Rng;

use super::config::REFERENCE_WIDTH;

pub const SUN_SIZE: f32 = 150.0;
pub const SUN_TOP: f32 = 210.0;
const SUN_BOB_POINTS: f32 = 40.0;
const SUN_BOB_SECS: f32 = 4.0;
const SUN_FADE_SECS: f32 = 1.0;

pub const CLOUD_WIDTH: f32 = 150.0;
pub const CLOUD_HEIGHT: f32 = 90.0;
const CLOUD_Y_MIN: f32 = 230.0;
const CLOUD_Y_MAX: f32 = 600.0;
const CLOUD_MAX_DELAY_SECS: f32 = 2.0;
pub const CLOUD_FLIGHT_SECS: f32 = 8.0;

/// Position in a forward-then-back cycle: 0.0 at rest, 1.0 after
/// `half_period`, back to 0.0 after twice that.
#[must_use]
pub fn ping_pong(elapsed: f32, half_period: f32) -> f32 {
    if half_period <= 0.0 {
        return 0.0;
    }
    let cycle = (elapsed / half_period).rem_euclid(2.0);
    if cycle <= 1.0 { cycle } else { 2.0 - cycle }
}

#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedProperty {
    Opacity,
    OffsetY,
}

/// Autoreversing animation that repeats until its sprite is torn down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopAnimation {
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
    pub half_period: f32,
}

impl LoopAnimation {
    #[must_use]
    pub fn value_at(&self, elapsed: f32) -> f32 {
        self.from + (self.to - self.from) * ping_pong(elapsed, self.half_period)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunSprite {
    elapsed: f32,
    loops: [LoopAnimation; 2],
}

impl Default for SunSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl SunSprite {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            loops: [
                LoopAnimation {
                    property: AnimatedProperty::Opacity,
                    from: 0.7,
                    to: 1.0,
                    half_period: SUN_FADE_SECS,
                },
                LoopAnimation {
                    property: AnimatedProperty::OffsetY,
                    from: 0.0,
                    to: -SUN_BOB_POINTS,
                    half_period: SUN_BOB_SECS,
                },
            ],
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    #[must_use]
    pub fn loops(&self) -> &[LoopAnimation] {
        &self.loops
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.value(AnimatedProperty::Opacity, 1.0)
    }

    /// Top-left corner in reference points.
    #[must_use]
    pub fn origin(&self) -> (f32, f32) {
        (
            REFERENCE_WIDTH - SUN_SIZE,
            SUN_TOP + self.value(AnimatedProperty::OffsetY, 0.0),
        )
    }

    fn value(&self, property: AnimatedProperty, fallback: f32) -> f32 {
        self.loops
            .iter()
            .find(|animation| animation.property == property)
            .map_or(fallback, |animation| animation.value_at(self.elapsed))
    }
}

/// One cloud crossing the screen left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudFlight {
    pub y: f32,
    pub delay: f32,
    elapsed: f32,
    repeat: bool,
}

impl CloudFlight {
    pub fn spawn(rng: &mut impl Rng, repeat: bool) -> Self {
        Self {
            y: rng.random_range(CLOUD_Y_MIN..=CLOUD_Y_MAX),
            delay: rng.random_range(0.0..=CLOUD_MAX_DELAY_SECS),
            elapsed: 0.0,
            repeat,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.repeat && self.flight_time() >= CLOUD_FLIGHT_SECS
    }

    /// Left edge in reference points; starts fully off-screen to the left.
    #[must_use]
    pub fn x(&self) -> f32 {
        let progress = if self.repeat {
            self.flight_time().rem_euclid(CLOUD_FLIGHT_SECS) / CLOUD_FLIGHT_SECS
        } else {
            (self.flight_time() / CLOUD_FLIGHT_SECS).min(1.0)
        };
        -CLOUD_WIDTH + (REFERENCE_WIDTH + CLOUD_WIDTH) * ease_out(progress)
    }

    fn flight_time(&self) -> f32 {
        (self.elapsed - self.delay).max(0.0)
    }
}
