use rand::Rng;

use super::config::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

pub const FLASH_ALPHA: f32 = 0.6;
const FLASH_HOLD_SECS: f32 = 0.2;
const FLASH_FADE_SECS: f32 = 0.1;
const BOLT_SECS: f32 = 0.1;

/// Jagged bolt vertices relative to the strike origin, in points.
pub const BOLT_OFFSETS: [(f32, f32); 5] =
    [(0.0, 0.0), (10.0, 30.0), (-10.0, 60.0), (15.0, 90.0), (-5.0, 120.0)];

/// A single flash-and-bolt effect. Lives for the flash duration and is then
/// dropped from the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LightningStrike {
    pub origin: (f32, f32),
    elapsed: f32,
}

impl LightningStrike {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(REFERENCE_WIDTH * 0.4..=REFERENCE_WIDTH * 0.6);
        let y = rng.random_range(REFERENCE_HEIGHT * 0.1..=REFERENCE_HEIGHT * 0.5);
        Self {
            origin: (x, y),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// White overlay opacity: full on strike, then fading out.
    #[must_use]
    pub fn overlay_alpha(&self) -> f32 {
        if self.elapsed < FLASH_HOLD_SECS {
            FLASH_ALPHA
        } else if self.elapsed < FLASH_HOLD_SECS + FLASH_FADE_SECS {
            FLASH_ALPHA * (1.0 - (self.elapsed - FLASH_HOLD_SECS) / FLASH_FADE_SECS)
        } else {
            0.0
        }
    }

    /// Bolt vertices in reference points while the bolt is still drawn.
    #[must_use]
    pub fn bolt(&self) -> Option<[(f32, f32); 5]> {
        if self.elapsed >= BOLT_SECS {
            return None;
        }
        let (ox, oy) = self.origin;
        Some(BOLT_OFFSETS.map(|(dx, dy)| (ox + dx, oy + dy)))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= FLASH_HOLD_SECS + FLASH_FADE_SECS
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn strike_origin_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let strike = LightningStrike::spawn(&mut rng);
            let (x, y) = strike.origin;
            assert!((REFERENCE_WIDTH * 0.4..=REFERENCE_WIDTH * 0.6).contains(&x));
            assert!((REFERENCE_HEIGHT * 0.1..=REFERENCE_HEIGHT * 0.5).contains(&y));
        }
    }

    #[test]
    fn flash_holds_then_fades_out() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut strike = LightningStrike::spawn(&mut rng);
        assert!((strike.overlay_alpha() - FLASH_ALPHA).abs() < f32::EPSILON);
        strike.tick(0.15);
        assert!((strike.overlay_alpha() - FLASH_ALPHA).abs() < f32::EPSILON);
        strike.tick(0.1);
        let mid = strike.overlay_alpha();
        assert!(mid > 0.0 && mid < FLASH_ALPHA);
        strike.tick(0.06);
        assert!(strike.overlay_alpha().abs() < f32::EPSILON);
        assert!(strike.is_finished());
    }

    #[test]
    fn bolt_disappears_before_flash() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut strike = LightningStrike::spawn(&mut rng);
        let bolt = strike.bolt().expect("bolt on strike");
        assert_eq!(bolt[0], strike.origin);
        assert!((bolt[4].1 - strike.origin.1 - 120.0).abs() < 1e-3);
        strike.tick(0.11);
        assert!(strike.bolt().is_none());
        assert!(!strike.is_finished());
    }
}
