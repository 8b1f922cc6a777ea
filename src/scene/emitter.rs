use rand::Rng;

use super::config::{EmitterConfig, REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Particles are born just above the top edge along its full width.
pub const EMITTER_Y: f32 = -10.0;
const MAX_PARTICLES: usize = 4_000;
const OFFSCREEN_MARGIN: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub age: f32,
    pub scale: f32,
}

#[derive(Debug)]
pub struct Emitter {
    config: EmitterConfig,
    enabled: bool,
    particles: Vec<Particle>,
    birth_debt: f32,
}

impl Emitter {
    #[must_use]
    pub fn new(config: EmitterConfig, enabled: bool) -> Self {
        Self {
            config,
            enabled,
            particles: Vec::new(),
            birth_debt: 0.0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn reset(&mut self) {
        self.particles.clear();
        self.birth_debt = 0.0;
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.enabled {
            self.particles.clear();
            return;
        }

        self.birth_debt += self.config.birth_rate * dt;
        let births = self.birth_debt.floor();
        self.birth_debt -= births;
        for _ in 0..births as usize {
            let particle = self.spawn(rng);
            self.particles.push(particle);
        }

        let accel = self.config.y_acceleration;
        for p in &mut self.particles {
            p.vy += accel * dt;
            p.y += p.vy * dt;
            p.age += dt;
        }

        let lifetime = self.config.lifetime;
        self.particles
            .retain(|p| p.age < lifetime && p.y < REFERENCE_HEIGHT + OFFSCREEN_MARGIN);
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    /// Normalized size of a particle within this emitter's scale range,
    /// 0.0 for the smallest and 1.0 for the largest possible particle.
    #[must_use]
    pub fn relative_scale(&self, particle: &Particle) -> f32 {
        let max = self.config.scale + self.config.scale_range;
        if max <= 0.0 {
            return 0.0;
        }
        (particle.scale / max).clamp(0.0, 1.0)
    }

    fn spawn(&self, rng: &mut impl Rng) -> Particle {
        Particle {
            x: rng.random_range(0.0..REFERENCE_WIDTH),
            y: EMITTER_Y,
            vy: self.config.velocity + jitter(rng, self.config.velocity_range),
            age: 0.0,
            scale: (self.config.scale + jitter(rng, self.config.scale_range)).max(0.0),
        }
    }
}

fn jitter(rng: &mut impl Rng, range: f32) -> f32 {
    if range > 0.0 {
        rng.random_range(-range..=range)
    } else {
        0.0
    }
}
