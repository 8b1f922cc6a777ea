//! Scene state machine: one scene per displayed phenomenon, rebuilt from
//! scratch on every transition.

pub mod config;
pub mod emitter;
pub mod lightning;
pub mod sprites;
pub mod transition;

use std::time::Duration;

use rand::Rng;
use ratatui::style::Color;
use tracing::{debug, warn};

use crate::{
    assets::{self, Backdrop},
    domain::phenomenon::{Phenomenon, PhenomenonKind},
    i18n::Localizer,
};
use config::{DecorRecipe, LIGHTNING_PERIOD_SECS, scene_config};
use emitter::Emitter;
use lightning::LightningStrike;
use sprites::{CloudFlight, SunSprite};
use transition::CrossDissolve;

const MAX_FRAME_SECS: f32 = 0.25;
pub const BLANK_BACKDROP: Backdrop = Backdrop::solid(Color::Black);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Rain,
    Sun,
    Cloud,
    Snow,
    Storm,
    Unknown,
}

impl From<PhenomenonKind> for SceneKind {
    fn from(kind: PhenomenonKind) -> Self {
        match kind {
            PhenomenonKind::Rain => Self::Rain,
            PhenomenonKind::Sun => Self::Sun,
            PhenomenonKind::Cloud => Self::Cloud,
            PhenomenonKind::Snow => Self::Snow,
            PhenomenonKind::Storm => Self::Storm,
        }
    }
}

impl SceneKind {
    #[must_use]
    pub fn phenomenon(self) -> Option<PhenomenonKind> {
        match self {
            Self::Rain => Some(PhenomenonKind::Rain),
            Self::Sun => Some(PhenomenonKind::Sun),
            Self::Cloud => Some(PhenomenonKind::Cloud),
            Self::Snow => Some(PhenomenonKind::Snow),
            Self::Storm => Some(PhenomenonKind::Storm),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    /// `None` for the plain fallback fill.
    pub asset_key: Option<&'static str>,
    pub backdrop: Backdrop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub key: &'static str,
    pub text: String,
}

#[derive(Debug)]
pub enum Decoration {
    Emitter(Emitter),
    Sun(SunSprite),
    Cloud(CloudFlight),
    Lightning(LightningStrike),
}

impl Decoration {
    fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        match self {
            Self::Emitter(emitter) => emitter.update(dt, rng),
            Self::Sun(sun) => sun.tick(dt),
            Self::Cloud(cloud) => cloud.tick(dt),
            Self::Lightning(strike) => strike.tick(dt),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Emitter(_) | Self::Sun(_) => false,
            Self::Cloud(cloud) => cloud.is_finished(),
            Self::Lightning(strike) => strike.is_finished(),
        }
    }
}

#[derive(Debug)]
pub struct Scene {
    kind: SceneKind,
    background: Background,
    decorations: Vec<Decoration>,
    caption: Option<Caption>,
    lightning_period: Option<Duration>,
    transition: Option<CrossDissolve>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::blank()
    }
}

impl Scene {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            kind: SceneKind::Unknown,
            background: Background {
                asset_key: None,
                backdrop: BLANK_BACKDROP,
            },
            decorations: Vec::new(),
            caption: None,
            lightning_period: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[must_use]
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    #[must_use]
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Period of the repeating lightning timer this scene asks for.
    #[must_use]
    pub fn lightning_period(&self) -> Option<Duration> {
        self.lightning_period
    }

    #[must_use]
    pub fn transition(&self) -> Option<&CrossDissolve> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn emitter(&self) -> Option<&Emitter> {
        self.decorations.iter().find_map(|d| match d {
            Decoration::Emitter(emitter) => Some(emitter),
            _ => None,
        })
    }

    #[must_use]
    pub fn sun(&self) -> Option<&SunSprite> {
        self.decorations.iter().find_map(|d| match d {
            Decoration::Sun(sun) => Some(sun),
            _ => None,
        })
    }

    pub fn clouds(&self) -> impl Iterator<Item = &CloudFlight> {
        self.decorations.iter().filter_map(|d| match d {
            Decoration::Cloud(cloud) => Some(cloud),
            _ => None,
        })
    }

    pub fn strikes(&self) -> impl Iterator<Item = &LightningStrike> {
        self.decorations.iter().filter_map(|d| match d {
            Decoration::Lightning(strike) => Some(strike),
            _ => None,
        })
    }

    pub fn tick(&mut self, dt: Duration, rng: &mut impl Rng) {
        let dt = dt.as_secs_f32().clamp(0.0, MAX_FRAME_SECS);
        if let Some(transition) = &mut self.transition {
            transition.tick(dt);
            if transition.is_finished() {
                self.transition = None;
            }
        }
        for decoration in &mut self.decorations {
            decoration.tick(dt, rng);
        }
        self.decorations.retain(|d| !d.is_finished());
    }

    /// Adds a flash-and-bolt effect. Only storm scenes accept strikes.
    pub fn strike_lightning(&mut self, rng: &mut impl Rng) -> bool {
        if self.kind != SceneKind::Storm {
            return false;
        }
        self.decorations
            .push(Decoration::Lightning(LightningStrike::spawn(rng)));
        true
    }

    pub fn reset_particles(&mut self) {
        for decoration in &mut self.decorations {
            if let Decoration::Emitter(emitter) = decoration {
                emitter.reset();
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub particles: bool,
    pub repeat_clouds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            particles: true,
            repeat_clouds: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct SceneRenderer {
    localizer: Localizer,
    options: RenderOptions,
    scene: Scene,
}

impl SceneRenderer {
    #[must_use]
    pub fn new(localizer: Localizer, options: RenderOptions) -> Self {
        Self {
            localizer,
            options,
            scene: Scene::blank(),
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Replaces the current scene. The old scene stops animating at once and
    /// only survives as the frozen starting point of the cross-dissolve.
    pub fn display(&mut self, phenomenon: Option<&Phenomenon>, rng: &mut impl Rng) -> &Scene {
        let mut next = match phenomenon {
            Some(phenomenon) => self.build(phenomenon.kind, rng),
            None => Scene::blank(),
        };
        let previous = std::mem::replace(&mut self.scene, Scene::blank());
        next.transition = Some(CrossDissolve::new(previous));
        debug!(
            kind = ?next.kind,
            decorations = next.decorations.len(),
            lightning = ?next.lightning_period,
            "scene displayed"
        );
        self.scene = next;
        &self.scene
    }

    /// Looks a phenomenon up by its stable key; unknown keys show the blank
    /// scene.
    pub fn display_key(&mut self, key: &str, rng: &mut impl Rng) -> &Scene {
        let phenomenon = PhenomenonKind::from_key(key)
            .map(|kind| Phenomenon::new(kind, kind.default_icon()));
        self.display(phenomenon.as_ref(), rng)
    }

    pub fn tick(&mut self, dt: Duration, rng: &mut impl Rng) {
        self.scene.tick(dt, rng);
    }

    pub fn strike_lightning(&mut self, rng: &mut impl Rng) -> bool {
        self.scene.strike_lightning(rng)
    }

    fn build(&self, kind: PhenomenonKind, rng: &mut impl Rng) -> Scene {
        let config = scene_config(kind);
        let backdrop = assets::backdrop(config.background_key).unwrap_or_else(|err| {
            warn!(%err, "falling back to blank backdrop");
            BLANK_BACKDROP
        });

        let decorations = match config.decor {
            DecorRecipe::Emitter(emitter) => {
                vec![Decoration::Emitter(Emitter::new(
                    emitter,
                    self.options.particles,
                ))]
            }
            DecorRecipe::Sun => vec![Decoration::Sun(SunSprite::new())],
            DecorRecipe::Clouds { count } => (0..count)
                .map(|_| Decoration::Cloud(CloudFlight::spawn(rng, self.options.repeat_clouds)))
                .collect(),
        };

        let lightning_period = config
            .lightning
            .then(|| Duration::from_secs_f32(rng.random_range(LIGHTNING_PERIOD_SECS)));

        Scene {
            kind: kind.into(),
            background: Background {
                asset_key: Some(config.background_key),
                backdrop,
            },
            decorations,
            caption: Some(Caption {
                key: config.caption_key,
                text: self.localizer.text(config.caption_key).to_string(),
            }),
            lightning_period,
            transition: None,
        }
    }
}
