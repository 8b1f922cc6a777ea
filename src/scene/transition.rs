use super::{Decoration, Scene, config::CROSS_DISSOLVE_SECS};
use crate::assets::Backdrop;

/// Blend from a frozen snapshot of the previous scene into the current one.
/// The snapshot is never ticked and is released once the blend completes.
#[derive(Debug)]
pub struct CrossDissolve {
    outgoing: Box<Scene>,
    elapsed: f32,
}

impl CrossDissolve {
    /// Lightning and any nested dissolve of the previous scene are dropped.
    #[must_use]
    pub fn new(mut outgoing: Scene) -> Self {
        outgoing.transition = None;
        outgoing.lightning_period = None;
        outgoing
            .decorations
            .retain(|d| !matches!(d, Decoration::Lightning(_)));
        Self {
            outgoing: Box::new(outgoing),
            elapsed: 0.0,
        }
    }

    #[must_use]
    pub fn outgoing(&self) -> &Scene {
        &self.outgoing
    }

    #[must_use]
    pub fn outgoing_backdrop(&self) -> Backdrop {
        self.outgoing.background.backdrop
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// 0.0 shows only the previous scene, 1.0 only the new one.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed / CROSS_DISSOLVE_SECS).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= CROSS_DISSOLVE_SECS
    }
}
