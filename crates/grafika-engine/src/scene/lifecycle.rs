use anyhow::Result;

use crate::render::{RenderCtx, RenderTarget};

use super::{Scene, SceneConfig};

/// Host-side scene lifecycle: Uninitialized → Initialized → Released.
///
/// Calls made in the wrong state are caller errors. They are logged at
/// `error` and otherwise ignored; `Released` is terminal.
#[derive(Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized(Scene),
    Released,
}

impl Lifecycle {
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Initialized(_) => "initialized",
            Lifecycle::Released => "released",
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self, Lifecycle::Initialized(_))
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        matches!(self, Lifecycle::Released)
    }

    /// Uninitialized → Initialized. Errors from GPU setup are fatal and
    /// leave the lifecycle Uninitialized.
    pub fn init(
        &mut self,
        ctx: &RenderCtx<'_>,
        width: u32,
        height: u32,
        config: SceneConfig,
    ) -> Result<()> {
        if !matches!(self, Lifecycle::Uninitialized) {
            log::error!("init called while {}; ignored", self.name());
            return Ok(());
        }
        *self = Lifecycle::Initialized(Scene::init(ctx, width, height, config)?);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        match self {
            Lifecycle::Initialized(scene) => scene.resize(width, height),
            other => log::error!("resize called while {}; ignored", other.name()),
        }
    }

    pub fn update(&mut self, elapsed_seconds: f32) {
        match self {
            Lifecycle::Initialized(scene) => scene.update(elapsed_seconds),
            other => log::error!("update called while {}; ignored", other.name()),
        }
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        match self {
            Lifecycle::Initialized(scene) => scene.draw(ctx, target),
            other => log::error!("draw called while {}; ignored", other.name()),
        }
    }

    /// → Released. Releasing a scene that was never initialized has nothing
    /// to free; releasing twice is a caller error.
    pub fn release(&mut self) {
        match std::mem::replace(self, Lifecycle::Released) {
            Lifecycle::Initialized(scene) => scene.release(),
            Lifecycle::Uninitialized => log::debug!("released before init"),
            Lifecycle::Released => log::error!("release called while released; ignored"),
        }
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        match self {
            Lifecycle::Initialized(scene) => Some(scene),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let mut lc = Lifecycle::default();
        assert_eq!(lc.name(), "uninitialized");
        assert!(!lc.is_initialized());
        assert!(lc.scene_mut().is_none());
    }

    #[test]
    fn calls_before_init_are_ignored() {
        let mut lc = Lifecycle::default();
        lc.update(0.5);
        lc.resize(640, 480);
        assert_eq!(lc.name(), "uninitialized");
    }

    #[test]
    fn release_is_terminal() {
        let mut lc = Lifecycle::default();
        lc.release();
        assert!(lc.is_released());

        lc.release();
        lc.update(0.016);
        assert!(lc.is_released());
        assert!(lc.scene_mut().is_none());
    }
}
