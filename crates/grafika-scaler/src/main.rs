//! Hardware-scaler demo host.
//!
//! Opens a window, drives the bouncing-sprite scene once per frame and maps
//! a few keys onto it:
//! - `F` toggles textured / flat shading
//! - `Space` pauses the animation
//! - `Escape` exits

use anyhow::Result;
use winit::dpi::LogicalSize;

use grafika_engine::core::{App, AppControl, FrameCtx};
use grafika_engine::device::GpuInit;
use grafika_engine::input::{InputFrame, Key};
use grafika_engine::logging::{init_logging, LoggingConfig};
use grafika_engine::scene::{Lifecycle, SceneConfig};
use grafika_engine::time::FrameRate;
use grafika_engine::window::{Runtime, RuntimeConfig};

/// Frames averaged per fps log line.
const FPS_WINDOW: u32 = 120;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "grafika hardware scaler".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    Runtime::run(config, GpuInit::default(), ScalerApp::new(SceneConfig::default()))
}

/// What the host does in response to this frame's key presses.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
struct KeyActions {
    toggle_shading: bool,
    toggle_pause: bool,
    exit: bool,
}

impl KeyActions {
    fn from_frame(frame: &InputFrame) -> Self {
        Self {
            toggle_shading: frame.pressed(Key::F),
            toggle_pause: frame.pressed(Key::Space),
            exit: frame.pressed(Key::Escape),
        }
    }
}

struct ScalerApp {
    config: SceneConfig,
    scene: Lifecycle,
    paused: bool,
    fps: FrameRate,

    /// Drawable size the scene was last laid out for.
    size: (u32, u32),
}

impl ScalerApp {
    fn new(config: SceneConfig) -> Self {
        Self {
            config,
            scene: Lifecycle::default(),
            paused: false,
            fps: FrameRate::new(FPS_WINDOW),
            size: (0, 0),
        }
    }

    fn apply_keys(&mut self, actions: KeyActions) -> AppControl {
        if actions.exit {
            return AppControl::Exit;
        }

        if actions.toggle_shading {
            // Kept on the host so the choice survives a suspend/resume.
            self.config.shading = self.config.shading.toggled();
            if let Some(scene) = self.scene.scene_mut() {
                scene.set_shading(self.config.shading);
            }
        }

        if actions.toggle_pause {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        AppControl::Continue
    }
}

impl App for ScalerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.apply_keys(KeyActions::from_frame(ctx.input_frame)) == AppControl::Exit {
            return AppControl::Exit;
        }

        let size = ctx.gpu.size();
        let size = (size.width, size.height);
        if size.0 == 0 || size.1 == 0 {
            // Minimized: nothing to draw into.
            return AppControl::Continue;
        }

        if !self.scene.is_initialized() {
            let rctx = ctx.gpu.render_ctx();
            if let Err(e) = self.scene.init(&rctx, size.0, size.1, self.config.clone()) {
                ctx.runtime.fail(e.context("scene initialization failed"));
                return AppControl::Exit;
            }
            self.size = size;
        } else if size != self.size {
            self.scene.resize(size.0, size.1);
            self.size = size;
        }

        if !self.paused {
            self.scene.update(ctx.time.dt);
        }

        if let Some(fps) = self.fps.record(&ctx.time) {
            log::debug!("{fps:.1} fps");
        }

        let scene = &mut self.scene;
        ctx.render(|rctx, target| scene.draw(rctx, target))
    }

    fn on_surface_lost(&mut self) {
        self.scene.release();
        // A resume brings a new GPU context; start over from Uninitialized.
        self.scene = Lifecycle::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grafika_engine::input::{InputEvent, InputState, KeyState};
    use grafika_engine::scene::ShadingMode;

    fn press(keys: &[Key]) -> InputFrame {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key { key, state: KeyState::Pressed, repeat: false },
            );
        }
        frame
    }

    #[test]
    fn keys_map_to_actions() {
        let actions = KeyActions::from_frame(&press(&[Key::F, Key::Space]));
        assert!(actions.toggle_shading);
        assert!(actions.toggle_pause);
        assert!(!actions.exit);

        assert_eq!(KeyActions::from_frame(&press(&[Key::Tab])), KeyActions::default());
    }

    #[test]
    fn shading_toggle_is_kept_without_a_scene() {
        let mut app = ScalerApp::new(SceneConfig::default());
        let actions = KeyActions { toggle_shading: true, ..Default::default() };

        assert_eq!(app.apply_keys(actions), AppControl::Continue);
        assert_eq!(app.config.shading, ShadingMode::Flat);
    }

    #[test]
    fn escape_exits_before_other_actions() {
        let mut app = ScalerApp::new(SceneConfig::default());
        let actions = KeyActions { exit: true, toggle_pause: true, ..Default::default() };

        assert_eq!(app.apply_keys(actions), AppControl::Exit);
        assert!(!app.paused);
    }

    #[test]
    fn surface_loss_resets_scene_for_resume() {
        let mut app = ScalerApp::new(SceneConfig::default());
        app.on_surface_lost();
        assert!(!app.scene.is_initialized());
        assert!(!app.scene.is_released());
    }
}
