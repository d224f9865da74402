use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next surface texture, calls `draw` with a ready
    /// [`RenderCtx`] and [`RenderTarget`], then presents the frame.
    ///
    /// Nothing is cleared here; `draw` owns the whole target. A lost or
    /// outdated surface is reconfigured and the frame is skipped. An
    /// unrecoverable surface error ends the session through
    /// [`RuntimeCtx::fail`], so `Runtime::run` returns it.
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let desc = err.to_string();
                let action = self.gpu.handle_surface_error(err);
                return surface_error_control(self.runtime, action, &desc);
            }
        };

        let rctx = self.gpu.render_ctx();

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Control directive for a frame that could not acquire the surface.
fn surface_error_control(
    runtime: &mut RuntimeCtx,
    action: SurfaceErrorAction,
    desc: &str,
) -> AppControl {
    match action {
        SurfaceErrorAction::Fatal => {
            runtime.fail(anyhow::anyhow!("unrecoverable surface error: {desc}"));
            AppControl::Exit
        }
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => AppControl::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_surface_error_fails_the_session() {
        let mut runtime = RuntimeCtx::default();
        let control = surface_error_control(&mut runtime, SurfaceErrorAction::Fatal, "Out of memory");

        assert_eq!(control, AppControl::Exit);
        assert!(runtime.exit_requested());
        let err = runtime.take_error().expect("fatal error recorded");
        assert!(err.to_string().contains("Out of memory"));
    }

    #[test]
    fn recoverable_surface_errors_continue() {
        for action in [SurfaceErrorAction::Reconfigured, SurfaceErrorAction::SkipFrame] {
            let mut runtime = RuntimeCtx::default();
            assert_eq!(surface_error_control(&mut runtime, action, "Timeout"), AppControl::Continue);
            assert!(!runtime.exit_requested());
            assert!(runtime.take_error().is_none());
        }
    }
}
