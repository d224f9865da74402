//! Bouncing-sprite scene.
//!
//! A spinning triangle and a rectangle bouncing inside a frame of four border
//! boxes. Split in layers:
//! - `SceneState`: sprites, physics and projection; pure CPU, no GPU handles
//! - `Scene`: owns the programs, meshes and textures, and drives `SceneState`
//! - `Lifecycle`: host-side Uninitialized → Initialized → Released guard
//!
//! Host contract: `init`, then `update(dt)` + `draw()` once per frame, then
//! `release()`. Everything runs on the thread that owns the GPU context.
//!
//! Known limitations:
//! - after a resize the first frame may be drawn with the previous layout
//!   (one-frame glitch)
//! - there is no "draw on-screen then blit to a second framebuffer" mode

mod config;
mod driver;
mod edge;
mod lifecycle;
mod state;

pub use config::{SceneConfig, ShadingMode};
pub use driver::Scene;
pub use edge::{Edge, Edges};
pub use lifecycle::Lifecycle;
pub use state::SceneState;
