//! 2D rendering utility layer.
//!
//! Pieces:
//! - `Program`: a compiled shader pair plus its resolved bindings; one draw
//!   call per invocation, no state kept between calls
//! - `Shape` / `Mesh`: static vertex descriptors and their GPU buffers
//! - `Sprite`: position/scale/rotation plus color or texture
//! - `generated_texture`: procedural checkerboard test images
//!
//! Convention:
//! - CPU geometry is in pixels (bottom-left origin, +Y up).
//! - The caller supplies the projection; the vertex shader only applies the MVP.
//! - Every entry point takes the GPU context explicitly (`RenderCtx`,
//!   `RenderTarget`); nothing here reads ambient GPU state.

mod assets;
mod blend;
mod ctx;
pub mod generated_texture;
pub mod mesh;
pub mod program;
pub mod shape;
pub mod sprite;
pub mod texture;

pub use assets::{Assets, TextureId};
pub use blend::Blend;
pub use ctx::{RenderCtx, RenderTarget};
pub use generated_texture::{Image, Pattern};
pub use mesh::Mesh;
pub use program::{DrawParams, Fill, Program, ProgramKind};
pub use shape::{Shape, ShapeKind};
pub use sprite::Sprite;
pub use texture::Texture;
