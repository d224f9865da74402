//! Coordinate and geometry types shared by the sprite layer and the scene.
//!
//! Canonical CPU space:
//! - Pixels of the drawable surface
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Positions are mapped to NDC by an orthographic projection built from the
//! current `Viewport`. Vectors and matrices are `glam` types.

mod rect;
mod viewport;

pub use glam::{Mat4, Vec2};
pub use rect::Rect;
pub use viewport::Viewport;
