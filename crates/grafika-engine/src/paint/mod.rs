//! Color model shared by sprites, programs and the scene.
//!
//! Colors are linear premultiplied RGBA so they compose correctly with the
//! `ONE, ONE_MINUS_SRC_ALPHA` blend used for translucent sprites.

pub mod color;

pub use color::Color;
