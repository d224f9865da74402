//! Grafika engine crate.
//!
//! Hardware-scaler demo scene on wgpu: textured and flat-shaded sprites,
//! premultiplied blending, and the winit runtime that hosts them.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
