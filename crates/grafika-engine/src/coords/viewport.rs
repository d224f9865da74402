use glam::Mat4;

/// Drawable surface size in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Smaller of the two dimensions.
    ///
    /// Sizing shapes from this keeps them square on screen for any aspect ratio.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// Orthographic projection mapping `(0..width, 0..height)` to NDC.
    ///
    /// Near/far are `-1..1`, so sprites drawn at `z = 0` land mid-range in
    /// wgpu's `[0, 1]` clip depth.
    #[inline]
    pub fn ortho_projection(self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, 0.0, self.height, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn min_side_picks_smaller_dimension() {
        assert_eq!(Viewport::new(1280.0, 720.0).min_side(), 720.0);
        assert_eq!(Viewport::new(480.0, 800.0).min_side(), 480.0);
    }

    #[test]
    fn projection_maps_corners_to_ndc() {
        let proj = Viewport::new(1280.0, 720.0).ortho_projection();
        assert!(close(proj.project_point3(Vec3::new(0.0, 0.0, 0.0)), Vec3::new(-1.0, -1.0, 0.5)));
        assert!(close(
            proj.project_point3(Vec3::new(1280.0, 720.0, 0.0)),
            Vec3::new(1.0, 1.0, 0.5)
        ));
        assert!(close(proj.project_point3(Vec3::new(640.0, 360.0, 0.0)), Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 720.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 720.0).is_valid());
        assert!(Viewport::from_physical(1, 1).is_valid());
    }
}
