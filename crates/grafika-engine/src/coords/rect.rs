use glam::Vec2;

/// Axis-aligned rectangle stored as min/max corners (bottom-left origin, +Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            min: Vec2::new(left, bottom),
            max: Vec2::new(right, top),
        }
    }

    /// Rectangle of `size` centered on `center`. Negative sizes are normalized.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.max.y
    }

    /// Closed containment: points on the edge are inside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    /// True when `other` lies entirely within `self` (edges may touch).
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: f32, b: f32, rt: f32, t: f32) -> Rect { Rect::new(l, b, rt, t) }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_center_size_is_symmetric() {
        let rect = Rect::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(rect, r(8.0, 17.0, 12.0, 23.0));
    }

    #[test]
    fn from_center_size_normalizes_negative_extent() {
        let a = Rect::from_center_size(Vec2::ZERO, Vec2::new(-2.0, 2.0));
        let b = Rect::from_center_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert_eq!(a, b);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_edges_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.5, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.5)));
    }

    #[test]
    fn contains_rect_requires_both_corners() {
        let outer = r(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(r(10.0, 10.0, 20.0, 20.0)));
        assert!(outer.contains_rect(outer));
        assert!(!outer.contains_rect(r(90.0, 90.0, 110.0, 95.0)));
    }
}
