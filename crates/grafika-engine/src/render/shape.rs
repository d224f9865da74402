//! Static vertex descriptors shared by every sprite that draws them.

/// Which built-in shape a descriptor describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
}

/// Read-only vertex layout for a unit-sized shape centered on the origin.
///
/// Vertices are ordered for a triangle strip. Texture coordinates put texel
/// row 0 at the top of the shape.
#[derive(Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub positions: &'static [[f32; 2]],
    pub tex_coords: &'static [[f32; 2]],
}

// Equilateral triangle with unit sides, centroid at the origin.
const TRIANGLE_POSITIONS: [[f32; 2]; 3] = [
    [0.0, 0.577_350_27],    // top
    [-0.5, -0.288_675_13],  // bottom left
    [0.5, -0.288_675_13],   // bottom right
];

const TRIANGLE_TEX_COORDS: [[f32; 2]; 3] = [
    [0.5, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
];

// 1x1 square, strip order: bottom left, bottom right, top left, top right.
const RECTANGLE_POSITIONS: [[f32; 2]; 4] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [-0.5, 0.5],
    [0.5, 0.5],
];

const RECTANGLE_TEX_COORDS: [[f32; 2]; 4] = [
    [0.0, 1.0],
    [1.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
];

impl Shape {
    pub const TRIANGLE: Shape = Shape {
        kind: ShapeKind::Triangle,
        positions: &TRIANGLE_POSITIONS,
        tex_coords: &TRIANGLE_TEX_COORDS,
    };

    pub const RECTANGLE: Shape = Shape {
        kind: ShapeKind::Rectangle,
        positions: &RECTANGLE_POSITIONS,
        tex_coords: &RECTANGLE_TEX_COORDS,
    };

    /// Returns the shared descriptor for `kind`.
    pub fn of(kind: ShapeKind) -> &'static Shape {
        match kind {
            ShapeKind::Triangle => &Self::TRIANGLE,
            ShapeKind::Rectangle => &Self::RECTANGLE,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid(shape: &Shape) -> [f32; 2] {
        let n = shape.positions.len() as f32;
        let (sx, sy) = shape
            .positions
            .iter()
            .fold((0.0, 0.0), |(x, y), p| (x + p[0], y + p[1]));
        [sx / n, sy / n]
    }

    #[test]
    fn shapes_are_centered_on_origin() {
        for shape in [&Shape::TRIANGLE, &Shape::RECTANGLE] {
            let [cx, cy] = centroid(shape);
            assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6, "{:?} off center", shape.kind);
        }
    }

    #[test]
    fn triangle_sides_are_unit_length() {
        let p = Shape::TRIANGLE.positions;
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let len = ((p[a][0] - p[b][0]).powi(2) + (p[a][1] - p[b][1]).powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn rectangle_spans_unit_square() {
        let p = Shape::RECTANGLE.positions;
        let xs = p.iter().map(|v| v[0]);
        let ys = p.iter().map(|v| v[1]);
        assert_eq!(xs.clone().fold(f32::MAX, f32::min), -0.5);
        assert_eq!(xs.fold(f32::MIN, f32::max), 0.5);
        assert_eq!(ys.clone().fold(f32::MAX, f32::min), -0.5);
        assert_eq!(ys.fold(f32::MIN, f32::max), 0.5);
    }

    #[test]
    fn every_position_has_a_tex_coord() {
        for kind in [ShapeKind::Triangle, ShapeKind::Rectangle] {
            let shape = Shape::of(kind);
            assert_eq!(shape.kind, kind);
            assert_eq!(shape.positions.len(), shape.tex_coords.len());
        }
        assert_eq!(Shape::TRIANGLE.vertex_count(), 3);
        assert_eq!(Shape::RECTANGLE.vertex_count(), 4);
    }
}
