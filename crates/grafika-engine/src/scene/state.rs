use glam::{Mat4, Vec2};

use crate::coords::{Rect, Viewport};
use crate::paint::Color;
use crate::render::{Shape, Sprite, TextureId};

use super::{Edge, Edges};

const TRIANGLE_COLOR: Color = Color::rgb(0.1, 0.9, 0.1);
const RECTANGLE_COLOR: Color = Color::rgb(0.9, 0.1, 0.1);
const EDGE_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Sprites, bounce physics and projection for one viewport size.
///
/// Pure CPU state: drawing goes through [`Scene`](super::Scene), which owns
/// the GPU side.
#[derive(Debug, Clone)]
pub struct SceneState {
    viewport: Viewport,
    projection: Mat4,

    triangle: Sprite,
    rectangle: Sprite,
    edges: Edges,

    /// Rectangle velocity in pixels per second.
    velocity: Vec2,

    /// Frame the rectangle bounces inside.
    inner: Rect,

    /// Triangle spin in degrees per second.
    spin_rate: f32,
}

impl SceneState {
    pub fn new(viewport: Viewport, spin_rate: f32) -> Self {
        let mut state = Self {
            viewport,
            projection: Mat4::IDENTITY,
            triangle: Sprite::new(&Shape::TRIANGLE),
            rectangle: Sprite::new(&Shape::RECTANGLE),
            edges: Edges::new(),
            velocity: Vec2::ZERO,
            inner: Rect::default(),
            spin_rate,
        };
        state.layout(viewport);
        state
    }

    /// Gives the triangle and rectangle their textures.
    pub fn assign_textures(&mut self, triangle: TextureId, rectangle: TextureId) {
        self.triangle.set_texture(triangle);
        self.rectangle.set_texture(rectangle);
    }

    /// Lays the scene out for a new viewport size.
    ///
    /// Sprites are re-centered and the velocity reset; the triangle keeps
    /// its rotation.
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout(viewport);
    }

    fn layout(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        let small = viewport.min_side();

        self.viewport = viewport;
        self.projection = viewport.ortho_projection();

        self.triangle.set_color(TRIANGLE_COLOR);
        self.triangle.set_scale(small / 3.0, small / 3.0);
        self.triangle.set_position(w / 2.0, h / 2.0);

        self.rectangle.set_color(RECTANGLE_COLOR);
        self.rectangle.set_scale(small / 5.0, small / 5.0);
        self.rectangle.set_position(w / 2.0, h / 2.0);
        self.velocity = Vec2::new(1.0 + small / 4.0, 1.0 + small / 5.0);

        // Whole pixels: one plus 1/64 of the width, rounded down.
        let thickness = (1 + viewport.width as u32 / 64) as f32;
        for edge in Edge::ALL {
            let sprite = &mut self.edges[edge];
            sprite.set_color(EDGE_COLOR);
            match edge {
                Edge::Left => {
                    sprite.set_scale(thickness, h);
                    sprite.set_position(thickness / 2.0, h / 2.0);
                }
                Edge::Right => {
                    sprite.set_scale(thickness, h);
                    sprite.set_position(w - thickness / 2.0, h / 2.0);
                }
                Edge::Top => {
                    sprite.set_scale(w, thickness);
                    sprite.set_position(w / 2.0, h - thickness / 2.0);
                }
                Edge::Bottom => {
                    sprite.set_scale(w, thickness);
                    sprite.set_position(w / 2.0, thickness / 2.0);
                }
            }
        }

        self.inner = Rect::new(thickness, thickness, w - 1.0 - thickness, h - 1.0 - thickness);
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// The triangle spins at `spin_rate`. The rectangle moves by its velocity;
    /// a velocity component flips sign when the rectangle, moving in that
    /// direction, crosses the inner frame. Overlap is not corrected, so the
    /// rectangle may poke slightly under an edge (the edges are drawn on top).
    pub fn update(&mut self, dt: f32) {
        self.triangle
            .set_rotation(self.triangle.rotation() + self.spin_rate * dt);

        let pos = self.rectangle.position() + self.velocity * dt;
        let half = self.rectangle.scale() * 0.5;

        if (self.velocity.x < 0.0 && pos.x - half.x < self.inner.left())
            || (self.velocity.x > 0.0 && pos.x + half.x > self.inner.right() + 1.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.velocity.y < 0.0 && pos.y - half.y < self.inner.bottom())
            || (self.velocity.y > 0.0 && pos.y + half.y > self.inner.top() + 1.0)
        {
            self.velocity.y = -self.velocity.y;
        }

        self.rectangle.set_position(pos.x, pos.y);
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    #[inline]
    pub fn triangle(&self) -> &Sprite {
        &self.triangle
    }

    #[inline]
    pub fn rectangle(&self) -> &Sprite {
        &self.rectangle
    }

    #[inline]
    pub fn rectangle_mut(&mut self) -> &mut Sprite {
        &mut self.rectangle
    }

    #[inline]
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn inner_bounds(&self) -> Rect {
        self.inner
    }
}
