use glam::{Mat4, Vec2, Vec3};

use crate::coords::Rect;
use crate::paint::Color;

use super::{
    Assets, Blend, DrawParams, Fill, Program, ProgramKind, RenderCtx, RenderTarget, Shape, ShapeKind,
    TextureId,
};

/// A 2D drawable: a shared shape placed by position, scale and rotation,
/// filled with a color or a texture depending on the program drawing it.
///
/// Setters are plain mutation with no validation.
#[derive(Debug, Clone)]
pub struct Sprite {
    shape: &'static Shape,
    position: Vec2,
    scale: Vec2,
    rotation: f32,
    color: Color,
    texture: Option<TextureId>,
}

impl Sprite {
    /// Unit-scale sprite at the origin, opaque white, no texture.
    pub fn new(shape: &'static Shape) -> Self {
        Self {
            shape,
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            color: Color::WHITE,
            texture: None,
        }
    }

    #[inline]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    #[inline]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Shape extent in pixels along each axis (the shapes are unit sized).
    #[inline]
    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.scale = Vec2::new(sx, sy);
    }

    /// Rotation in degrees, counter-clockwise.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Sets rotation in degrees, folded into `(-360, 360)`.
    #[inline]
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees % 360.0;
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    #[inline]
    pub fn set_texture(&mut self, texture: TextureId) {
        self.texture = Some(texture);
    }

    /// Axis-aligned box covered by the unrotated sprite.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.scale)
    }

    /// `translate(position) * rotate_z(rotation) * scale(sx, sy, 1)`.
    pub fn model_matrix(&self) -> Mat4 {
        let mut m = Mat4::from_translation(self.position.extend(0.0));
        if self.rotation != 0.0 {
            m *= Mat4::from_rotation_z(self.rotation.to_radians());
        }
        m * Mat4::from_scale(Vec3::new(self.scale.x, self.scale.y, 1.0))
    }

    /// `projection * model`.
    #[inline]
    pub fn model_view_projection(&self, projection: &Mat4) -> Mat4 {
        *projection * self.model_matrix()
    }

    /// Transform and mesh a draw of this sprite with `program` uses.
    ///
    /// Every program gets the same pair, so flat and textured draws cover
    /// exactly the same pixels; only the fill differs.
    pub fn draw_geometry(&self, program: ProgramKind, projection: &Mat4) -> (Mat4, ShapeKind) {
        match program {
            ProgramKind::Flat | ProgramKind::Texture2d => {
                (self.model_view_projection(projection), self.shape.kind)
            }
        }
    }

    /// The fill `program` should use for this sprite: the color for the flat
    /// program, the texture for the texture program.
    pub fn fill_for<'a>(&self, program: ProgramKind, assets: &'a Assets) -> Option<Fill<'a>> {
        match program {
            ProgramKind::Flat => Some(Fill::Color(self.color)),
            ProgramKind::Texture2d => self.texture.and_then(|id| assets.texture(id)).map(Fill::Texture),
        }
    }

    /// Draws the sprite with `program`.
    ///
    /// A sprite with no usable texture is skipped by the texture program and
    /// the program warns once.
    pub fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        program: &mut Program,
        assets: &Assets,
        projection: &Mat4,
        blend: Blend,
    ) {
        let Some(fill) = self.fill_for(program.kind(), assets) else {
            let label = program.kind().label();
            program.warn_skipped(format_args!("sprite has no texture for the {label} program; draw skipped"));
            return;
        };

        let (mvp, kind) = self.draw_geometry(program.kind(), projection);
        let params = DrawParams {
            mvp,
            fill,
            mesh: assets.mesh(kind),
            blend,
        };
        program.draw(ctx, target, &params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn unrotated_model_scales_then_translates() {
        let mut s = Sprite::new(&Shape::RECTANGLE);
        s.set_position(100.0, 50.0);
        s.set_scale(20.0, 10.0);

        let m = s.model_matrix();
        assert!(close(m.transform_point3(Vec3::new(0.5, 0.5, 0.0)), Vec3::new(110.0, 55.0, 0.0)));
        assert!(close(m.transform_point3(Vec3::new(-0.5, -0.5, 0.0)), Vec3::new(90.0, 45.0, 0.0)));
    }

    #[test]
    fn rotation_is_counter_clockwise_degrees() {
        let mut s = Sprite::new(&Shape::RECTANGLE);
        s.set_scale(10.0, 10.0);
        s.set_rotation(90.0);

        // +X of the unit shape ends up on +Y after scaling.
        let p = s.model_matrix().transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!(close(p, Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let mut s = Sprite::new(&Shape::TRIANGLE);
        s.set_position(10.0, 0.0);
        s.set_scale(2.0, 2.0);
        s.set_rotation(180.0);

        let p = s.model_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(p, Vec3::new(8.0, 0.0, 0.0)));
    }

    #[test]
    fn set_rotation_folds_full_turns() {
        let mut s = Sprite::new(&Shape::TRIANGLE);
        s.set_rotation(725.0);
        assert!((s.rotation() - 5.0).abs() < 1e-4);
        s.set_rotation(-370.0);
        assert!((s.rotation() + 10.0).abs() < 1e-4);
    }

    #[test]
    fn mvp_composes_projection_after_model() {
        let mut s = Sprite::new(&Shape::RECTANGLE);
        s.set_position(640.0, 360.0);
        s.set_scale(100.0, 100.0);
        let proj = Mat4::orthographic_rh(0.0, 1280.0, 0.0, 720.0, -1.0, 1.0);

        let center = s.model_view_projection(&proj) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(close(center.truncate(), Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn bounds_follow_position_and_scale() {
        let mut s = Sprite::new(&Shape::RECTANGLE);
        s.set_position(50.0, 60.0);
        s.set_scale(10.0, 20.0);
        assert_eq!(s.bounds(), Rect::new(45.0, 50.0, 55.0, 70.0));
    }

    #[test]
    fn flat_and_texture_programs_share_geometry() {
        let proj = Mat4::orthographic_rh(0.0, 1280.0, 0.0, 720.0, -1.0, 1.0);
        for shape in [&Shape::TRIANGLE, &Shape::RECTANGLE] {
            let mut s = Sprite::new(shape);
            s.set_position(300.0, 200.0);
            s.set_scale(144.0, 96.0);
            s.set_rotation(37.0);

            let flat = s.draw_geometry(ProgramKind::Flat, &proj);
            let textured = s.draw_geometry(ProgramKind::Texture2d, &proj);
            assert_eq!(flat, textured);
            assert_eq!(flat, (s.model_view_projection(&proj), shape.kind));
        }
    }

    #[test]
    fn new_sprite_has_no_texture() {
        let s = Sprite::new(&Shape::RECTANGLE);
        assert!(s.texture().is_none());
        assert_eq!(s.color(), Color::WHITE);
        assert_eq!(s.shape().kind, ShapeKind::Rectangle);
    }
}
