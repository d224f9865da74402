use super::{Mesh, RenderCtx, Shape, ShapeKind, Texture};

/// Handle to a texture owned by an [`Assets`] set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(usize);

impl TextureId {
    #[cfg(test)]
    pub(crate) fn for_tests(index: usize) -> Self {
        TextureId(index)
    }
}

/// GPU meshes and textures a scene draws from.
///
/// Everything here is released together when the set is dropped or passed to
/// [`Assets::release`]; sprites only hold shape references and `TextureId`s.
pub struct Assets {
    triangle: Mesh,
    rectangle: Mesh,
    textures: Vec<Texture>,
}

impl Assets {
    /// Uploads the built-in shape meshes. Textures are added separately.
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        Self {
            triangle: Mesh::new(ctx, &Shape::TRIANGLE),
            rectangle: Mesh::new(ctx, &Shape::RECTANGLE),
            textures: Vec::new(),
        }
    }

    #[inline]
    pub fn mesh(&self, kind: ShapeKind) -> &Mesh {
        match kind {
            ShapeKind::Triangle => &self.triangle,
            ShapeKind::Rectangle => &self.rectangle,
        }
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    /// Returns the texture for `id`, or `None` if it belongs to another set.
    #[inline]
    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    /// Frees every mesh and texture now.
    pub fn release(self) {
        log::debug!("releasing 2 meshes and {} textures", self.textures.len());
        drop(self);
    }
}
