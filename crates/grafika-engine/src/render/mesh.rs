use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::{RenderCtx, Shape, ShapeKind};

/// Interleaved vertex uploaded for every shape: position then texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Interleaves a shape's positions and texture coordinates.
pub(crate) fn interleave(shape: &Shape) -> Vec<Vertex> {
    shape
        .positions
        .iter()
        .zip(shape.tex_coords)
        .map(|(&pos, &uv)| Vertex { pos, uv })
        .collect()
}

/// GPU vertex buffer for one [`Shape`].
///
/// Created once per scene and shared by every sprite drawing that shape.
pub struct Mesh {
    vertex_count: u32,
    vbo: wgpu::Buffer,
}

impl Mesh {
    pub fn new(ctx: &RenderCtx<'_>, shape: &Shape) -> Self {
        let vertices = interleave(shape);
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(match shape.kind {
                ShapeKind::Triangle => "grafika triangle vbo",
                ShapeKind::Rectangle => "grafika rectangle vbo",
            }),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_count: shape.vertex_count(),
            vbo,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &wgpu::Buffer {
        &self.vbo
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        self.vbo.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_four_floats() {
        assert_eq!(Vertex::layout().array_stride, 16);
        assert_eq!(Vertex::ATTRS[1].offset, 8);
    }

    #[test]
    fn interleave_pairs_positions_with_tex_coords() {
        let v = interleave(&Shape::RECTANGLE);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], Vertex { pos: [-0.5, -0.5], uv: [0.0, 1.0] });
        assert_eq!(v[3], Vertex { pos: [0.5, 0.5], uv: [1.0, 0.0] });
    }
}
