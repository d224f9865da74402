use std::fmt;

use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::paint::Color;

use super::mesh::Vertex;
use super::{Blend, Mesh, RenderCtx, RenderTarget, Texture};

/// Which shader pair a [`Program`] wraps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ProgramKind {
    /// Solid premultiplied color.
    Flat,
    /// Samples a 2D texture with the shape's texture coordinates.
    Texture2d,
}

impl ProgramKind {
    pub fn label(self) -> &'static str {
        match self {
            ProgramKind::Flat => "flat",
            ProgramKind::Texture2d => "texture2d",
        }
    }

    fn source(self) -> &'static str {
        match self {
            ProgramKind::Flat => include_str!("shaders/flat.wgsl"),
            ProgramKind::Texture2d => include_str!("shaders/texture2d.wgsl"),
        }
    }

    fn uses_texture(self) -> bool {
        matches!(self, ProgramKind::Texture2d)
    }
}

/// What a draw fills its geometry with.
#[derive(Clone, Copy)]
pub enum Fill<'a> {
    Color(Color),
    Texture(&'a Texture),
}

/// Everything one draw call needs.
pub struct DrawParams<'a> {
    /// Model-view-projection matrix.
    pub mvp: Mat4,
    pub fill: Fill<'a>,
    pub mesh: &'a Mesh,
    pub blend: Blend,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawUniform {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

const DRAW_UNIFORM_SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

/// Compiled shader pair plus its resolved bindings.
///
/// Bindings and pipelines are created once in [`Program::new`] and stay valid
/// until [`Program::release`]. Every [`Program::draw`] is self-contained: it
/// uploads its own uniforms, opens its own render pass, binds everything,
/// draws, and ends the pass. Nothing is cached between draws.
pub struct Program {
    kind: ProgramKind,
    bind_group_layout: wgpu::BindGroupLayout,
    blended: wgpu::RenderPipeline,
    opaque: wgpu::RenderPipeline,
    skip_warning: WarnOnce,
}

impl Program {
    /// Compiles the built-in shaders for `kind`.
    ///
    /// An error here is fatal for the rendering session.
    pub fn new(ctx: &RenderCtx<'_>, kind: ProgramKind) -> Result<Self> {
        Self::with_source(ctx, kind, kind.source())
    }

    /// Compiles `wgsl` (which must define `vs_main` and `fs_main`) against the
    /// binding layout of `kind`.
    fn with_source(ctx: &RenderCtx<'_>, kind: ProgramKind, wgsl: &str) -> Result<Self> {
        let label = kind.label();

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(wgsl.into()),
        });
        check_compilation(&shader, kind)?;

        let bind_group_layout = create_bind_group_layout(ctx.device, kind);

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let blended = create_pipeline(ctx, kind, &shader, &pipeline_layout, Blend::Premultiplied);
        let opaque = create_pipeline(ctx, kind, &shader, &pipeline_layout, Blend::Opaque);

        log::debug!("created {label} program ({:?})", ctx.surface_format);

        Ok(Self {
            kind,
            bind_group_layout,
            blended,
            opaque,
            skip_warning: WarnOnce::default(),
        })
    }

    #[inline]
    pub fn kind(&self) -> ProgramKind {
        self.kind
    }

    /// Draws `params.mesh` as a triangle strip.
    ///
    /// A fill that does not match the program (a texture into the flat
    /// program or a color into the texture program) is a caller error; the
    /// draw is skipped and a warning is logged once.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, params: &DrawParams<'_>) {
        let (color, texture) = match (self.kind, params.fill) {
            (ProgramKind::Flat, Fill::Color(c)) => (c.to_array(), None),
            (ProgramKind::Texture2d, Fill::Texture(t)) => ([1.0; 4], Some(t)),
            _ => {
                let label = self.kind.label();
                self.warn_skipped(format_args!("{label} program given a mismatched fill; draw skipped"));
                return;
            }
        };

        let uniform = DrawUniform {
            mvp: params.mvp.to_cols_array_2d(),
            color,
        };
        let ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grafika draw ubo"),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = match texture {
            None => ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("grafika flat bind group"),
                layout: &self.bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                }],
            }),
            Some(texture) => ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("grafika texture2d bind group"),
                layout: &self.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: ubo.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(texture.view()),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(texture.sampler()),
                    },
                ],
            }),
        };

        let pipeline = match params.blend {
            Blend::Premultiplied => &self.blended,
            Blend::Opaque => &self.opaque,
        };

        let mut rpass = target.load_pass(self.kind.label());
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bind_group, &[]);
        rpass.set_vertex_buffer(0, params.mesh.buffer().slice(..));
        rpass.draw(0..params.mesh.vertex_count(), 0..1);
    }

    /// Logs a skipped draw at `warn`. Only the first skip per program is
    /// logged.
    pub(crate) fn warn_skipped(&mut self, msg: fmt::Arguments<'_>) {
        self.skip_warning.warn(msg);
    }

    /// Frees the GPU program. Consumes `self`, so it cannot be drawn with again.
    pub fn release(self) {
        log::debug!("released {} program", self.kind.label());
    }
}

/// Latch that lets a warning through once.
#[derive(Debug, Default)]
struct WarnOnce {
    fired: bool,
}

impl WarnOnce {
    /// Returns `true` if this call logged.
    fn warn(&mut self, msg: fmt::Arguments<'_>) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        log::warn!("{msg}");
        true
    }
}

fn check_compilation(shader: &wgpu::ShaderModule, kind: ProgramKind) -> Result<()> {
    let info = pollster::block_on(shader.get_compilation_info());

    let errors: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| m.message.clone())
        .collect();

    if !errors.is_empty() {
        bail!("{} shader failed to compile: {}", kind.label(), errors.join("; "));
    }
    Ok(())
}

fn create_bind_group_layout(device: &wgpu::Device, kind: ProgramKind) -> wgpu::BindGroupLayout {
    let uniform = wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(DRAW_UNIFORM_SIZE),
        },
        count: None,
    };

    let texture = wgpu::BindGroupLayoutEntry {
        binding: 1,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    };

    let sampler = wgpu::BindGroupLayoutEntry {
        binding: 2,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };

    let textured = [uniform, texture, sampler];
    let entries: &[wgpu::BindGroupLayoutEntry] = if kind.uses_texture() {
        &textured
    } else {
        &textured[..1]
    };

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(kind.label()),
        entries,
    })
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    kind: ProgramKind,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    blend: Blend,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(kind.label()),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: blend.state(),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Negative scales flip winding; never cull.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_is_std140_friendly() {
        assert_eq!(DRAW_UNIFORM_SIZE, 80);
        assert_eq!(DRAW_UNIFORM_SIZE % 16, 0);
    }

    #[test]
    fn skipped_draw_warns_once() {
        let mut latch = WarnOnce::default();
        assert!(latch.warn(format_args!("first skip")));
        assert!(!latch.warn(format_args!("second skip")));
        assert!(!latch.warn(format_args!("third skip")));
    }

    #[test]
    fn only_texture_program_samples() {
        assert!(ProgramKind::Texture2d.uses_texture());
        assert!(!ProgramKind::Flat.uses_texture());
        assert!(ProgramKind::Flat.source().contains("fn fs_main"));
        assert!(ProgramKind::Texture2d.source().contains("textureSample"));
    }
}
