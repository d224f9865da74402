/// Blend mode a program draw is issued with.
///
/// wgpu bakes blending into the pipeline, so each `Program` builds one
/// pipeline per mode up front.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Blend {
    /// `ONE, ONE_MINUS_SRC_ALPHA` on premultiplied colors.
    Premultiplied,
    /// Source replaces destination.
    Opaque,
}

impl Blend {
    pub(crate) fn state(self) -> Option<wgpu::BlendState> {
        match self {
            Blend::Premultiplied => Some(premul_alpha_blend()),
            Blend::Opaque => None,
        }
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplied_uses_one_one_minus_src_alpha() {
        let state = Blend::Premultiplied.state().expect("blend state");
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(state.alpha, state.color);
    }

    #[test]
    fn opaque_disables_blending() {
        assert!(Blend::Opaque.state().is_none());
    }
}
