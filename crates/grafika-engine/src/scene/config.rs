use crate::paint::Color;
use crate::render::ProgramKind;

/// How the triangle and rectangle are filled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShadingMode {
    /// Generated checkerboard textures.
    #[default]
    Textured,
    /// Each sprite's flat color.
    Flat,
}

impl ShadingMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ShadingMode::Textured => ShadingMode::Flat,
            ShadingMode::Flat => ShadingMode::Textured,
        }
    }

    #[inline]
    pub fn program_kind(self) -> ProgramKind {
        match self {
            ShadingMode::Textured => ProgramKind::Texture2d,
            ShadingMode::Flat => ProgramKind::Flat,
        }
    }
}

/// Scene tunables.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub shading: ShadingMode,

    /// Triangle spin rate in degrees per second.
    pub spin_rate: f32,

    /// Color the frame is cleared to before drawing.
    pub clear_color: Color,
}

impl SceneConfig {
    /// One full turn every three seconds.
    pub const DEFAULT_SPIN_RATE: f32 = 360.0 / 3.0;
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shading: ShadingMode::default(),
            spin_rate: Self::DEFAULT_SPIN_RATE,
            clear_color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spin_is_120_degrees_per_second() {
        assert_eq!(SceneConfig::default().spin_rate, 120.0);
    }

    #[test]
    fn toggling_switches_program() {
        let mode = ShadingMode::default();
        assert_eq!(mode.program_kind(), ProgramKind::Texture2d);
        assert_eq!(mode.toggled().program_kind(), ProgramKind::Flat);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}
