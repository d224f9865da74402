//! Procedural test textures.
//!
//! Both patterns are pure functions of the selector: same bytes every run,
//! no external state. Pixels are premultiplied RGBA8, row 0 at the top.

use crate::paint::Color;

/// Edge length of every generated image, in texels.
pub const TEX_SIZE: u32 = 64;

const BYTES_PER_PIXEL: usize = 4;

/// Cells per side of the coarse grid.
const COARSE_CELLS: u32 = 4;

/// Which generated image to build.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pattern {
    /// 4x4 grid of 16x16 solid cells; some cells are translucent.
    Coarse,
    /// One-texel black/white checkerboard with a color-coded border
    /// (left red, right green, top yellow, bottom blue).
    Fine,
}

impl Pattern {
    pub const ALL: [Pattern; 2] = [Pattern::Coarse, Pattern::Fine];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Coarse => "grafika coarse texture",
            Pattern::Fine => "grafika fine texture",
        }
    }
}

// Straight-alpha RGBA, row-major from the top-left cell.
const COARSE_GRID: [[u8; 4]; 16] = [
    OPAQUE_RED,     OPAQUE_YELLOW,  OPAQUE_GREEN,   OPAQUE_MAGENTA,
    OPAQUE_WHITE,   [255, 0, 0, 64], [0, 255, 0, 64], OPAQUE_YELLOW,
    OPAQUE_MAGENTA, [0, 255, 0, 0], [255, 0, 0, 128], OPAQUE_BLACK,
    OPAQUE_CYAN,    OPAQUE_MAGENTA, OPAQUE_CYAN,    OPAQUE_BLUE,
];

const OPAQUE_RED: [u8; 4] = [255, 0, 0, 255];
const OPAQUE_GREEN: [u8; 4] = [0, 255, 0, 255];
const OPAQUE_BLUE: [u8; 4] = [0, 0, 255, 255];
const OPAQUE_YELLOW: [u8; 4] = [255, 255, 0, 255];
const OPAQUE_MAGENTA: [u8; 4] = [255, 0, 255, 255];
const OPAQUE_CYAN: [u8; 4] = [0, 255, 255, 255];
const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];
const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

/// CPU-side RGBA8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8, tightly packed, row 0 at the top.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Builds the image for `pattern`.
    pub fn generate(pattern: Pattern) -> Self {
        let (width, height) = (TEX_SIZE, TEX_SIZE);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

        for y in 0..height {
            for x in 0..width {
                let straight = match pattern {
                    Pattern::Coarse => coarse_texel(x, y),
                    Pattern::Fine => fine_texel(x, y, width, height),
                };
                let [r, g, b, a] = straight;
                pixels.extend_from_slice(&Color::from_straight_u8(r, g, b, a).to_premul_u8());
            }
        }

        Self { width, height, pixels }
    }

    /// Bytes per row as uploaded to the GPU.
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }

    /// Premultiplied RGBA of the texel at `(x, y)`, row 0 at the top.
    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

fn coarse_texel(x: u32, y: u32) -> [u8; 4] {
    let cell = TEX_SIZE / COARSE_CELLS;
    let (col, row) = (x / cell, y / cell);
    COARSE_GRID[(row * COARSE_CELLS + col) as usize]
}

fn fine_texel(x: u32, y: u32, width: u32, height: u32) -> [u8; 4] {
    // Top and bottom rows win at the corners.
    if y == 0 {
        OPAQUE_YELLOW
    } else if y == height - 1 {
        OPAQUE_BLUE
    } else if x == 0 {
        OPAQUE_RED
    } else if x == width - 1 {
        OPAQUE_GREEN
    } else if (x + y) % 2 == 0 {
        OPAQUE_WHITE
    } else {
        OPAQUE_BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_are_fixed_size_rgba() {
        for pattern in Pattern::ALL {
            let img = Image::generate(pattern);
            assert_eq!((img.width, img.height), (TEX_SIZE, TEX_SIZE));
            assert_eq!(img.pixels.len(), (TEX_SIZE * TEX_SIZE * 4) as usize);
            assert_eq!(img.bytes_per_row(), TEX_SIZE * 4);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(Image::generate(Pattern::Coarse), Image::generate(Pattern::Coarse));
        assert_ne!(Image::generate(Pattern::Coarse), Image::generate(Pattern::Fine));
    }

    #[test]
    fn coarse_cells_are_solid_blocks() {
        let img = Image::generate(Pattern::Coarse);
        assert_eq!(img.texel(0, 0), OPAQUE_RED);
        assert_eq!(img.texel(15, 15), OPAQUE_RED);
        assert_eq!(img.texel(16, 0), OPAQUE_YELLOW);
        assert_eq!(img.texel(63, 63), OPAQUE_BLUE);
    }

    #[test]
    fn coarse_translucent_cells_are_premultiplied() {
        let img = Image::generate(Pattern::Coarse);
        // Row 1, column 1: red at alpha 64.
        assert_eq!(img.texel(20, 20), [64, 0, 0, 64]);
        // Row 2, column 1: fully transparent green collapses to zero.
        assert_eq!(img.texel(20, 36), [0, 0, 0, 0]);
        // Row 2, column 2: red at alpha 128.
        assert_eq!(img.texel(36, 36), [128, 0, 0, 128]);
    }

    #[test]
    fn fine_interior_alternates_every_texel() {
        let img = Image::generate(Pattern::Fine);
        assert_eq!(img.texel(2, 2), OPAQUE_WHITE);
        assert_eq!(img.texel(3, 2), OPAQUE_BLACK);
        assert_eq!(img.texel(2, 3), OPAQUE_BLACK);
    }

    #[test]
    fn fine_border_marks_each_side() {
        let img = Image::generate(Pattern::Fine);
        assert_eq!(img.texel(0, 10), OPAQUE_RED);
        assert_eq!(img.texel(63, 10), OPAQUE_GREEN);
        assert_eq!(img.texel(10, 0), OPAQUE_YELLOW);
        assert_eq!(img.texel(10, 63), OPAQUE_BLUE);
        assert_eq!(img.texel(0, 0), OPAQUE_YELLOW);
    }
}
