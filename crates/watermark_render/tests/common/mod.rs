//! Shared fixtures for renderer integration tests.

use frame_io::PlaneMut;
use watermark_render::GlyphRaster;

/// Deterministic glyph stub: each character becomes a solid block, so
/// text coverage is predictable without shipping a font file.
pub struct BlockGlyphs;

impl GlyphRaster for BlockGlyphs {
    fn run(&self, text: &str, px: f32, origin: (i32, i32), set: &mut dyn FnMut(i32, i32)) {
        let cell_h = px.round() as i32;
        let cell_w = (cell_h / 2).max(1);
        for (i, _) in text.chars().enumerate() {
            let x0 = origin.0 + i as i32 * (cell_w + 1);
            for dy in 0..cell_h {
                for dx in 0..cell_w {
                    set(x0 + dx, origin.1 + dy);
                }
            }
        }
    }
}

pub fn packed_plane(buf: &mut [u8], w: usize, h: usize, channels: usize) -> PlaneMut<'_> {
    PlaneMut {
        data: buf,
        width: w,
        height: h,
        stride: w * channels,
        channels,
    }
}

pub fn gray_plane(buf: &mut [u8], w: usize, h: usize) -> PlaneMut<'_> {
    packed_plane(buf, w, h, 1)
}
