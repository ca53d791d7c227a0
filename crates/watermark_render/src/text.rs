//! Glyph run rasterization seam. Font parsing and shaping stay behind
//! the `GlyphRaster` trait; the renderer only decides plane and color.

use anyhow::{Context, Result};
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Coverage below this is background. Binary thresholding keeps
/// repeated draws byte-identical on every plane type.
const COVERAGE_MIN: f32 = 0.5;

/// Drawing-backend capability: report which pixels a laid-out text run
/// covers, relative to `origin`.
pub trait GlyphRaster: Send + Sync {
    fn run(&self, text: &str, px: f32, origin: (i32, i32), set: &mut dyn FnMut(i32, i32));
}

/// `rusttype`-backed glyph source.
pub struct FontRaster {
    font: Font<'static>,
}

impl FontRaster {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes).context("font data not parseable as TTF")?;
        Ok(Self { font })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading font file {}", path.display()))?;
        Self::from_bytes(bytes)
    }
}

impl GlyphRaster for FontRaster {
    fn run(&self, text: &str, px: f32, origin: (i32, i32), set: &mut dyn FnMut(i32, i32)) {
        let scale = Scale::uniform(px);
        let v_metrics = self.font.v_metrics(scale);
        let offset = point(0.0, v_metrics.ascent);
        for glyph in self.font.layout(text, scale, offset) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    if coverage >= COVERAGE_MIN {
                        set(origin.0 + bb.min.x + gx as i32, origin.1 + bb.min.y + gy as i32);
                    }
                });
            }
        }
    }
}
