//! Renderer selection and the single-slot colorimetry cache.

use std::sync::Arc;

use frame_io::{ColorMatrix, PixelFormat};

use crate::error::RenderError;
use crate::renderer::{Family, Renderer};
use crate::text::GlyphRaster;

/// Single-slot renderer cache keyed by the last-seen format and matrix.
///
/// Owned by the caller, one per annotator. Colorimetry changes are rare
/// in a running pipeline, so the slot is replaced rather than grown.
/// Not internally synchronized: concurrent callers must serialize
/// updates themselves (single-writer discipline).
pub struct RendererCache {
    glyphs: Arc<dyn GlyphRaster>,
    slot: Option<(PixelFormat, ColorMatrix, Arc<Renderer>)>,
}

impl RendererCache {
    pub fn new(glyphs: Arc<dyn GlyphRaster>) -> Self {
        Self { glyphs, slot: None }
    }

    /// Returns the renderer for this format/matrix pair, reusing the
    /// cached instance when the pair is unchanged (pointer-equal Arc).
    ///
    /// An `Unknown` matrix is refused up front: defaulting the
    /// coefficients would silently miscolor every chroma write.
    pub fn get(
        &mut self,
        format: PixelFormat,
        matrix: ColorMatrix,
    ) -> Result<Arc<Renderer>, RenderError> {
        let coeffs = matrix.kr_kb().ok_or(RenderError::UndefinedColorimetry)?;
        if let Some((f, m, r)) = &self.slot {
            if *f == format && *m == matrix {
                return Ok(Arc::clone(r));
            }
        }
        let family = match format {
            PixelFormat::Rgb => Family::Packed3 { bgr: false },
            PixelFormat::Bgr => Family::Packed3 { bgr: true },
            PixelFormat::Rgba | PixelFormat::Rgbx => Family::Packed4 { bgr: false },
            PixelFormat::Bgra | PixelFormat::Bgrx => Family::Packed4 { bgr: true },
            PixelFormat::Nv12 => Family::SemiPlanar420,
            PixelFormat::I420 => Family::Planar420,
            other => return Err(RenderError::UnsupportedFormat(other)),
        };
        let coeffs = match family {
            Family::SemiPlanar420 | Family::Planar420 => Some(coeffs),
            _ => None,
        };
        let renderer = Arc::new(Renderer::new(family, coeffs, Arc::clone(&self.glyphs)));
        self.slot = Some((format, matrix, Arc::clone(&renderer)));
        Ok(renderer)
    }
}
