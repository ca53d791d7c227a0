//! Format-specialized draw engines. One renderer family per supported
//! plane layout; the family is selected once per colorimetry change by
//! the cache, never per draw call.

use std::sync::Arc;

use frame_io::PlaneMut;

use crate::color::{packed_pixel, rgb_to_yuv, Rgb8};
use crate::raster;
use crate::text::GlyphRaster;

/// Smallest glyph size drawn on a half-resolution chroma plane; below
/// this the run disappears after subsampling.
const CHROMA_TEXT_MIN_PX: f32 = 4.0;

/// Renderer family tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Packed3 { bgr: bool },
    Packed4 { bgr: bool },
    SemiPlanar420,
    Planar420,
}

/// Immutable draw engine for one pixel-format family. Holds the matrix
/// coefficients for YUV targets and a shared glyph backend; safe to
/// share read-only across annotate calls.
pub struct Renderer {
    family: Family,
    /// (Kr, Kb); present for the 4:2:0 families only.
    coeffs: Option<(f32, f32)>,
    glyphs: Arc<dyn GlyphRaster>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("family", &self.family)
            .field("coeffs", &self.coeffs)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    pub(crate) fn new(
        family: Family,
        coeffs: Option<(f32, f32)>,
        glyphs: Arc<dyn GlyphRaster>,
    ) -> Self {
        Self {
            family,
            coeffs,
            glyphs,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    fn yuv(&self, color: Rgb8) -> crate::color::YuvColor {
        // coeffs are always present for the YUV families; the cache
        // refuses to build them otherwise.
        let (kr, kb) = self.coeffs.unwrap_or((0.2126, 0.0722));
        rgb_to_yuv(color, kr, kb)
    }

    /// Filled circle centered at `center` with `radius` in full-frame
    /// pixels. Out-of-range portions are dropped per pixel.
    pub fn draw_circle(
        &self,
        planes: &mut [PlaneMut<'_>],
        color: Rgb8,
        center: (i32, i32),
        radius: i32,
    ) {
        let (cx, cy) = center;
        match self.family {
            Family::Packed3 { bgr } => {
                let px = packed_pixel(color, bgr, 3);
                if let [p] = planes {
                    raster::fill_circle(p, cx, cy, radius, px.as_slice());
                }
            }
            Family::Packed4 { bgr } => {
                let px = packed_pixel(color, bgr, 4);
                if let [p] = planes {
                    raster::fill_circle(p, cx, cy, radius, px.as_slice());
                }
            }
            Family::SemiPlanar420 => {
                let c = self.yuv(color);
                if let [y, uv] = planes {
                    raster::fill_circle(y, cx, cy, radius, &[c.y]);
                    raster::fill_circle(uv, cx / 2, cy / 2, (radius / 2).max(1), &[c.u, c.v]);
                }
            }
            Family::Planar420 => {
                let c = self.yuv(color);
                if let [y, u, v] = planes {
                    raster::fill_circle(y, cx, cy, radius, &[c.y]);
                    let r = (radius / 2).max(1);
                    raster::fill_circle(u, cx / 2, cy / 2, r, &[c.u]);
                    raster::fill_circle(v, cx / 2, cy / 2, r, &[c.v]);
                }
            }
        }
    }

    /// Rectangle outline from `min` (inclusive) to `max` (exclusive),
    /// both in full-frame pixels.
    pub fn draw_rect(
        &self,
        planes: &mut [PlaneMut<'_>],
        color: Rgb8,
        min: (i32, i32),
        max: (i32, i32),
        thickness: i32,
    ) {
        match self.family {
            Family::Packed3 { bgr } => {
                let px = packed_pixel(color, bgr, 3);
                if let [p] = planes {
                    raster::rect_outline(p, min, max, thickness, px.as_slice());
                }
            }
            Family::Packed4 { bgr } => {
                let px = packed_pixel(color, bgr, 4);
                if let [p] = planes {
                    raster::rect_outline(p, min, max, thickness, px.as_slice());
                }
            }
            Family::SemiPlanar420 => {
                let c = self.yuv(color);
                let (cmin, cmax, ct) = halve_rect(min, max, thickness);
                if let [y, uv] = planes {
                    raster::rect_outline(y, min, max, thickness, &[c.y]);
                    raster::rect_outline(uv, cmin, cmax, ct, &[c.u, c.v]);
                }
            }
            Family::Planar420 => {
                let c = self.yuv(color);
                let (cmin, cmax, ct) = halve_rect(min, max, thickness);
                if let [y, u, v] = planes {
                    raster::rect_outline(y, min, max, thickness, &[c.y]);
                    raster::rect_outline(u, cmin, cmax, ct, &[c.u]);
                    raster::rect_outline(v, cmin, cmax, ct, &[c.v]);
                }
            }
        }
    }

    /// Text run with its top-left near `origin`, glyph coverage supplied
    /// by the backend. Empty text is a no-op.
    pub fn draw_text(
        &self,
        planes: &mut [PlaneMut<'_>],
        color: Rgb8,
        origin: (i32, i32),
        text: &str,
        px_size: f32,
    ) {
        if text.is_empty() {
            return;
        }
        let glyphs = Arc::clone(&self.glyphs);
        match self.family {
            Family::Packed3 { bgr } => {
                let px = packed_pixel(color, bgr, 3);
                if let [p] = planes {
                    glyphs.run(text, px_size, origin, &mut |x, y| {
                        raster::put_px(p, x, y, px.as_slice())
                    });
                }
            }
            Family::Packed4 { bgr } => {
                let px = packed_pixel(color, bgr, 4);
                if let [p] = planes {
                    glyphs.run(text, px_size, origin, &mut |x, y| {
                        raster::put_px(p, x, y, px.as_slice())
                    });
                }
            }
            Family::SemiPlanar420 => {
                let c = self.yuv(color);
                let half_px = (px_size / 2.0).max(CHROMA_TEXT_MIN_PX);
                if let [y, uv] = planes {
                    glyphs.run(text, px_size, origin, &mut |x, yy| {
                        raster::put_px(y, x, yy, &[c.y])
                    });
                    glyphs.run(text, half_px, (origin.0 / 2, origin.1 / 2), &mut |x, yy| {
                        raster::put_px(uv, x, yy, &[c.u, c.v])
                    });
                }
            }
            Family::Planar420 => {
                let c = self.yuv(color);
                let half_px = (px_size / 2.0).max(CHROMA_TEXT_MIN_PX);
                if let [y, u, v] = planes {
                    glyphs.run(text, px_size, origin, &mut |x, yy| {
                        raster::put_px(y, x, yy, &[c.y])
                    });
                    let horigin = (origin.0 / 2, origin.1 / 2);
                    glyphs.run(text, half_px, horigin, &mut |x, yy| {
                        raster::put_px(u, x, yy, &[c.u])
                    });
                    glyphs.run(text, half_px, horigin, &mut |x, yy| {
                        raster::put_px(v, x, yy, &[c.v])
                    });
                }
            }
        }
    }
}

/// Halves a full-resolution rectangle for a 4:2:0 chroma plane. The
/// outline keeps at least 1 px of thickness so it stays visible.
fn halve_rect(min: (i32, i32), max: (i32, i32), thickness: i32) -> ((i32, i32), (i32, i32), i32) {
    (
        (min.0 / 2, min.1 / 2),
        (max.0 / 2, max.1 / 2),
        (thickness / 2).max(1),
    )
}
