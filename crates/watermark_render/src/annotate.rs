//! Per-frame annotation driver.

use std::sync::Arc;

use anyhow::{Context, Result};
use frame_io::{AnnotationRequest, FrameLayout, PlaneMut};
use overlay_config::OverlayCfg;

use crate::clip;
use crate::color::palette_color;
use crate::error::RenderError;
use crate::factory::RendererCache;
use crate::renderer::Renderer;
use crate::text::GlyphRaster;

/// Drives one frame's annotation pass: clips geometry, picks palette
/// colors, composes label text and issues draw calls against the
/// format-matched renderer.
pub struct FrameAnnotator {
    cache: RendererCache,
    cfg: OverlayCfg,
}

impl FrameAnnotator {
    pub fn new(cfg: OverlayCfg, glyphs: Arc<dyn GlyphRaster>) -> Self {
        Self {
            cache: RendererCache::new(glyphs),
            cfg,
        }
    }

    /// Draws every request onto the mapped frame, in arrival order;
    /// later requests overdraw earlier ones where they overlap.
    ///
    /// The first failure aborts this frame's pass and is returned with
    /// context naming the failing request. The buffer keeps whatever was
    /// drawn up to that point; later frames are unaffected.
    pub fn annotate(
        &mut self,
        layout: &FrameLayout,
        planes: &mut [PlaneMut<'_>],
        requests: &[AnnotationRequest],
    ) -> Result<()> {
        let renderer = self
            .cache
            .get(layout.format, layout.matrix)
            .context("overlay renderer initialization failed")?;
        validate_planes(layout, planes)?;
        for (i, req) in requests.iter().enumerate() {
            self.draw_request(&renderer, layout, planes, req)
                .with_context(|| format!("drawing request {i} (object {})", req.object_id))?;
        }
        Ok(())
    }

    fn draw_request(
        &self,
        renderer: &Renderer,
        layout: &FrameLayout,
        planes: &mut [PlaneMut<'_>],
        req: &AnnotationRequest,
    ) -> Result<()> {
        let rect = clip::resolve_rect(req.norm_rect, req.pixel_rect, layout.width, layout.height);

        // Landmarks first, then the box, then text, so the label stays
        // legible where they overlap.
        if !req.landmarks.is_empty() {
            let radius = ((0.012 * rect.w).round() as i32).max(1);
            for (i, &(lx, ly)) in req.landmarks.iter().enumerate() {
                let cx = (rect.x + rect.w * lx).round() as i32;
                let cy = (rect.y + rect.h * ly).round() as i32;
                renderer.draw_circle(planes, palette_color(i), (cx, cy), radius);
            }
        }

        let color_index = if req.object_id > 0 {
            req.object_id as usize
        } else {
            req.label_id
        };
        let color = palette_color(color_index);

        let min = (rect.x.round() as i32, rect.y.round() as i32);
        let max = (
            (rect.x + rect.w).round() as i32,
            (rect.y + rect.h).round() as i32,
        );
        renderer.draw_rect(planes, color, min, max, self.cfg.box_thickness as i32);

        let text = compose_label(req);
        if !text.is_empty() {
            let mut ty = rect.y - 5.0;
            if ty < 0.0 {
                ty = rect.y + 30.0;
            }
            renderer.draw_text(
                planes,
                color,
                (rect.x.round() as i32, ty.round() as i32),
                &text,
                self.cfg.font_px,
            );
        }
        Ok(())
    }
}

/// Label text: `<id>:` prefix for tracked objects, then the base label,
/// then any auxiliary tensor labels; space-joined, empty parts omitted.
fn compose_label(req: &AnnotationRequest) -> String {
    let mut parts: Vec<String> = Vec::new();
    if req.object_id > 0 {
        parts.push(format!("{}:", req.object_id));
    }
    if !req.label.is_empty() {
        parts.push(req.label.clone());
    }
    for aux in &req.aux_labels {
        if !aux.is_empty() {
            parts.push(aux.clone());
        }
    }
    parts.join(" ")
}

fn validate_planes(layout: &FrameLayout, planes: &[PlaneMut<'_>]) -> Result<(), RenderError> {
    let expected = layout.format.plane_count();
    if planes.len() != expected {
        return Err(RenderError::UnsupportedGeometry {
            format: layout.format,
            reason: format!("expected {expected} planes, got {}", planes.len()),
        });
    }
    Ok(())
}
