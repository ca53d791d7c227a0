//! Rectangle resolution and clipping to frame bounds.

use frame_io::RectF;

/// Picks the pixel-space rectangle for a request and clips it.
///
/// When the normalized rectangle has nonzero extent in both axes it is
/// scaled by the frame dimensions; otherwise the raw rectangle is used
/// unscaled. The fallback covers metadata producers that only fill
/// absolute coordinates and leave the normalized fields zeroed.
pub fn resolve_rect(norm: RectF, raw: RectF, frame_w: u32, frame_h: u32) -> RectF {
    let rect = if norm.w != 0.0 && norm.h != 0.0 {
        RectF {
            x: norm.x * frame_w as f32,
            y: norm.y * frame_h as f32,
            w: norm.w * frame_w as f32,
            h: norm.h * frame_h as f32,
        }
    } else {
        raw
    };
    clip_rect(rect, frame_w, frame_h)
}

/// Clamps a pixel-space rectangle into the frame. Never fails; a
/// rectangle fully outside the frame collapses to zero area.
pub fn clip_rect(rect: RectF, frame_w: u32, frame_h: u32) -> RectF {
    let fw = frame_w as f32;
    let fh = frame_h as f32;
    let x = rect.x.clamp(0.0, fw);
    let y = rect.y.clamp(0.0, fh);
    let w = rect.w.min(fw - x).max(0.0);
    let h = rect.h.min(fh - y).max(0.0);
    RectF { x, y, w, h }
}
