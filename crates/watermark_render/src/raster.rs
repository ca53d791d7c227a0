//! Plane-level primitive rasterizers. Every write is bounds-checked so
//! primitives extending past a plane edge degrade to partial shapes
//! instead of out-of-bounds writes.

use frame_io::PlaneMut;

/// Writes one pixel's byte pattern if (x, y) lies inside the plane.
/// `px` length must equal the plane's channel count.
pub(crate) fn put_px(plane: &mut PlaneMut<'_>, x: i32, y: i32, px: &[u8]) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= plane.width || y >= plane.height {
        return;
    }
    let idx = y * plane.stride + x * plane.channels;
    if idx + px.len() <= plane.data.len() {
        plane.data[idx..idx + px.len()].copy_from_slice(px);
    }
}

fn fill_span(plane: &mut PlaneMut<'_>, x0: i32, y0: i32, x1: i32, y1: i32, px: &[u8]) {
    for y in y0..y1 {
        for x in x0..x1 {
            put_px(plane, x, y, px);
        }
    }
}

/// Rectangle outline with the given bar thickness; `max` is exclusive.
/// Degenerate rectangles draw nothing.
pub(crate) fn rect_outline(
    plane: &mut PlaneMut<'_>,
    min: (i32, i32),
    max: (i32, i32),
    thickness: i32,
    px: &[u8],
) {
    let (x0, y0) = min;
    let (x1, y1) = max;
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let t = thickness.max(1);
    fill_span(plane, x0, y0, x1, (y0 + t).min(y1), px);
    fill_span(plane, x0, (y1 - t).max(y0), x1, y1, px);
    fill_span(plane, x0, y0, (x0 + t).min(x1), y1, px);
    fill_span(plane, (x1 - t).max(x0), y0, x1, y1, px);
}

/// Filled circle; radius <= 0 draws nothing.
pub(crate) fn fill_circle(plane: &mut PlaneMut<'_>, cx: i32, cy: i32, radius: i32, px: &[u8]) {
    if radius <= 0 {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_px(plane, cx + dx, cy + dy, px);
            }
        }
    }
}
