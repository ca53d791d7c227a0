//! YUV conversion ground-truth properties: reconstruction of R,G,B from
//! the converted (Y,U,V) with the same coefficients must land within the
//! integer rounding tolerance.

use watermark_render::{palette_color, rgb_to_yuv, Rgb8, PALETTE};

const MATRICES: [(f32, f32); 3] = [(0.299, 0.114), (0.2126, 0.0722), (0.2627, 0.0593)];

fn reconstruct(y: u8, u: u8, v: u8, kr: f32, kb: f32) -> (f32, f32, f32) {
    let kg = 1.0 - kr - kb;
    let (y, u, v) = (y as f32, u as f32 - 128.0, v as f32 - 128.0);
    let r = y + 2.0 * (1.0 - kr) * v;
    let b = y + 2.0 * (1.0 - kb) * u;
    let g = (y - kr * r - kb * b) / kg;
    (r, g, b)
}

fn assert_roundtrip(c: Rgb8, kr: f32, kb: f32) {
    let yuv = rgb_to_yuv(c, kr, kb);
    let (r, g, b) = reconstruct(yuv.y, yuv.u, yuv.v, kr, kb);
    for (orig, back) in [(c.r, r), (c.g, g), (c.b, b)] {
        let err = (orig as f32 - back).abs();
        assert!(
            err <= 2.0,
            "channel error {err} for {c:?} kr={kr} kb={kb}: got ({r:.1},{g:.1},{b:.1})"
        );
    }
}

#[test]
fn palette_roundtrips_all_matrices() {
    for &(kr, kb) in &MATRICES {
        for &c in &PALETTE {
            assert_roundtrip(c, kr, kb);
        }
    }
}

#[test]
fn rgb_sweep_roundtrips() {
    // Step 17 hits both 0 and 255 exactly.
    for &(kr, kb) in &MATRICES {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    assert_roundtrip(Rgb8::new(r as u8, g as u8, b as u8), kr, kb);
                }
            }
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    let c = Rgb8::new(85, 170, 255);
    assert_eq!(rgb_to_yuv(c, 0.2126, 0.0722), rgb_to_yuv(c, 0.2126, 0.0722));
}

#[test]
fn palette_cycles_every_18() {
    for i in 0..18 {
        for k in 1..4 {
            assert_eq!(palette_color(i), palette_color(i + 18 * k));
        }
    }
    assert_eq!(palette_color(1), Rgb8::new(0, 255, 0));
}
