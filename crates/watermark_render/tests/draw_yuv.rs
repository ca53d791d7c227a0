//! 4:2:0 drawing: luma at full resolution, chroma halved, values equal
//! the color converter's output for the frame's matrix.

mod common;

use std::sync::Arc;

use common::{gray_plane, BlockGlyphs};
use frame_io::{AnnotationRequest, ColorMatrix, FrameLayout, PixelFormat, PlaneMut, RectF};
use overlay_config::OverlayCfg;
use watermark_render::{rgb_to_yuv, FrameAnnotator, Rgb8};

const W: usize = 64;
const H: usize = 64;

fn annotator() -> FrameAnnotator {
    FrameAnnotator::new(OverlayCfg::default(), Arc::new(BlockGlyphs))
}

fn nv12_layout() -> FrameLayout {
    FrameLayout {
        width: W as u32,
        height: H as u32,
        format: PixelFormat::Nv12,
        matrix: ColorMatrix::Bt709,
    }
}

#[test]
fn nv12_raw_rect_fallback_draws_both_planes() {
    let mut y_buf = vec![0u8; W * H];
    let mut uv_buf = vec![0u8; W * H / 2];
    let mut ann = annotator();
    // Normalized extent is zero, so the raw pixel rect must be used
    // unscaled.
    let req = AnnotationRequest {
        pixel_rect: RectF::new(10.0, 10.0, 50.0, 50.0),
        // label_id 0 -> palette red
        ..Default::default()
    };
    {
        let uv = PlaneMut {
            data: &mut uv_buf,
            width: W / 2,
            height: H / 2,
            stride: W,
            channels: 2,
        };
        let mut planes = [gray_plane(&mut y_buf, W, H), uv];
        ann.annotate(&nv12_layout(), &mut planes, &[req]).unwrap();
    }

    let expect = rgb_to_yuv(Rgb8::new(255, 0, 0), 0.2126, 0.0722);
    // top bar of the outline, full resolution
    assert_eq!(y_buf[10 * W + 10], expect.y);
    assert_eq!(y_buf[11 * W + 59], expect.y);
    // interior untouched
    assert_eq!(y_buf[32 * W + 32], 0);
    // chroma pair at halved coordinates
    let idx = 5 * W + 5 * 2;
    assert_eq!(uv_buf[idx], expect.u);
    assert_eq!(uv_buf[idx + 1], expect.v);
}

#[test]
fn i420_landmarks_cycle_palette_by_point_index() {
    let mut y_buf = vec![0u8; W * H];
    let mut u_buf = vec![0u8; W * H / 4];
    let mut v_buf = vec![0u8; W * H / 4];
    let mut ann = annotator();
    let req = AnnotationRequest {
        pixel_rect: RectF::new(0.0, 0.0, 40.0, 40.0),
        landmarks: vec![(0.5, 0.5), (0.25, 0.25)],
        ..Default::default()
    };
    {
        let mut planes = [
            gray_plane(&mut y_buf, W, H),
            PlaneMut {
                data: &mut u_buf,
                width: W / 2,
                height: H / 2,
                stride: W / 2,
                channels: 1,
            },
            PlaneMut {
                data: &mut v_buf,
                width: W / 2,
                height: H / 2,
                stride: W / 2,
                channels: 1,
            },
        ];
        ann.annotate(
            &FrameLayout {
                width: W as u32,
                height: H as u32,
                format: PixelFormat::I420,
                matrix: ColorMatrix::Bt709,
            },
            &mut planes,
            &[req],
        )
        .unwrap();
    }

    // point 0 at (20, 20): palette[0] red, radius clamps to 1
    let red = rgb_to_yuv(Rgb8::new(255, 0, 0), 0.2126, 0.0722);
    assert_eq!(y_buf[20 * W + 20], red.y);
    assert_eq!(u_buf[10 * (W / 2) + 10], red.u);
    assert_eq!(v_buf[10 * (W / 2) + 10], red.v);

    // point 1 at (10, 10): palette[1] green, independent of the
    // object's own color
    let green = rgb_to_yuv(Rgb8::new(0, 255, 0), 0.2126, 0.0722);
    assert_eq!(y_buf[10 * W + 10], green.y);
    assert_eq!(u_buf[5 * (W / 2) + 5], green.u);
    assert_eq!(v_buf[5 * (W / 2) + 5], green.v);
}

#[test]
fn nv12_text_marks_luma_and_chroma() {
    let mut y_buf = vec![0u8; W * H];
    let mut uv_buf = vec![0u8; W * H / 2];
    let mut ann = annotator();
    let req = AnnotationRequest {
        pixel_rect: RectF::new(16.0, 30.0, 20.0, 20.0),
        object_id: 2,
        ..Default::default()
    };
    {
        let uv = PlaneMut {
            data: &mut uv_buf,
            width: W / 2,
            height: H / 2,
            stride: W,
            channels: 2,
        };
        let mut planes = [gray_plane(&mut y_buf, W, H), uv];
        ann.annotate(&nv12_layout(), &mut planes, &[req]).unwrap();
    }
    // label "2:" renders above the box at (16, 25); the block stub
    // guarantees coverage at the origin on both plane resolutions.
    let blue = rgb_to_yuv(Rgb8::new(0, 0, 255), 0.2126, 0.0722);
    assert_eq!(y_buf[25 * W + 16], blue.y);
    let idx = 12 * W + 8 * 2;
    assert_eq!(uv_buf[idx], blue.u);
    assert_eq!(uv_buf[idx + 1], blue.v);
}

#[test]
fn wrong_plane_count_is_rejected() {
    let mut y_buf = vec![0u8; W * H];
    let mut ann = annotator();
    let mut planes = [gray_plane(&mut y_buf, W, H)];
    let err = ann
        .annotate(&nv12_layout(), &mut planes, &[])
        .unwrap_err();
    let kind = err
        .downcast_ref::<watermark_render::RenderError>()
        .expect("typed error kind");
    assert!(matches!(
        kind,
        watermark_render::RenderError::UnsupportedGeometry { .. }
    ));
}
