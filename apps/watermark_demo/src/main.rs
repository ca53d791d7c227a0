//! Synthetic-frame overlay playground.
//!
//! Builds an I420 and a BGRA test frame, annotates both with a few fake
//! detections, and saves PNG previews under output/demo/. Pass a TTF
//! path as the first argument to get real label text; without one the
//! labels are skipped.
//!
//! Usage: watermark_demo [font.ttf] [overlay.toml]

use std::sync::Arc;

use anyhow::Result;
use frame_io::{AnnotationRequest, ColorMatrix, FrameLayout, PixelFormat, PlaneMut, RectF};
use overlay_config::OverlayCfg;
use watermark_render::{FontRaster, FrameAnnotator, GlyphRaster};

const W: usize = 640;
const H: usize = 480;

/// Backend that draws nothing, for runs without a font file.
struct NoGlyphs;

impl GlyphRaster for NoGlyphs {
    fn run(&self, _text: &str, _px: f32, _origin: (i32, i32), _set: &mut dyn FnMut(i32, i32)) {}
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let glyphs: Arc<dyn GlyphRaster> = match args.next() {
        Some(path) => Arc::new(FontRaster::from_file(&path)?),
        None => {
            println!("no font given, labels will be skipped");
            Arc::new(NoGlyphs)
        }
    };
    let cfg = match args.next() {
        Some(path) => OverlayCfg::from_file(&path)?,
        None => OverlayCfg::default(),
    };

    std::fs::create_dir_all("output/demo")?;

    let requests = fake_requests();

    // I420 pass
    let mut y_buf = gradient_plane(W, H);
    let mut u_buf = vec![128u8; W * H / 4];
    let mut v_buf = vec![128u8; W * H / 4];
    {
        let mut ann = FrameAnnotator::new(cfg.clone(), Arc::clone(&glyphs));
        let layout = FrameLayout {
            width: W as u32,
            height: H as u32,
            format: PixelFormat::I420,
            matrix: ColorMatrix::Bt709,
        };
        let mut planes = [
            PlaneMut {
                data: &mut y_buf,
                width: W,
                height: H,
                stride: W,
                channels: 1,
            },
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
        telemetry::time_call("annotate_i420", || {
            ann.annotate(&layout, &mut planes, &requests)
        })?;
    }
    save_i420_png(&y_buf, &u_buf, &v_buf, "output/demo/annotated_i420.png")?;
    println!("saved output/demo/annotated_i420.png");

    // BGRA pass
    let mut bgra = vec![0u8; W * H * 4];
    for px in bgra.chunks_exact_mut(4) {
        px.copy_from_slice(&[40, 40, 40, 255]);
    }
    {
        let mut ann = FrameAnnotator::new(cfg, glyphs);
        let layout = FrameLayout {
            width: W as u32,
            height: H as u32,
            format: PixelFormat::Bgra,
            matrix: ColorMatrix::Bt709,
        };
        let mut planes = [PlaneMut {
            data: &mut bgra,
            width: W,
            height: H,
            stride: W * 4,
            channels: 4,
        }];
        telemetry::time_call("annotate_bgra", || {
            ann.annotate(&layout, &mut planes, &requests)
        })?;
    }
    save_bgra_png(&bgra, "output/demo/annotated_bgra.png")?;
    println!("saved output/demo/annotated_bgra.png");

    Ok(())
}

fn fake_requests() -> Vec<AnnotationRequest> {
    vec![
        AnnotationRequest {
            norm_rect: RectF::new(0.1, 0.15, 0.3, 0.4),
            object_id: 1,
            label: "person".to_string(),
            aux_labels: vec!["age: 30".to_string()],
            landmarks: vec![(0.3, 0.3), (0.7, 0.3), (0.5, 0.55), (0.35, 0.8), (0.65, 0.8)],
            ..Default::default()
        },
        AnnotationRequest {
            norm_rect: RectF::new(0.55, 0.5, 0.35, 0.3),
            label_id: 2,
            label: "car".to_string(),
            ..Default::default()
        },
        // absolute-only producer: normalized extent left zeroed
        AnnotationRequest {
            pixel_rect: RectF::new(20.0, 380.0, 120.0, 80.0),
            object_id: 4,
            label: "bag".to_string(),
            ..Default::default()
        },
    ]
}

fn gradient_plane(w: usize, h: usize) -> Vec<u8> {
    let mut buf = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            buf[y * w + x] = (((x + y) * 255) / (w + h)) as u8;
        }
    }
    buf
}

fn save_i420_png(y: &[u8], u: &[u8], v: &[u8], path: &str) -> Result<()> {
    let mut img = image::RgbImage::new(W as u32, H as u32);
    for py in 0..H {
        for px in 0..W {
            let yy = y[py * W + px] as f32;
            let cu = u[(py / 2) * (W / 2) + px / 2] as f32 - 128.0;
            let cv = v[(py / 2) * (W / 2) + px / 2] as f32 - 128.0;
            // BT.709 full-range inverse, matching the overlay conversion
            let (kr, kb) = (0.2126f32, 0.0722f32);
            let kg = 1.0 - kr - kb;
            let r = yy + 2.0 * (1.0 - kr) * cv;
            let b = yy + 2.0 * (1.0 - kb) * cu;
            let g = (yy - kr * r - kb * b) / kg;
            img.put_pixel(
                px as u32,
                py as u32,
                image::Rgb([clamp(r), clamp(g), clamp(b)]),
            );
        }
    }
    img.save(path)?;
    Ok(())
}

fn save_bgra_png(buf: &[u8], path: &str) -> Result<()> {
    let mut img = image::RgbaImage::new(W as u32, H as u32);
    for py in 0..H {
        for px in 0..W {
            let idx = (py * W + px) * 4;
            img.put_pixel(
                px as u32,
                py as u32,
                image::Rgba([buf[idx + 2], buf[idx + 1], buf[idx], buf[idx + 3]]),
            );
        }
    }
    img.save(path)?;
    Ok(())
}

fn clamp(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
