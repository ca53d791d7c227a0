//! RGB-space annotation colors and their native per-plane conversions.

/// 8-bit RGB color value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed high-contrast palette; object colors are assigned by
/// `index % 18` so the same identity keeps the same color across frames.
pub const PALETTE: [Rgb8; 18] = [
    Rgb8::new(255, 0, 0),
    Rgb8::new(0, 255, 0),
    Rgb8::new(0, 0, 255),
    Rgb8::new(255, 255, 0),
    Rgb8::new(0, 255, 255),
    Rgb8::new(255, 0, 255),
    Rgb8::new(255, 170, 0),
    Rgb8::new(255, 0, 170),
    Rgb8::new(0, 255, 170),
    Rgb8::new(170, 255, 0),
    Rgb8::new(170, 0, 255),
    Rgb8::new(0, 170, 255),
    Rgb8::new(255, 85, 0),
    Rgb8::new(85, 255, 0),
    Rgb8::new(0, 255, 85),
    Rgb8::new(0, 85, 255),
    Rgb8::new(85, 0, 255),
    Rgb8::new(255, 0, 85),
];

pub fn palette_color(index: usize) -> Rgb8 {
    PALETTE[index % PALETTE.len()]
}

/// Native color for luma/chroma planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YuvColor {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

/// Converts an RGB color to full-range YUV with the given matrix
/// coefficients.
///
/// `Y = Kr*R + (1-Kr-Kb)*G + Kb*B`, `U = (B-Y)/(2(1-Kb)) + 128`,
/// `V = (R-Y)/(2(1-Kr)) + 128`, rounded and clamped to 0..=255.
/// Limited-range (16..235) level offsets are not applied.
pub fn rgb_to_yuv(c: Rgb8, kr: f32, kb: f32) -> YuvColor {
    let (r, g, b) = (c.r as f32, c.g as f32, c.b as f32);
    let kg = 1.0 - kr - kb;
    let y = kr * r + kg * g + kb * b;
    let u = (b - y) / (2.0 * (1.0 - kb)) + 128.0;
    let v = (r - y) / (2.0 * (1.0 - kr)) + 128.0;
    YuvColor {
        y: quantize(y),
        u: quantize(u),
        v: quantize(v),
    }
}

fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Byte pattern for one pixel of a packed plane.
#[derive(Clone, Copy, Debug)]
pub struct PackedPixel {
    bytes: [u8; 4],
    len: usize,
}

impl PackedPixel {
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Permutes channel order for a packed target; the fourth channel, when
/// present, is padded with opaque 255.
pub fn packed_pixel(c: Rgb8, bgr_order: bool, channels: usize) -> PackedPixel {
    debug_assert!(channels == 3 || channels == 4);
    let mut bytes = [0u8; 4];
    if bgr_order {
        bytes[0] = c.b;
        bytes[1] = c.g;
        bytes[2] = c.r;
    } else {
        bytes[0] = c.r;
        bytes[1] = c.g;
        bytes[2] = c.b;
    }
    if channels == 4 {
        bytes[3] = 255;
    }
    PackedPixel {
        bytes,
        len: channels,
    }
}
