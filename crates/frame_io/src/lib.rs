//! Shared frame/annotation data types passed between the host layer and
//! the overlay renderer. Plain data only; no behavior beyond small
//! accessors.

/// Pixel layout of a mapped frame as declared by the host.
///
/// The renderer supports the packed RGB-family tags plus `Nv12` and
/// `I420`. The remaining tags exist so a host can hand us whatever its
/// caps negotiation produced; they are rejected with a typed error at
/// renderer construction rather than silently misdrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Bgr,
    Rgba,
    Bgra,
    Rgbx,
    Bgrx,
    Nv12,
    I420,
    Yuv422,
    P010,
}

impl PixelFormat {
    /// Number of planes a correctly mapped frame of this format carries.
    pub fn plane_count(self) -> usize {
        match self {
            PixelFormat::Rgb
            | PixelFormat::Bgr
            | PixelFormat::Rgba
            | PixelFormat::Bgra
            | PixelFormat::Rgbx
            | PixelFormat::Bgrx
            | PixelFormat::Yuv422 => 1,
            PixelFormat::Nv12 | PixelFormat::P010 => 2,
            PixelFormat::I420 => 3,
        }
    }

}

/// Color matrix standard declared by the host for YUV frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMatrix {
    Unknown,
    Bt601,
    Bt709,
    Bt2020,
}

impl ColorMatrix {
    /// Luma weighting coefficients (Kr, Kb) for this standard.
    ///
    /// `None` for `Unknown`: the caller must treat that as a
    /// configuration error, never substitute a default.
    pub fn kr_kb(self) -> Option<(f32, f32)> {
        match self {
            ColorMatrix::Unknown => None,
            ColorMatrix::Bt601 => Some((0.299, 0.114)),
            ColorMatrix::Bt709 => Some((0.2126, 0.0722)),
            ColorMatrix::Bt2020 => Some((0.2627, 0.0593)),
        }
    }
}

/// Frame geometry and color metadata, parsed by the host from its own
/// video-info structures.
#[derive(Clone, Copy, Debug)]
pub struct FrameLayout {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub matrix: ColorMatrix,
}

/// Mutable, non-owning view over one plane of a mapped frame buffer.
///
/// Borrowed for the duration of a single annotate call; `width`/`height`
/// are in this plane's pixels (half the frame size for 4:2:0 chroma),
/// `stride` is the row pitch in bytes, `channels` the bytes per pixel.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    pub data: &'a mut [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub channels: usize,
}

/// Rectangle in either normalized [0,1] or absolute pixel units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// One object's drawing request for the current frame, extracted by the
/// host from its region-of-interest metadata.
///
/// Rectangles carry a dual encoding: `norm_rect` is preferred and scaled
/// by the frame dimensions, but when its extent is zero in either axis
/// the request is assumed to have been produced by a source that only
/// fills absolute coordinates, and `pixel_rect` is used unscaled. This
/// fallback is a compatibility shim for such metadata producers, kept
/// deliberately.
#[derive(Clone, Debug, Default)]
pub struct AnnotationRequest {
    pub norm_rect: RectF,
    pub pixel_rect: RectF,
    /// Tracking id; participates in color selection and the label prefix
    /// only when positive.
    pub object_id: i32,
    /// Category id, the color fallback for untracked objects.
    pub label_id: usize,
    pub label: String,
    /// Labels of attached non-detection tensors, appended to the text.
    pub aux_labels: Vec<String>,
    /// Landmark points normalized to the object rectangle; empty when
    /// the object has none.
    pub landmarks: Vec<(f32, f32)>,
}
