use frame_io::PixelFormat;

/// Typed overlay failure kinds; callers match on the kind instead of
/// inspecting message strings.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported pixel format {0:?}")]
    UnsupportedFormat(PixelFormat),
    /// The frame declared no color matrix. Guessing one would silently
    /// miscolor the chroma planes, so this is an initialization failure.
    #[error("color matrix unknown, cannot derive Kr/Kb")]
    UndefinedColorimetry,
    #[error("plane set does not match {format:?}: {reason}")]
    UnsupportedGeometry {
        format: PixelFormat,
        reason: String,
    },
}
