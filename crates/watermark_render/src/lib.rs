//! In-place annotation overlay for raw video frames.
//!
//! Draws bounding boxes, landmark points and text labels directly onto
//! mapped frame buffers in packed RGB-family and 4:2:0 planar /
//! semi-planar layouts, converting only the annotation color to the
//! native representation of each plane instead of converting the frame.

pub mod annotate;
pub mod clip;
pub mod color;
pub mod error;
pub mod factory;
pub mod renderer;
pub mod text;

mod raster;

pub use annotate::FrameAnnotator;
pub use color::{palette_color, rgb_to_yuv, Rgb8, YuvColor, PALETTE};
pub use error::RenderError;
pub use factory::RendererCache;
pub use renderer::{Family, Renderer};
pub use text::{FontRaster, GlyphRaster};
