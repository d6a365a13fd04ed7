//! Raster building blocks: buffers, drawing, compositing, nine-slice

/// RGBA pixel buffer and pixel type
pub mod buffer;
/// Porter-Duff "over" compositing
pub mod compositor;
/// Nine-slice scaling
pub mod nine_slice;
/// Drawing primitives
pub mod primitives;

pub use buffer::{PixelBuffer, Rgba, TRANSPARENT};
