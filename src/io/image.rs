//! PNG loading and saving for pixel buffers

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::io::error::{PipelineError, Result};
use crate::raster::PixelBuffer;

/// Load an image file into an RGBA pixel buffer
///
/// Any format the `image` crate recognizes is accepted and converted to
/// straight-alpha RGBA.
///
/// # Errors
///
/// Returns `ImageLoad` when the file cannot be read or decoded
pub fn load_rgba(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| PipelineError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    let (width, height) = img.dimensions();
    PixelBuffer::from_raw(width, height, img.into_raw())
}

/// Save a pixel buffer as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` when the parent directory cannot be created,
/// `ImageExport` when encoding or writing fails, or `InvalidArgument` when
/// the buffer bytes are malformed
pub fn save_rgba(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let img = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .ok_or_else(|| PipelineError::Metadata {
            path: path.to_path_buf(),
            reason: "buffer byte length does not match its dimensions".to_string(),
        })?;

    img.save(path).map_err(|e| PipelineError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resize a buffer with nearest-neighbor sampling
///
/// Pixel art must keep hard edges, so this is the only resampling mode the
/// pipeline offers.
///
/// # Errors
///
/// Returns `InvalidArgument` when either target dimension is zero
pub fn resize_nearest(buffer: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer> {
    let img = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .ok_or_else(|| crate::io::error::invalid_argument(
            "buffer",
            &buffer.as_bytes().len(),
            &"buffer byte length does not match its dimensions",
        ))?;
    let resized = imageops::resize(&img, width, height, FilterType::Nearest);
    PixelBuffer::from_raw(width, height, resized.into_raw())
}
