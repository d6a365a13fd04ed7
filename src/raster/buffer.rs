//! In-memory RGBA pixel buffer shared by every generator
//!
//! Pixels are stored row-major, four bytes per pixel, straight (unassociated)
//! alpha. Buffers are exclusively owned by whichever generator holds them;
//! pure operations copy rather than alias.

use crate::io::error::{Result, invalid_argument};

/// A single RGBA pixel with straight alpha
pub type Rgba = [u8; 4];

/// A fully transparent pixel
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Mutable RGBA raster with explicit width and height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_argument(
                "dimensions",
                &format!("{width}x{height}"),
                &"buffer dimensions must be positive",
            ));
        }
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&color);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing RGBA byte vector
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the byte length does not equal
    /// `width * height * 4` or either dimension is zero
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(invalid_argument(
                "data",
                &data.len(),
                &format!("expected {expected} bytes for a {width}x{height} RGBA buffer"),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Buffer extent as (width, height)
    pub const fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its raw RGBA bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Test whether a coordinate lies inside the buffer
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Byte offset of a coordinate, or `None` when out of bounds
    const fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(((y as u32 * self.width + x as u32) * 4) as usize)
        } else {
            None
        }
    }

    /// Read the pixel at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let start = self.offset(x, y)?;
        self.data
            .get(start..start + 4)
            .and_then(|bytes| bytes.try_into().ok())
    }

    /// Write the pixel at (x, y); out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(start) = self.offset(x, y) {
            if let Some(bytes) = self.data.get_mut(start..start + 4) {
                bytes.copy_from_slice(&color);
            }
        }
    }

    /// Alpha channel at (x, y), or 0 when out of bounds
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.pixel(x, y).map_or(0, |p| p[3])
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Rgba) {
        for bytes in self.data.chunks_exact_mut(4) {
            bytes.copy_from_slice(&color);
        }
    }

    /// Count pixels with non-zero alpha
    pub fn opaque_count(&self) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|p| p.get(3).copied().unwrap_or(0) > 0)
            .count()
    }

    /// Iterate over pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(4)
            .filter_map(|bytes| bytes.try_into().ok())
    }

    /// Copy of this buffer clipped to at most (width, height)
    ///
    /// Returns a plain clone when the buffer already fits.
    pub fn clipped(&self, width: u32, height: u32) -> Self {
        if self.width <= width && self.height <= height {
            return self.clone();
        }
        let new_w = self.width.min(width).max(1);
        let new_h = self.height.min(height).max(1);
        let mut data = Vec::with_capacity((new_w as usize) * (new_h as usize) * 4);
        for y in 0..new_h as i32 {
            for x in 0..new_w as i32 {
                data.extend_from_slice(&self.pixel(x, y).unwrap_or(TRANSPARENT));
            }
        }
        Self {
            width: new_w,
            height: new_h,
            data,
        }
    }

    /// Build a new buffer by transforming every pixel
    ///
    /// The closure receives the pixel coordinate and current value; the
    /// source buffer is left untouched.
    pub fn map_pixels<F>(&self, mut f: F) -> Self
    where
        F: FnMut(u32, u32, Rgba) -> Rgba,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for (i, bytes) in self.data.chunks_exact(4).enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            let pixel: Rgba = bytes.try_into().unwrap_or(TRANSPARENT);
            data.extend_from_slice(&f(x, y, pixel));
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
