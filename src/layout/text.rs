//! Text painting seam and the embedded bitmap-font default
//!
//! Tooltip and layout rendering treat text as an opaque deterministic
//! service: measure a string, or rasterize it into an RGBA buffer sized to
//! its bounding box. The default painter draws the public-domain 8×8 glyph
//! set at an integer scale; richer font stacks can be swapped in behind the
//! same trait.

use font8x8::legacy::BASIC_LEGACY;

use crate::color::hex_to_rgb;
use crate::io::error::Result;
use crate::raster::PixelBuffer;

/// Height and width of one unscaled glyph cell
const GLYPH_SIZE: u32 = 8;

/// Deterministic text measurement and rendering service
pub trait TextPainter {
    /// Measure a string's bounding box in pixels for a font and size
    fn measure(&self, text: &str, font: &str, size: u32) -> (u32, u32);

    /// Render a string into a tightly sized RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns an error when the color string is invalid or rendering fails
    fn render(&self, text: &str, font: &str, size: u32, color: &str) -> Result<PixelBuffer>;
}

/// Built-in painter over the embedded 8×8 bitmap font
///
/// Font names (heading, body, mono, ...) are accepted and currently all map
/// to the single embedded face; the requested pixel size picks an integer
/// glyph scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapTextPainter;

impl BitmapTextPainter {
    /// Integer glyph scale for a requested pixel size
    const fn scale(size: u32) -> u32 {
        let scale = size / GLYPH_SIZE;
        if scale == 0 { 1 } else { scale }
    }

    fn glyph(ch: char) -> [u8; 8] {
        let index = ch as usize;
        BASIC_LEGACY
            .get(index)
            .or_else(|| BASIC_LEGACY.get(b'?' as usize))
            .copied()
            .unwrap_or([0; 8])
    }
}

impl TextPainter for BitmapTextPainter {
    fn measure(&self, text: &str, _font: &str, size: u32) -> (u32, u32) {
        let scale = Self::scale(size);
        let chars = text.chars().count().max(1) as u32;
        (chars * GLYPH_SIZE * scale, GLYPH_SIZE * scale)
    }

    fn render(&self, text: &str, font: &str, size: u32, color: &str) -> Result<PixelBuffer> {
        let rgb = hex_to_rgb(color)?;
        let scale = Self::scale(size);
        let (width, height) = self.measure(text, font, size);
        let mut canvas = PixelBuffer::new(width, height)?;

        for (slot, ch) in text.chars().enumerate() {
            let glyph = Self::glyph(ch);
            let origin_x = slot as u32 * GLYPH_SIZE * scale;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits >> col & 1 == 0 {
                        continue;
                    }
                    // Scale each font pixel into a solid block
                    for sy in 0..scale {
                        for sx in 0..scale {
                            canvas.set_pixel(
                                (origin_x + col * scale + sx) as i32,
                                (row as u32 * scale + sy) as i32,
                                [rgb[0], rgb[1], rgb[2], 255],
                            );
                        }
                    }
                }
            }
        }

        Ok(canvas)
    }
}
