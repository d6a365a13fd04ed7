//! Porter-Duff "over" alpha compositing
//!
//! Blending happens in normalized floats with straight-alpha inputs and
//! outputs; premultiplied terms exist only transiently inside the operator.

use crate::io::error::{Result, shape_mismatch};
use crate::raster::buffer::{PixelBuffer, Rgba};

/// Blend a single foreground pixel over a background pixel
fn blend_over(bg: Rgba, fg: Rgba) -> Rgba {
    let bg_a = f64::from(bg[3]) / 255.0;
    let fg_a = f64::from(fg[3]) / 255.0;
    let out_a = fg_a + bg_a * (1.0 - fg_a);

    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |i: usize| {
        let bg_c = f64::from(bg.get(i).copied().unwrap_or(0)) / 255.0;
        let fg_c = f64::from(fg.get(i).copied().unwrap_or(0)) / 255.0;
        let out = (fg_c * fg_a + bg_c * bg_a * (1.0 - fg_a)) / out_a;
        (out * 255.0).round().clamp(0.0, 255.0) as u8
    };

    [
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Composite `fg` over `bg`, producing a new buffer
///
/// # Errors
///
/// Returns `ShapeMismatch` unless both buffers share the same dimensions
pub fn composite_over(bg: &PixelBuffer, fg: &PixelBuffer) -> Result<PixelBuffer> {
    if bg.extent() != fg.extent() {
        return Err(shape_mismatch(bg.extent(), fg.extent()));
    }

    let mut data = Vec::with_capacity(bg.as_bytes().len());
    for (bg_px, fg_px) in bg.pixels().zip(fg.pixels()) {
        data.extend_from_slice(&blend_over(bg_px, fg_px));
    }
    PixelBuffer::from_raw(bg.width(), bg.height(), data)
}

/// Composite `fg` over `bg` at offset (x, y), producing a new buffer
///
/// The foreground may be any size and the offset may be negative; only the
/// overlapping region is blended. With no overlap the result is an
/// unmodified copy of the background.
pub fn composite_at(bg: &PixelBuffer, fg: &PixelBuffer, x: i32, y: i32) -> PixelBuffer {
    let mut result = bg.clone();

    let src_x = (-x).max(0);
    let src_y = (-y).max(0);
    let dst_x = x.max(0);
    let dst_y = y.max(0);

    let copy_w = (fg.width() as i32 - src_x).min(bg.width() as i32 - dst_x);
    let copy_h = (fg.height() as i32 - src_y).min(bg.height() as i32 - dst_y);

    if copy_w <= 0 || copy_h <= 0 {
        return result;
    }

    for row in 0..copy_h {
        for col in 0..copy_w {
            let Some(fg_px) = fg.pixel(src_x + col, src_y + row) else {
                continue;
            };
            let Some(bg_px) = result.pixel(dst_x + col, dst_y + row) else {
                continue;
            };
            result.set_pixel(dst_x + col, dst_y + row, blend_over(bg_px, fg_px));
        }
    }

    result
}
