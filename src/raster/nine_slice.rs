//! Nine-slice scaling: fixed corners, tiled edges and center

use crate::io::error::{Result, invalid_argument};
use crate::raster::buffer::{PixelBuffer, TRANSPARENT};

/// Scale a source image to an arbitrary target size, nine-slice style
///
/// The source is split into four corners (copied verbatim), four edges
/// (tiled along their axis), and a center (tiled both ways). `border` is the
/// corner size in pixels.
///
/// # Errors
///
/// Returns `InvalidArgument` when `border` is zero, when the source cannot
/// hold two borders per axis, or when the target is smaller than its corners
pub fn render_nine_slice(
    source: &PixelBuffer,
    target_width: u32,
    target_height: u32,
    border: u32,
) -> Result<PixelBuffer> {
    if border == 0 {
        return Err(invalid_argument("border", &border, &"must be positive"));
    }
    if source.width() < border * 2 || source.height() < border * 2 {
        return Err(invalid_argument(
            "border",
            &border,
            &format!(
                "source {}x{} cannot hold two {border}px borders",
                source.width(),
                source.height()
            ),
        ));
    }
    if target_width < border * 2 || target_height < border * 2 {
        return Err(invalid_argument(
            "target",
            &format!("{target_width}x{target_height}"),
            &format!("target cannot hold two {border}px borders"),
        ));
    }

    let mut result = PixelBuffer::new(target_width, target_height)?;
    let b = border as i32;
    let sw = source.width() as i32;
    let sh = source.height() as i32;
    let tw = target_width as i32;
    let th = target_height as i32;

    // Interior extents of source and target
    let src_inner_w = sw - 2 * b;
    let src_inner_h = sh - 2 * b;

    for ty in 0..th {
        for tx in 0..tw {
            // Map the target coordinate back onto the source: corners map
            // directly, edge and center spans wrap via modulo
            let sx = if tx < b {
                tx
            } else if tx >= tw - b {
                sw - (tw - tx)
            } else if src_inner_w > 0 {
                b + (tx - b) % src_inner_w
            } else {
                b
            };
            let sy = if ty < b {
                ty
            } else if ty >= th - b {
                sh - (th - ty)
            } else if src_inner_h > 0 {
                b + (ty - b) % src_inner_h
            } else {
                b
            };

            let pixel = source.pixel(sx, sy).unwrap_or(TRANSPARENT);
            result.set_pixel(tx, ty, pixel);
        }
    }

    Ok(result)
}
