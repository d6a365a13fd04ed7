//! Background removal for drafted images

use crate::color::Rgb;
use crate::color::quantize::color_distance_sq;
use crate::raster::PixelBuffer;

/// Make every pixel near a reference background color fully transparent
///
/// Pixels whose RGB lies within Euclidean distance `threshold` of
/// `bg_color` get their alpha zeroed; color channels are left as-is. Pure
/// function; the input buffer is not modified.
pub fn remove_background(buffer: &PixelBuffer, bg_color: Rgb, threshold: f64) -> PixelBuffer {
    let threshold_sq = threshold * threshold;

    buffer.map_pixels(|_, _, pixel| {
        let rgb = [pixel[0], pixel[1], pixel[2]];
        if (color_distance_sq(rgb, bg_color) as f64) <= threshold_sq {
            [pixel[0], pixel[1], pixel[2], 0]
        } else {
            pixel
        }
    })
}
