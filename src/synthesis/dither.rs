//! Ordered dithering via recursively constructed Bayer matrices

use ndarray::Array2;

use crate::io::error::{Result, invalid_argument};
use crate::raster::PixelBuffer;

/// Build a normalized Bayer threshold matrix of size 2, 4, or 8
///
/// The 2×2 base `[[0, 2], [3, 1]]` is normalized by dividing by 4 and
/// subtracting 0.5. Larger sizes denormalize the half-size matrix back to
/// integer ranks, place four scaled-and-offset copies (offsets 0/2/3/1 for
/// the TL/TR/BL/BR quadrants), and renormalize by size². Every entry is
/// distinct and lies in [-0.5, 0.5).
///
/// # Errors
///
/// Returns `InvalidArgument` for sizes other than 2, 4, or 8
pub fn bayer_matrix(size: usize) -> Result<Array2<f64>> {
    if !matches!(size, 2 | 4 | 8) {
        return Err(invalid_argument("size", &size, &"must be 2, 4, or 8"));
    }
    Ok(build_matrix(size))
}

fn build_matrix(size: usize) -> Array2<f64> {
    if size == 2 {
        let mut base = Array2::zeros((2, 2));
        for (coords, rank) in [((0, 0), 0.0), ((0, 1), 2.0), ((1, 0), 3.0), ((1, 1), 1.0)] {
            if let Some(cell) = base.get_mut(coords) {
                *cell = rank / 4.0 - 0.5;
            }
        }
        return base;
    }

    let half = size / 2;
    let smaller = build_matrix(half);
    let half_cells = (half * half) as f64;
    let cells = (size * size) as f64;

    Array2::from_shape_fn((size, size), |(y, x)| {
        let rank = smaller
            .get([y % half, x % half])
            .map_or(0.0, |v| (v + 0.5) * half_cells);
        // Quadrant offsets follow the classic recursive construction
        let offset = match (y >= half, x >= half) {
            (false, false) => 0.0,
            (false, true) => 2.0,
            (true, false) => 3.0,
            (true, true) => 1.0,
        };
        rank.mul_add(4.0, offset) / cells - 0.5
    })
}

/// Apply ordered dithering to every non-transparent pixel
///
/// Each RGB channel is offset by `round(threshold · spread)` where the
/// threshold comes from tiling the Bayer matrix across the image. The alpha
/// channel and fully transparent pixels pass through byte-identical. Pure
/// function; the input buffer is not modified.
///
/// # Errors
///
/// Returns `InvalidArgument` for unsupported matrix sizes
pub fn apply_ordered_dither(
    buffer: &PixelBuffer,
    matrix_size: usize,
    spread: i32,
) -> Result<PixelBuffer> {
    let matrix = bayer_matrix(matrix_size)?;

    Ok(buffer.map_pixels(|x, y, pixel| {
        if pixel[3] == 0 {
            return pixel;
        }
        let threshold = matrix
            .get([y as usize % matrix_size, x as usize % matrix_size])
            .copied()
            .unwrap_or(0.0);
        let delta = (threshold * f64::from(spread)).round() as i32;
        [
            offset_channel(pixel[0], delta),
            offset_channel(pixel[1], delta),
            offset_channel(pixel[2], delta),
            pixel[3],
        ]
    }))
}

fn offset_channel(value: u8, delta: i32) -> u8 {
    (i32::from(value) + delta).clamp(0, 255) as u8
}
