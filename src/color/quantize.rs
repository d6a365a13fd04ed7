//! Palette construction, nearest-color search, and image quantization

use std::collections::BTreeSet;

use crate::color::Rgb;
use crate::io::error::{Result, invalid_argument};
use crate::raster::PixelBuffer;

/// Squared Euclidean distance between two RGB colors
pub fn color_distance_sq(a: Rgb, b: Rgb) -> i64 {
    a.iter()
        .zip(b.iter())
        .map(|(&c1, &c2)| {
            let d = i64::from(c1) - i64::from(c2);
            d * d
        })
        .sum()
}

/// Index of the palette color nearest to `color`
///
/// Squared Euclidean distance in RGB space; ties break toward the earliest
/// palette index, so palette order is part of the contract.
///
/// # Errors
///
/// Returns `InvalidArgument` when the palette is empty
pub fn nearest_color(color: Rgb, palette: &[Rgb]) -> Result<usize> {
    if palette.is_empty() {
        return Err(invalid_argument("palette", &"[]", &"must not be empty"));
    }

    let mut nearest = 0;
    let mut min_distance = i64::MAX;
    for (i, &candidate) in palette.iter().enumerate() {
        let distance = color_distance_sq(color, candidate);
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }
    Ok(nearest)
}

/// Snap every non-transparent pixel to its nearest palette color
///
/// Fully transparent pixels pass through byte-identical, stale RGB included.
/// Pure function; the input buffer is not modified.
///
/// # Errors
///
/// Returns `InvalidArgument` when the palette is empty
pub fn quantize(buffer: &PixelBuffer, palette: &[Rgb]) -> Result<PixelBuffer> {
    if palette.is_empty() {
        return Err(invalid_argument("palette", &"[]", &"must not be empty"));
    }

    Ok(buffer.map_pixels(|_, _, pixel| {
        if pixel[3] == 0 {
            return pixel;
        }
        let rgb = [pixel[0], pixel[1], pixel[2]];
        // Palette verified non-empty above
        let index = nearest_color(rgb, palette).unwrap_or(0);
        let snapped = palette.get(index).copied().unwrap_or(rgb);
        [snapped[0], snapped[1], snapped[2], pixel[3]]
    }))
}

/// Build a deterministic palette from a buffer's opaque pixels
///
/// Unique colors are collected in sorted order, then step-subsampled down to
/// `max_colors` entries when there are too many. An image with no opaque
/// pixels yields a single black entry so downstream quantization always has
/// a palette to work with.
pub fn build_palette(buffer: &PixelBuffer, max_colors: usize) -> Vec<Rgb> {
    let unique: BTreeSet<Rgb> = buffer
        .pixels()
        .filter(|p| p[3] > 0)
        .map(|p| [p[0], p[1], p[2]])
        .collect();

    if unique.is_empty() {
        return vec![[0, 0, 0]];
    }

    let colors: Vec<Rgb> = unique.into_iter().collect();
    if max_colors == 0 || colors.len() <= max_colors {
        return colors;
    }

    let step = (colors.len() / max_colors).max(1);
    colors.into_iter().step_by(step).take(max_colors).collect()
}
