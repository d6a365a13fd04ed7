//! Zone-themed atmospheric backgrounds from layered noise

use crate::color::hex_to_rgb;
use crate::color::tables::zone_palette;
use crate::io::configuration::{
    BACKGROUND_ACCENT_MAX, BACKGROUND_ACCENT_THRESHOLD, BACKGROUND_DETAIL_SCALE,
    BACKGROUND_DETAIL_SEED_OFFSET, BACKGROUND_DITHER_SIZE, BACKGROUND_DITHER_SPREAD,
    BACKGROUND_LARGE_OCTAVES, BACKGROUND_LARGE_SCALE, BACKGROUND_VIGNETTE_STRENGTH,
};
use crate::io::error::Result;
use crate::math::mix_channel;
use crate::raster::PixelBuffer;
use crate::synthesis::noise::{NoiseField, generate_field, generate_tileable_field};
use crate::synthesis::apply_ordered_dither;

/// Generate a zone-themed background
///
/// Large-scale structural noise blends the zone's primary color toward its
/// secondary; fine detail noise above the accent threshold blends in up to
/// 30% accent; a radial vignette darkens toward the corners; the result is
/// 8×8 Bayer dithered. In tileable mode both noise layers sample the
/// toroidal generator and the vignette is skipped, so the output tiles
/// seamlessly.
///
/// # Errors
///
/// Returns `InvalidArgument` when either dimension is zero
pub fn generate_background(
    zone: &str,
    width: u32,
    height: u32,
    seed: u64,
    tileable: bool,
) -> Result<PixelBuffer> {
    let palette = zone_palette(zone);
    let primary = hex_to_rgb(palette.primary)?;
    let secondary = hex_to_rgb(palette.secondary)?;
    let accent = hex_to_rgb(palette.accent)?;

    let noise_seed = seed as u32;
    let detail_seed = noise_seed.wrapping_add(BACKGROUND_DETAIL_SEED_OFFSET);

    let (noise_large, noise_detail): (NoiseField, NoiseField) = if tileable {
        (
            generate_tileable_field(width, height, BACKGROUND_LARGE_SCALE, noise_seed)?,
            generate_tileable_field(width, height, BACKGROUND_DETAIL_SCALE, detail_seed)?,
        )
    } else {
        (
            generate_field(
                width,
                height,
                BACKGROUND_LARGE_SCALE,
                noise_seed,
                BACKGROUND_LARGE_OCTAVES,
            )?,
            generate_field(width, height, BACKGROUND_DETAIL_SCALE, detail_seed, 1)?,
        )
    };

    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let max_dist = cx.hypot(cy);

    let canvas = PixelBuffer::new(width, height)?.map_pixels(|x, y, _| {
        let t_large = noise_large.get(x, y);
        let mut r = mix_channel(primary[0], secondary[0], t_large);
        let mut g = mix_channel(primary[1], secondary[1], t_large);
        let mut b = mix_channel(primary[2], secondary[2], t_large);

        let t_detail = noise_detail.get(x, y);
        if t_detail > BACKGROUND_ACCENT_THRESHOLD {
            let strength = (t_detail - BACKGROUND_ACCENT_THRESHOLD)
                / (1.0 - BACKGROUND_ACCENT_THRESHOLD)
                * BACKGROUND_ACCENT_MAX;
            r = mix_channel(r, accent[0], strength);
            g = mix_channel(g, accent[1], strength);
            b = mix_channel(b, accent[2], strength);
        }

        let vignette = if tileable {
            1.0
        } else {
            let dist = (f64::from(x) - cx).hypot(f64::from(y) - cy);
            (1.0 - dist / max_dist * BACKGROUND_VIGNETTE_STRENGTH).max(0.0)
        };

        [
            (f64::from(r) * vignette) as u8,
            (f64::from(g) * vignette) as u8,
            (f64::from(b) * vignette) as u8,
            255,
        ]
    });

    apply_ordered_dither(&canvas, BACKGROUND_DITHER_SIZE, BACKGROUND_DITHER_SPREAD)
}
