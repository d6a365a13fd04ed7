//! Icon variant generation: material × quality × seed production
//!
//! Each variant loads a template, remaps its regions from the detected
//! source material ramp onto the requested one, dithers with a seed-jittered
//! spread, outlines the silhouette, and applies the quality-tier glow. The
//! whole chain is driven by one `SeededRng`, so a (template, material,
//! quality, seed) tuple always reproduces the same bytes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::color::quantize::color_distance_sq;
use crate::color::tables::{MATERIAL_RAMPS, material_ramp, quality_glow};
use crate::color::{Rgb, hex_to_rgb, nearest_color};
use crate::io::configuration::{
    ICON_DITHER_SIZE, ICON_OUTLINE_COLOR, ICON_OUTLINE_WIDTH, ICON_SPREAD_RANGE,
};
use crate::io::error::{PipelineError, Result};
use crate::io::image::{load_rgba, save_rgba};
use crate::raster::{PixelBuffer, Rgba};
use crate::synthesis::{SeededRng, apply_ordered_dither};
use crate::ingest::template::{TemplateMetadata, template_paths};

/// Name of the material whose ramp center is nearest to a color
///
/// Scans the material table in declaration order; the first minimum wins, so
/// detection is deterministic even for equidistant ramps.
pub fn detect_source_material(dominant_color: Rgb) -> &'static str {
    let mut best = "iron";
    let mut best_distance = i64::MAX;
    for &(name, ref ramp) in MATERIAL_RAMPS.iter() {
        let center = ramp.get(ramp.len() / 2).copied().unwrap_or([0, 0, 0]);
        let distance = color_distance_sq(dominant_color, center);
        if distance < best_distance {
            best_distance = distance;
            best = name;
        }
    }
    best
}

/// Remap a region's pixels from one material ramp onto another
///
/// Each pixel finds its nearest shade in the source ramp and takes the same
/// shade from the target ramp, drifted by up to half a step from a seeded
/// uniform draw. Exactly one draw is consumed per remapped pixel.
fn swap_region_material(
    buffer: &mut PixelBuffer,
    pixels: &[[u32; 2]],
    source_ramp: &[Rgb],
    target_ramp: &[Rgb],
    rng: &mut SeededRng,
) {
    if target_ramp.is_empty() {
        return;
    }
    for coord in pixels {
        let (x, y) = (coord[0] as i32, coord[1] as i32);
        let Some(pixel) = buffer.pixel(x, y) else {
            continue;
        };
        if pixel[3] == 0 {
            continue;
        }
        let rgb = [pixel[0], pixel[1], pixel[2]];
        let Ok(shade) = nearest_color(rgb, source_ramp) else {
            continue;
        };
        let drift = rng.uniform().mul_add(2.0, -1.0) * 0.5;
        let index = (shade as f64 + drift)
            .floor()
            .clamp(0.0, target_ramp.len() as f64 - 1.0) as usize;
        let target = target_ramp.get(index).copied().unwrap_or(rgb);
        buffer.set_pixel(x, y, [target[0], target[1], target[2], pixel[3]]);
    }
}

/// Coordinates of opaque pixels that touch transparency 4-connectedly
fn silhouette_edges(buffer: &PixelBuffer) -> Vec<(i32, i32)> {
    let mut edges = Vec::new();
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if buffer.alpha(x, y) == 0 {
                continue;
            }
            let touches_transparent = [(0, -1), (0, 1), (-1, 0), (1, 0)]
                .iter()
                .any(|&(dx, dy)| buffer.contains(x + dx, y + dy) && buffer.alpha(x + dx, y + dy) == 0);
            if touches_transparent {
                edges.push((x, y));
            }
        }
    }
    edges
}

/// Add a dark outline around the opaque silhouette
///
/// Transparent pixels within `width` (Chebyshev distance) of any opaque
/// pixel become the outline color. Pure function.
pub fn add_outline(buffer: &PixelBuffer, color: Rgba, width: i32) -> PixelBuffer {
    let mut outline: HashSet<(i32, i32)> = HashSet::new();
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if buffer.alpha(x, y) == 0 {
                continue;
            }
            for dy in -width..=width {
                for dx in -width..=width {
                    let (nx, ny) = (x + dx, y + dy);
                    if buffer.contains(nx, ny) && buffer.alpha(nx, ny) == 0 {
                        outline.insert((nx, ny));
                    }
                }
            }
        }
    }

    let mut result = buffer.clone();
    for (x, y) in outline {
        result.set_pixel(x, y, color);
    }
    result
}

/// Apply the quality-tier glow around the icon silhouette
///
/// Glow alpha peaks at the tier intensity beside the silhouette and falls
/// off linearly with distance; opaque pixels are never painted over, and
/// overlapping glows keep the maximum alpha. Common icons (radius zero)
/// return unchanged. Pure function.
pub fn apply_quality_glow(buffer: &PixelBuffer, quality: &str) -> PixelBuffer {
    let params = quality_glow(quality);
    let Some(color_hex) = params.color else {
        return buffer.clone();
    };
    if params.radius == 0 || params.intensity <= 0.0 {
        return buffer.clone();
    }
    let Ok(glow_rgb) = hex_to_rgb(color_hex) else {
        return buffer.clone();
    };

    let mut result = buffer.clone();
    let reach = params.radius + 1;
    for (ex, ey) in silhouette_edges(buffer) {
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (nx, ny) = (ex + dx, ey + dy);
                if !result.contains(nx, ny) || buffer.alpha(nx, ny) > 0 {
                    continue;
                }
                let distance = f64::from(dx * dx + dy * dy).sqrt();
                if distance > f64::from(reach) {
                    continue;
                }
                let falloff = params.intensity * (1.0 - distance / f64::from(reach));
                let glow_alpha = (falloff.clamp(0.0, 1.0) * 255.0) as u8;
                if glow_alpha > result.alpha(nx, ny) {
                    result.set_pixel(nx, ny, [glow_rgb[0], glow_rgb[1], glow_rgb[2], glow_alpha]);
                }
            }
        }
    }
    result
}

/// Generate one icon variant and write it to the output directory
///
/// Output filename: `{type}-{template}-{material}-{quality}-{seed:03}.png`.
///
/// # Errors
///
/// Returns an error if the template image or metadata cannot be loaded, or
/// the variant cannot be written
pub fn generate_icon(
    template_dir: &Path,
    template_name: &str,
    material: &str,
    quality: &str,
    seed: u64,
    output_dir: &Path,
) -> Result<PathBuf> {
    let (image_path, meta_path) = template_paths(template_dir, template_name);
    if !image_path.exists() {
        return Err(PipelineError::ResourceMissing { path: image_path });
    }
    let mut icon = load_rgba(&image_path)?;
    let metadata = TemplateMetadata::load(&meta_path)?;

    let mut rng = SeededRng::new(seed);
    let target_ramp = material_ramp(material);

    for region in &metadata.regions {
        let source_name = detect_source_material(region.dominant_color);
        let source_ramp = material_ramp(source_name);
        swap_region_material(&mut icon, &region.pixels, source_ramp, target_ramp, &mut rng);
    }

    let spread = rng.int_range(ICON_SPREAD_RANGE.0, ICON_SPREAD_RANGE.1) as i32;
    let icon = apply_ordered_dither(&icon, ICON_DITHER_SIZE, spread)?;

    let icon = add_outline(&icon, ICON_OUTLINE_COLOR, ICON_OUTLINE_WIDTH);
    let icon = apply_quality_glow(&icon, quality);

    let filename = format!(
        "{}-{template_name}-{material}-{quality}-{seed:03}.png",
        metadata.asset_type
    );
    let output_path = output_dir.join(filename);
    save_rgba(&icon, &output_path)?;

    Ok(output_path)
}

/// One failed variant inside a batch, with its identifying tuple
#[derive(Debug)]
pub struct BatchFailure {
    /// Material of the failed variant
    pub material: String,
    /// Quality tier of the failed variant
    pub quality: String,
    /// Seed of the failed variant
    pub seed: u64,
    /// What went wrong
    pub error: PipelineError,
}

impl std::fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/seed {}: {}",
            self.material, self.quality, self.seed, self.error
        )
    }
}

/// Result of a batch run: generated paths plus any per-variant failures
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully generated icon paths, in expansion order
    pub generated: Vec<PathBuf>,
    /// Variants that failed, with identifying context
    pub failures: Vec<BatchFailure>,
}

/// Generate the full materials × qualities × seeds batch
///
/// A failing tuple is recorded with its identifying context and does not
/// abort sibling variants. The optional callback fires after every attempt
/// (success or failure) for progress reporting.
pub fn generate_icon_batch(
    template_dir: &Path,
    template_name: &str,
    materials: &[String],
    qualities: &[String],
    seeds: &[u64],
    output_dir: &Path,
    mut on_variant: Option<&mut dyn FnMut()>,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for material in materials {
        for quality in qualities {
            for &seed in seeds {
                match generate_icon(
                    template_dir,
                    template_name,
                    material,
                    quality,
                    seed,
                    output_dir,
                ) {
                    Ok(path) => outcome.generated.push(path),
                    Err(error) => outcome.failures.push(BatchFailure {
                        material: material.clone(),
                        quality: quality.clone(),
                        seed,
                        error,
                    }),
                }
                if let Some(callback) = on_variant.as_deref_mut() {
                    callback();
                }
            }
        }
    }

    outcome
}
