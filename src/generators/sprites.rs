//! Character sprite composition from layered equipment overlays

use std::collections::HashMap;
use std::path::Path;

use crate::color::quantize::{build_palette, quantize};
use crate::color::tables::material_ramp;
use crate::generators::icons::detect_source_material;
use crate::color::nearest_color;
use crate::io::configuration::{
    SHADOW_BOTTOM_OFFSET, SHADOW_COLOR, SHADOW_RADIUS_X, SHADOW_RADIUS_Y, SPRITE_HEIGHT,
    SPRITE_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{load_rgba, resize_nearest};
use crate::raster::compositor::composite_over;
use crate::raster::primitives::{draw_ellipse, fill_ellipse};
use crate::raster::PixelBuffer;
use crate::synthesis::SeededRng;

/// Equipment layer compositing order, bottom to top
pub const LAYER_ORDER: &[&str] = &[
    "body", "pants", "boots", "chest", "belt", "shoulders", "gloves", "helm", "weapon", "back",
];

/// Sprite composition settings
#[derive(Debug, Clone, Copy)]
pub struct SpriteOptions {
    /// Maximum palette entries for the final quantization (0 disables)
    pub max_colors: usize,
    /// Whether to draw the floor shadow ellipse
    pub add_shadow: bool,
}

impl Default for SpriteOptions {
    fn default() -> Self {
        Self {
            max_colors: 128,
            add_shadow: true,
        }
    }
}

/// Compose a character sprite from layered equipment overlays
///
/// Layers are composited in [`LAYER_ORDER`]; entries absent from `layers`
/// and layer files missing on disk are skipped without failing, matching the
/// multi-layer composition policy. Mismatched layer images are resized with
/// nearest-neighbor sampling. An optional floor-shadow ellipse goes beneath
/// the character, and the result is quantized to a capped palette.
///
/// # Errors
///
/// Returns an error when a present layer file cannot be decoded or an
/// internal compositing step fails
pub fn compose_sprite(
    layer_dir: &Path,
    layers: &HashMap<String, String>,
    options: SpriteOptions,
) -> Result<PixelBuffer> {
    let mut canvas = PixelBuffer::new(SPRITE_WIDTH, SPRITE_HEIGHT)?;

    for &layer_name in LAYER_ORDER {
        let Some(filename) = layers.get(layer_name) else {
            continue;
        };
        let layer_path = layer_dir.join(filename);
        if !layer_path.exists() {
            // Missing overlay files degrade gracefully
            continue;
        }

        let mut layer = load_rgba(&layer_path)?;
        if layer.extent() != (SPRITE_WIDTH, SPRITE_HEIGHT) {
            layer = resize_nearest(&layer, SPRITE_WIDTH, SPRITE_HEIGHT)?;
        }
        canvas = composite_over(&canvas, &layer)?;
    }

    if options.add_shadow && canvas.opaque_count() > 0 {
        let mut shadow = PixelBuffer::new(SPRITE_WIDTH, SPRITE_HEIGHT)?;
        let cx = SPRITE_WIDTH as i32 / 2;
        let cy = SPRITE_HEIGHT as i32 - SHADOW_BOTTOM_OFFSET;
        draw_ellipse(&mut shadow, cx, cy, SHADOW_RADIUS_X, SHADOW_RADIUS_Y, SHADOW_COLOR);
        fill_ellipse(&mut shadow, cx, cy, SHADOW_RADIUS_X, SHADOW_RADIUS_Y, SHADOW_COLOR);
        // Shadow goes behind the character
        canvas = composite_over(&shadow, &canvas)?;
    }

    if options.max_colors > 0 && canvas.opaque_count() > 0 {
        let palette = build_palette(&canvas, options.max_colors);
        canvas = quantize(&canvas, &palette)?;
    }

    Ok(canvas)
}

/// Compose a sprite and remap equipped overlay colors by material
///
/// After the plain composition, each opaque pixel is remapped from its
/// detected material ramp onto the requested one with a seeded half-step
/// drift, the same shading swap the icon generator performs per region.
///
/// # Errors
///
/// Returns an error when composition fails
pub fn compose_sprite_with_material(
    layer_dir: &Path,
    layers: &HashMap<String, String>,
    material: &str,
    seed: u64,
    options: SpriteOptions,
) -> Result<PixelBuffer> {
    let composed = compose_sprite(layer_dir, layers, options)?;
    let target_ramp = material_ramp(material);
    if target_ramp.is_empty() {
        return Ok(composed);
    }

    let mut rng = SeededRng::new(seed);
    let remapped = composed.map_pixels(|_, _, pixel| {
        if pixel[3] == 0 {
            return pixel;
        }
        let rgb = [pixel[0], pixel[1], pixel[2]];
        let source_ramp = material_ramp(detect_source_material(rgb));
        let Ok(shade) = nearest_color(rgb, source_ramp) else {
            return pixel;
        };
        let drift = rng.uniform().mul_add(2.0, -1.0) * 0.5;
        let index = (shade as f64 + drift)
            .floor()
            .clamp(0.0, target_ramp.len() as f64 - 1.0) as usize;
        let target = target_ramp.get(index).copied().unwrap_or(rgb);
        [target[0], target[1], target[2], pixel[3]]
    });

    Ok(remapped)
}
