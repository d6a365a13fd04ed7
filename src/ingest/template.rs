//! Full ingest pipeline: draft image to cleaned template plus metadata

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::build_palette;
use crate::color::quantize::quantize;
use crate::ingest::background::remove_background;
use crate::ingest::regions::{Region, extract_regions};
use crate::io::configuration::{
    DEFAULT_BG_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_REGIONS, DRAFT_BG_COLOR,
    INGEST_DITHER_SIZE, INGEST_DITHER_SPREAD, KMEANS_MAX_ITERATIONS,
};
use crate::io::error::{PipelineError, Result};
use crate::io::image::{load_rgba, save_rgba};
use crate::synthesis::apply_ordered_dither;

/// Tunable knobs for the ingest pipeline
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Expected number of material regions
    pub num_regions: usize,
    /// Maximum palette entries for the cleaned template
    pub max_colors: usize,
    /// Background removal distance threshold
    pub bg_threshold: f64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            num_regions: DEFAULT_REGIONS,
            max_colors: DEFAULT_MAX_COLORS,
            bg_threshold: DEFAULT_BG_THRESHOLD,
        }
    }
}

/// Persisted description of a segmented region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionMetadata {
    /// Region name
    pub label: String,
    /// Member pixel coordinates
    pub pixels: Vec<[u32; 2]>,
    /// Mean RGB color of the region
    pub dominant_color: [u8; 3],
}

impl From<Region> for RegionMetadata {
    fn from(region: Region) -> Self {
        Self {
            label: region.label,
            pixels: region.pixels,
            dominant_color: region.dominant_color,
        }
    }
}

/// Persisted template metadata, written alongside the cleaned PNG
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// Template name
    pub name: String,
    /// Asset type tag (weapon, armor_overlay, ...)
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Template width in pixels
    pub width: u32,
    /// Template height in pixels
    pub height: u32,
    /// Number of palette entries the template was quantized to
    pub palette_size: usize,
    /// Segmented material regions
    pub regions: Vec<RegionMetadata>,
}

impl TemplateMetadata {
    /// Load template metadata from its JSON sidecar
    ///
    /// # Errors
    ///
    /// Returns `ResourceMissing` when the file is absent, `FileSystem` when
    /// it cannot be read, or `Metadata` when the JSON does not parse
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PipelineError::ResourceMissing {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::FileSystem {
            path: path.to_path_buf(),
            operation: "read metadata",
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| PipelineError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write template metadata as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Metadata` when serialization fails or `FileSystem` when the
    /// file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| PipelineError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| PipelineError::FileSystem {
            path: path.to_path_buf(),
            operation: "write metadata",
            source: e,
        })
    }
}

/// Process a draft image through the full ingest pipeline
///
/// Load → remove background → build palette → ordered dither → quantize →
/// extract regions → save cleaned PNG and JSON metadata. Every stage is
/// deterministic, so re-running over the same input reproduces both output
/// files byte for byte.
///
/// # Errors
///
/// Returns an error if the draft cannot be loaded, any stage receives
/// invalid parameters, or the outputs cannot be written
pub fn process_template(
    input_path: &Path,
    output_dir: &Path,
    name: &str,
    asset_type: &str,
    options: IngestOptions,
) -> Result<TemplateMetadata> {
    let draft = load_rgba(input_path)?;

    let cleaned = remove_background(&draft, DRAFT_BG_COLOR, options.bg_threshold);
    let palette = build_palette(&cleaned, options.max_colors);

    let dithered = apply_ordered_dither(&cleaned, INGEST_DITHER_SIZE, INGEST_DITHER_SPREAD)?;
    let quantized = quantize(&dithered, &palette)?;

    let regions = extract_regions(&quantized, options.num_regions, KMEANS_MAX_ITERATIONS)?;

    save_rgba(&quantized, &output_dir.join(format!("{name}.png")))?;

    let metadata = TemplateMetadata {
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        width: quantized.width(),
        height: quantized.height(),
        palette_size: palette.len(),
        regions: regions.into_iter().map(RegionMetadata::from).collect(),
    };
    metadata.save(&output_dir.join(format!("{name}.json")))?;

    Ok(metadata)
}

/// Locations of a template's image and metadata inside a template directory
pub fn template_paths(template_dir: &Path, template_name: &str) -> (PathBuf, PathBuf) {
    (
        template_dir.join(format!("{template_name}.png")),
        template_dir.join(format!("{template_name}.json")),
    )
}
