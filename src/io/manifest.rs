//! Seed specifications and batch manifest files

use std::path::Path;

use serde::Deserialize;

use crate::io::error::{PipelineError, Result, invalid_argument};

/// Expand a seed specification into an explicit seed list
///
/// Accepts a single integer (`"42"`), an inclusive range (`"100-109"`), a
/// comma-separated list (`"1,2,3"`), or any comma-separated mix of the
/// three.
///
/// # Errors
///
/// Returns `InvalidArgument` for empty parts, unparsable integers, or
/// descending ranges
pub fn parse_seed_spec(spec: &str) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();

    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(invalid_argument("seeds", &spec, &"empty seed entry"));
        }
        if let Some((start, end)) = part.split_once('-') {
            let start: u64 = start.trim().parse().map_err(|_| {
                invalid_argument("seeds", &part, &"range start is not an integer")
            })?;
            let end: u64 = end
                .trim()
                .parse()
                .map_err(|_| invalid_argument("seeds", &part, &"range end is not an integer"))?;
            if end < start {
                return Err(invalid_argument("seeds", &part, &"range end before start"));
            }
            seeds.extend(start..=end);
        } else {
            let seed: u64 = part
                .parse()
                .map_err(|_| invalid_argument("seeds", &part, &"not an integer"))?;
            seeds.push(seed);
        }
    }

    Ok(seeds)
}

fn default_manifest_type() -> String {
    "icons".to_string()
}

fn default_output_dir() -> String {
    "output/icons".to_string()
}

/// Batch generation manifest loaded from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Kind of batch the manifest describes (currently `icons`)
    #[serde(rename = "type", default = "default_manifest_type")]
    pub manifest_type: String,
    /// Template name to expand
    pub template: String,
    /// Materials to generate
    pub materials: Vec<String>,
    /// Quality tiers to generate
    pub qualities: Vec<String>,
    /// Seeds to generate
    pub seeds: Vec<u64>,
    /// Output directory for generated variants
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Manifest {
    /// Load a manifest from a JSON file
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
            operation: "read manifest",
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| PipelineError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Number of variants the manifest expands to
    pub fn variant_count(&self) -> usize {
        self.materials.len() * self.qualities.len() * self.seeds.len()
    }
}
