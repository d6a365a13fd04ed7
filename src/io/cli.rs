//! Command-line interface for the asset pipeline

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::generators::backgrounds::generate_background;
use crate::generators::icons::generate_icon_batch;
use crate::generators::tooltips::render_tooltip_from_file;
use crate::ingest::template::{IngestOptions, process_template};
use crate::io::configuration::{
    DEFAULT_BG_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_REGIONS, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::save_rgba;
use crate::io::manifest::{Manifest, parse_seed_spec};
use crate::io::progress::BatchProgress;
use crate::layout::engine::LayoutEngine;
use crate::layout::text::BitmapTextPainter;

/// Command-line arguments for the asset pipeline
#[derive(Parser)]
#[command(name = "pixelsmith")]
#[command(
    author,
    version,
    about = "Deterministic seed-driven pixel art asset pipeline"
)]
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Pipeline operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Process a draft image into a cleaned template
    Ingest {
        /// Path to the draft PNG
        #[arg(long)]
        input: PathBuf,
        /// Asset type tag (weapon, armor_overlay, ...)
        #[arg(long = "type")]
        asset_type: String,
        /// Template name
        #[arg(long)]
        name: String,
        /// Output directory for processed templates
        #[arg(long, default_value = "templates")]
        output: PathBuf,
        /// Number of material regions to detect
        #[arg(long, default_value_t = DEFAULT_REGIONS)]
        regions: usize,
        /// Maximum palette colors
        #[arg(long, default_value_t = DEFAULT_MAX_COLORS)]
        max_colors: usize,
        /// Background removal threshold
        #[arg(long, default_value_t = DEFAULT_BG_THRESHOLD)]
        threshold: f64,
    },

    /// Generate icon variants from a template
    Icons {
        /// Directory with template PNGs and metadata
        #[arg(long)]
        template_dir: PathBuf,
        /// Template name (without extension)
        #[arg(long)]
        template: String,
        /// Comma-separated material names
        #[arg(long)]
        materials: String,
        /// Comma-separated quality tiers
        #[arg(long)]
        qualities: String,
        /// Seeds: single number, range (100-109), or comma-separated
        #[arg(long)]
        seeds: String,
        /// Output directory
        #[arg(long, default_value = "output/icons")]
        output: PathBuf,
    },

    /// Generate assets from a JSON manifest file
    Manifest {
        /// Path to the manifest JSON
        #[arg(long)]
        manifest: PathBuf,
        /// Directory with template PNGs and metadata
        #[arg(long)]
        template_dir: PathBuf,
    },

    /// Generate a zone background
    Background {
        /// Zone name
        #[arg(long)]
        zone: String,
        /// Width in pixels
        #[arg(long)]
        width: u32,
        /// Height in pixels
        #[arg(long)]
        height: u32,
        /// RNG seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Generate a seamlessly tileable background
        #[arg(long)]
        tileable: bool,
        /// Output PNG path
        #[arg(long)]
        output: PathBuf,
    },

    /// Render an item tooltip from JSON data
    Tooltip {
        /// Item JSON file
        #[arg(long)]
        item_data: PathBuf,
        /// Output PNG path
        #[arg(long)]
        output: PathBuf,
    },

    /// Render a full screen composition from a layout file
    Screen {
        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,
        /// Output PNG path
        #[arg(long)]
        output: PathBuf,
    },
}

impl Cli {
    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Propagates any pipeline error from the selected operation
    // User feedback goes to the terminal from this layer only
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Ingest {
                input,
                asset_type,
                name,
                output,
                regions,
                max_colors,
                threshold,
            } => {
                let options = IngestOptions {
                    num_regions: regions,
                    max_colors,
                    bg_threshold: threshold,
                };
                let metadata = process_template(&input, &output, &name, &asset_type, options)?;
                if !self.quiet {
                    println!("Template '{name}' processed successfully.");
                    println!("  Type: {}", metadata.asset_type);
                    println!("  Size: {}x{}", metadata.width, metadata.height);
                    println!("  Regions: {}", metadata.regions.len());
                    println!("  Palette: {} colors", metadata.palette_size);
                    println!("  Output: {}/{name}.png", output.display());
                }
                Ok(())
            }

            Command::Icons {
                template_dir,
                template,
                materials,
                qualities,
                seeds,
                output,
            } => {
                let materials: Vec<String> =
                    materials.split(',').map(|m| m.trim().to_string()).collect();
                let qualities: Vec<String> =
                    qualities.split(',').map(|q| q.trim().to_string()).collect();
                let seeds = parse_seed_spec(&seeds)?;

                run_icon_batch(
                    &template_dir,
                    &template,
                    &materials,
                    &qualities,
                    &seeds,
                    &output,
                    self.quiet,
                )
            }

            Command::Manifest {
                manifest,
                template_dir,
            } => {
                let manifest = Manifest::load(&manifest)?;
                if manifest.manifest_type != "icons" {
                    return Err(crate::io::error::invalid_argument(
                        "type",
                        &manifest.manifest_type,
                        &"only 'icons' manifests are supported",
                    ));
                }
                run_icon_batch(
                    &template_dir,
                    &manifest.template,
                    &manifest.materials,
                    &manifest.qualities,
                    &manifest.seeds,
                    &PathBuf::from(&manifest.output_dir),
                    self.quiet,
                )
            }

            Command::Background {
                zone,
                width,
                height,
                seed,
                tileable,
                output,
            } => {
                let background = generate_background(&zone, width, height, seed, tileable)?;
                save_rgba(&background, &output)?;
                if !self.quiet {
                    println!("Background saved to {}", output.display());
                }
                Ok(())
            }

            Command::Tooltip { item_data, output } => {
                let tooltip = render_tooltip_from_file(&item_data, &BitmapTextPainter)?;
                save_rgba(&tooltip, &output)?;
                if !self.quiet {
                    println!("Tooltip saved to {}", output.display());
                }
                Ok(())
            }

            Command::Screen { layout, output } => {
                let engine = LayoutEngine::new();
                let screen = engine.render_from_file(&layout)?;
                save_rgba(&screen, &output)?;
                if !self.quiet {
                    println!("Screen saved to {}", output.display());
                }
                Ok(())
            }
        }
    }
}

/// Expand and run an icon batch, reporting per-variant failures
// User feedback goes to the terminal from this layer only
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn run_icon_batch(
    template_dir: &std::path::Path,
    template: &str,
    materials: &[String],
    qualities: &[String],
    seeds: &[u64],
    output: &std::path::Path,
    quiet: bool,
) -> Result<()> {
    let total = materials.len() * qualities.len() * seeds.len();
    if !quiet {
        println!("Generating {total} icons...");
    }

    let progress = BatchProgress::new(total, quiet);
    let mut tick = || progress.tick();
    let outcome = generate_icon_batch(
        template_dir,
        template,
        materials,
        qualities,
        seeds,
        output,
        Some(&mut tick),
    );
    progress.finish();

    for failure in &outcome.failures {
        eprintln!("Failed variant {failure}");
    }
    if !quiet {
        println!(
            "Generated {} icons in {}/",
            outcome.generated.len(),
            output.display()
        );
    }

    Ok(())
}
