//! Pipeline constants and runtime configuration defaults

use crate::raster::Rgba;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Ingest settings
/// Euclidean distance threshold for background removal
pub const DEFAULT_BG_THRESHOLD: f64 = 30.0;
/// Maximum palette entries for ingested templates
pub const DEFAULT_MAX_COLORS: usize = 128;
/// Expected material regions when none are specified
pub const DEFAULT_REGIONS: usize = 1;
/// Bayer matrix size for the ingest dither pass
pub const INGEST_DITHER_SIZE: usize = 4;
/// Dither spread for the ingest pass
pub const INGEST_DITHER_SPREAD: i32 = 8;
/// Default background color removed from drafts (panel background)
pub const DRAFT_BG_COLOR: [u8; 3] = [0x1A, 0x1A, 0x1F];

// Region extraction
/// Internal centroid-seeding seed, independent of generation seeds
pub const REGION_KMEANS_SEED: u64 = 42;
/// Iteration cap for region clustering
pub const KMEANS_MAX_ITERATIONS: usize = 20;

// Icon generation
/// Bayer matrix size for icon dithering
pub const ICON_DITHER_SIZE: usize = 4;
/// Inclusive bounds for the seed-jittered icon dither spread
pub const ICON_SPREAD_RANGE: (i64, i64) = (6, 12);
/// Icon outline color
pub const ICON_OUTLINE_COLOR: Rgba = [20, 20, 25, 255];
/// Icon outline thickness in pixels
pub const ICON_OUTLINE_WIDTH: i32 = 2;

// Background generation
/// Frequency of the large structural noise layer
pub const BACKGROUND_LARGE_SCALE: f64 = 0.02;
/// Octave count for the large structural layer
pub const BACKGROUND_LARGE_OCTAVES: u32 = 2;
/// Frequency of the fine detail noise layer
pub const BACKGROUND_DETAIL_SCALE: f64 = 0.08;
/// Seed offset separating the detail layer from the structural layer
pub const BACKGROUND_DETAIL_SEED_OFFSET: u32 = 1000;
/// Detail noise level above which accent color blends in
pub const BACKGROUND_ACCENT_THRESHOLD: f64 = 0.7;
/// Maximum accent blend strength
pub const BACKGROUND_ACCENT_MAX: f64 = 0.3;
/// Maximum vignette darkening at the corners
pub const BACKGROUND_VIGNETTE_STRENGTH: f64 = 0.4;
/// Bayer matrix size for background dithering
pub const BACKGROUND_DITHER_SIZE: usize = 8;
/// Dither spread for backgrounds
pub const BACKGROUND_DITHER_SPREAD: i32 = 12;

// Sprite composition
/// Character sprite canvas width
pub const SPRITE_WIDTH: u32 = 256;
/// Character sprite canvas height
pub const SPRITE_HEIGHT: u32 = 512;
/// Floor shadow vertical offset from the canvas bottom
pub const SHADOW_BOTTOM_OFFSET: i32 = 20;
/// Floor shadow horizontal radius
pub const SHADOW_RADIUS_X: i32 = 40;
/// Floor shadow vertical radius
pub const SHADOW_RADIUS_Y: i32 = 8;
/// Floor shadow color (30% black)
pub const SHADOW_COLOR: Rgba = [0, 0, 0, 76];

// Tooltip layout
/// Tooltip content width in pixels
pub const TOOLTIP_WIDTH: u32 = 320;
/// Padding between the frame and tooltip content
pub const TOOLTIP_PADDING: i32 = 12;
/// Height of separator rules
pub const SEPARATOR_HEIGHT: u32 = 1;
/// Vertical gap before a new tooltip section
pub const SECTION_GAP: i32 = 6;
/// Vertical spacing between stacked lines
pub const LINE_SPACING: i32 = 4;
/// Panel frame thickness per side
pub const FRAME_BORDER: i32 = 5;
