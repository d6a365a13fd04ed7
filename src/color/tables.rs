//! Static game color tables: materials, qualities, zones, UI chrome
//!
//! Loaded once and never mutated, so the tables are safe to share across
//! concurrent generation workers. Declaration order matters for the material
//! set: nearest-ramp detection breaks ties toward earlier entries.

use std::sync::LazyLock;

use crate::color::Rgb;
use crate::color::ramp::generate_ramp;

/// Number of shades in every material ramp
pub const RAMP_STEPS: usize = 7;

/// Material base colors for equipment rendering, in detection order
pub const MATERIAL_BASES: &[(&str, Rgb)] = &[
    ("iron", [140, 140, 150]),
    ("gold", [212, 175, 55]),
    ("leather", [139, 90, 43]),
    ("cloth", [120, 80, 140]),
    ("bone", [220, 210, 190]),
    ("crystal", [100, 180, 220]),
    ("wood", [110, 80, 50]),
    ("stone", [130, 125, 120]),
];

/// Pre-generated 7-step ramps for each material, in declaration order
pub static MATERIAL_RAMPS: LazyLock<Vec<(&'static str, Vec<Rgb>)>> = LazyLock::new(|| {
    MATERIAL_BASES
        .iter()
        .map(|&(name, base)| {
            // RAMP_STEPS is non-zero, so ramp generation cannot fail
            let ramp = generate_ramp(base, RAMP_STEPS).unwrap_or_else(|_| vec![base; RAMP_STEPS]);
            (name, ramp)
        })
        .collect()
});

/// Look up a material ramp by name, falling back to iron
pub fn material_ramp(name: &str) -> &'static [Rgb] {
    MATERIAL_RAMPS
        .iter()
        .find(|(n, _)| *n == name)
        .or_else(|| MATERIAL_RAMPS.first())
        .map_or(&[], |(_, ramp)| ramp.as_slice())
}

/// Quality tier colors for item names and borders
#[derive(Debug, Clone, Copy)]
pub struct QualityColors {
    /// Item name text color
    pub name: &'static str,
    /// Icon border color
    pub border: &'static str,
    /// Translucent glow color (8-digit hex), if the tier glows
    pub glow: Option<&'static str>,
}

/// Quality tiers in ascending order with their display colors
pub const QUALITY_COLORS: &[(&str, QualityColors)] = &[
    (
        "common",
        QualityColors {
            name: "#9D9D9D",
            border: "#4A4A4A",
            glow: None,
        },
    ),
    (
        "uncommon",
        QualityColors {
            name: "#1EFF00",
            border: "#0D7A00",
            glow: Some("#1EFF0033"),
        },
    ),
    (
        "rare",
        QualityColors {
            name: "#0070DD",
            border: "#003D7A",
            glow: Some("#0070DD33"),
        },
    ),
    (
        "epic",
        QualityColors {
            name: "#A335EE",
            border: "#5C1D87",
            glow: Some("#A335EE33"),
        },
    ),
    (
        "legendary",
        QualityColors {
            name: "#FF8000",
            border: "#8A4500",
            glow: Some("#FF800044"),
        },
    ),
];

/// Look up quality colors by tier name, falling back to common
pub fn quality_colors(quality: &str) -> QualityColors {
    QUALITY_COLORS
        .iter()
        .find(|(name, _)| *name == quality)
        .or_else(|| QUALITY_COLORS.first())
        .map_or(
            QualityColors {
                name: "#9D9D9D",
                border: "#4A4A4A",
                glow: None,
            },
            |(_, colors)| *colors,
        )
}

/// Glow rendering parameters for a quality tier
#[derive(Debug, Clone, Copy)]
pub struct GlowParams {
    /// Glow radius in pixels beyond the silhouette edge
    pub radius: i32,
    /// Peak glow opacity at the silhouette edge
    pub intensity: f64,
    /// Glow color, if the tier glows at all
    pub color: Option<&'static str>,
}

/// Glow parameters per quality tier
pub const QUALITY_GLOW_PARAMS: &[(&str, GlowParams)] = &[
    (
        "common",
        GlowParams {
            radius: 0,
            intensity: 0.0,
            color: None,
        },
    ),
    (
        "uncommon",
        GlowParams {
            radius: 1,
            intensity: 0.2,
            color: Some("#1EFF00"),
        },
    ),
    (
        "rare",
        GlowParams {
            radius: 1,
            intensity: 0.4,
            color: Some("#0070DD"),
        },
    ),
    (
        "epic",
        GlowParams {
            radius: 2,
            intensity: 0.6,
            color: Some("#A335EE"),
        },
    ),
    (
        "legendary",
        GlowParams {
            radius: 2,
            intensity: 0.9,
            color: Some("#FF8000"),
        },
    ),
];

/// Look up glow parameters by tier name, falling back to common (no glow)
pub fn quality_glow(quality: &str) -> GlowParams {
    QUALITY_GLOW_PARAMS
        .iter()
        .find(|(name, _)| *name == quality)
        .map_or(
            GlowParams {
                radius: 0,
                intensity: 0.0,
                color: None,
            },
            |(_, params)| *params,
        )
}

/// Zone-specific colors for environment rendering
#[derive(Debug, Clone, Copy)]
pub struct ZonePalette {
    /// Dominant terrain color
    pub primary: &'static str,
    /// Shadow/valley color
    pub secondary: &'static str,
    /// Highlight accent color
    pub accent: &'static str,
}

/// Zone palettes for background generation
pub const ZONE_PALETTES: &[(&str, ZonePalette)] = &[
    (
        "starting_regions",
        ZonePalette {
            primary: "#2A3A22",
            secondary: "#1A2A14",
            accent: "#88CC44",
        },
    ),
    (
        "wildwood",
        ZonePalette {
            primary: "#223A22",
            secondary: "#1A2A1A",
            accent: "#44CC88",
        },
    ),
    (
        "mistmoors",
        ZonePalette {
            primary: "#222A3A",
            secondary: "#1A1A2A",
            accent: "#4488CC",
        },
    ),
    (
        "skyreach",
        ZonePalette {
            primary: "#2A2A3A",
            secondary: "#1A1A2A",
            accent: "#8888CC",
        },
    ),
    (
        "blighted_wastes",
        ZonePalette {
            primary: "#3A2A22",
            secondary: "#2A1A14",
            accent: "#CC8844",
        },
    ),
    (
        "ascendant",
        ZonePalette {
            primary: "#2A1A3A",
            secondary: "#1A0A2A",
            accent: "#CC44CC",
        },
    ),
];

/// Look up a zone palette by name, falling back to the starting regions
pub fn zone_palette(zone: &str) -> ZonePalette {
    ZONE_PALETTES
        .iter()
        .find(|(name, _)| *name == zone)
        .map_or(
            ZonePalette {
                primary: "#2A3A22",
                secondary: "#1A2A14",
                accent: "#88CC44",
            },
            |(_, palette)| *palette,
        )
}

/// Panel background color
pub const UI_PANEL_BG: &str = "#1A1A1F";
/// Alternate panel background color
pub const UI_PANEL_BG_ALT: &str = "#12121A";
/// Outer frame metallic gold
pub const UI_FRAME_OUTER: &str = "#8B7340";
/// Inner frame bevel
pub const UI_FRAME_INNER: &str = "#5C4D2E";
/// Frame highlight (top-left edges)
pub const UI_FRAME_HIGHLIGHT: &str = "#C9A84C";
/// Frame drop shadow
pub const UI_FRAME_SHADOW: &str = "#3A2E1A";
/// Separator line color
pub const UI_SEPARATOR: &str = "#3D3529";
/// Primary text color
pub const UI_TEXT_PRIMARY: &str = "#E8D5B0";
/// Secondary text color
pub const UI_TEXT_SECONDARY: &str = "#A89878";
/// Positive stat color
pub const UI_STAT_POSITIVE: &str = "#1EFF00";
/// Negative stat color
pub const UI_STAT_NEGATIVE: &str = "#FF3333";
/// Gold-accent text color
pub const UI_TEXT_GOLD: &str = "#FFD700";
/// Dimmed color for inactive set bonuses
pub const UI_TEXT_INACTIVE: &str = "#5A5040";

/// Fill, background, and border colors for a progress bar type
#[derive(Debug, Clone, Copy)]
pub struct BarColors {
    /// Filled portion color
    pub fill: &'static str,
    /// Empty portion color
    pub bg: &'static str,
    /// Border color
    pub border: &'static str,
}

/// Resource and progress bar colors by bar type
pub const BAR_COLORS: &[(&str, BarColors)] = &[
    (
        "health",
        BarColors {
            fill: "#CC2222",
            bg: "#3A0A0A",
            border: "#661111",
        },
    ),
    (
        "mana",
        BarColors {
            fill: "#2255CC",
            bg: "#0A0A3A",
            border: "#112266",
        },
    ),
    (
        "energy",
        BarColors {
            fill: "#CCCC22",
            bg: "#3A3A0A",
            border: "#666611",
        },
    ),
    (
        "rage",
        BarColors {
            fill: "#CC2222",
            bg: "#3A0A0A",
            border: "#661111",
        },
    ),
    (
        "xp",
        BarColors {
            fill: "#8844CC",
            bg: "#1A0A2A",
            border: "#442266",
        },
    ),
    (
        "reputation",
        BarColors {
            fill: "#22AA44",
            bg: "#0A2A12",
            border: "#115522",
        },
    ),
    (
        "profession",
        BarColors {
            fill: "#CC8822",
            bg: "#2A1A0A",
            border: "#664411",
        },
    ),
    (
        "cast",
        BarColors {
            fill: "#CCCC22",
            bg: "#3A3A0A",
            border: "#666611",
        },
    ),
];

/// Look up bar colors by type, falling back to health
pub fn bar_colors(bar_type: &str) -> BarColors {
    BAR_COLORS
        .iter()
        .find(|(name, _)| *name == bar_type)
        .map_or(
            BarColors {
                fill: "#CC2222",
                bg: "#3A0A0A",
                border: "#661111",
            },
            |(_, colors)| *colors,
        )
}
