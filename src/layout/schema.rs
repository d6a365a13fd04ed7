//! Typed layout and item descriptions consumed by the renderers

use serde::{Deserialize, Serialize};

fn default_font() -> String {
    "body".to_string()
}

fn default_text_size() -> u32 {
    14
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

fn default_rect_side() -> u32 {
    10
}

fn default_panel_side() -> u32 {
    100
}

fn default_bar_width() -> u32 {
    100
}

fn default_bar_height() -> u32 {
    16
}

fn default_progress() -> f64 {
    0.5
}

fn default_bar_type() -> String {
    "health".to_string()
}

fn default_separator_width() -> u32 {
    100
}

fn default_separator_color() -> String {
    "#3D3529".to_string()
}

/// One drawable element inside a layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Solid filled rectangle
    Rect {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// Rectangle width
        #[serde(default = "default_rect_side")]
        width: u32,
        /// Rectangle height
        #[serde(default = "default_rect_side")]
        height: u32,
        /// Fill color as a hex string
        color: String,
    },
    /// Text line rendered through the text seam
    Text {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// String to render
        text: String,
        /// Font name
        #[serde(default = "default_font")]
        font: String,
        /// Font size in pixels
        #[serde(default = "default_text_size")]
        size: u32,
        /// Text color as a hex string
        #[serde(default = "default_text_color")]
        color: String,
    },
    /// Image loaded from disk; missing files are skipped
    Image {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// Path to the image file
        path: String,
    },
    /// Framed panel with children positioned relative to its origin
    Panel {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// Panel width
        #[serde(default = "default_panel_side")]
        width: u32,
        /// Panel height
        #[serde(default = "default_panel_side")]
        height: u32,
        /// Child elements, coordinates relative to the panel origin
        #[serde(default)]
        elements: Vec<Element>,
    },
    /// Typed progress bar
    ProgressBar {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// Bar width
        #[serde(default = "default_bar_width")]
        width: u32,
        /// Bar height
        #[serde(default = "default_bar_height")]
        height: u32,
        /// Fill fraction in [0, 1]
        #[serde(default = "default_progress")]
        progress: f64,
        /// Bar color set name
        #[serde(default = "default_bar_type")]
        bar_type: String,
    },
    /// Horizontal separator rule
    Separator {
        /// Left edge, relative to the parent origin
        #[serde(default)]
        x: i32,
        /// Top edge, relative to the parent origin
        #[serde(default)]
        y: i32,
        /// Rule width
        #[serde(default = "default_separator_width")]
        width: u32,
        /// Rule color as a hex string
        #[serde(default = "default_separator_color")]
        color: String,
    },
}

/// A complete screen layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Optional background fill as a hex string
    #[serde(default)]
    pub background: Option<String>,
    /// Top-level elements
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A named item effect line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemEffect {
    /// Effect name, shown as a gold header
    #[serde(default)]
    pub name: String,
    /// Effect body text
    #[serde(default)]
    pub description: String,
}

/// A set bonus line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetBonus {
    /// Pieces required to activate the bonus
    #[serde(default)]
    pub pieces: u32,
    /// Bonus description
    #[serde(default)]
    pub bonus: String,
    /// Whether the bonus is currently active
    #[serde(default)]
    pub active: bool,
}

/// Item data consumed by the tooltip renderer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemData {
    /// Item name
    #[serde(default)]
    pub name: String,
    /// Quality tier (common, uncommon, rare, epic, legendary)
    #[serde(default)]
    pub quality: String,
    /// Equipment slot line
    #[serde(default)]
    pub slot: String,
    /// Bind rule line
    #[serde(default)]
    pub bind: String,
    /// Item level, when present
    #[serde(default)]
    pub item_level: Option<u32>,
    /// Primary stat lines, rendered green
    #[serde(default)]
    pub primary_stats: Vec<String>,
    /// Secondary stat lines, rendered white
    #[serde(default)]
    pub secondary_stats: Vec<String>,
    /// Effect blocks
    #[serde(default)]
    pub effects: Vec<ItemEffect>,
    /// Set bonus lines
    #[serde(default)]
    pub set_bonuses: Vec<SetBonus>,
    /// Italic flavor line
    #[serde(default)]
    pub flavor_text: String,
    /// Acquisition source line
    #[serde(default)]
    pub source: String,
}
