//! Item tooltip rendering from typed item data

use std::path::Path;

use crate::color::hex_to_rgb;
use crate::color::tables::{
    UI_SEPARATOR, UI_STAT_POSITIVE, UI_TEXT_GOLD, UI_TEXT_INACTIVE, UI_TEXT_SECONDARY,
    quality_colors,
};
use crate::generators::chrome::render_panel_frame;
use crate::io::configuration::{
    FRAME_BORDER, LINE_SPACING, SECTION_GAP, SEPARATOR_HEIGHT, TOOLTIP_PADDING, TOOLTIP_WIDTH,
};
use crate::io::error::{PipelineError, Result};
use crate::layout::schema::ItemData;
use crate::layout::text::TextPainter;
use crate::raster::compositor::composite_at;
use crate::raster::PixelBuffer;

/// A pre-rendered tooltip section and the extra gap above it
struct Section {
    image: PixelBuffer,
    gap: i32,
}

fn separator(content_width: u32) -> Result<PixelBuffer> {
    let rgb = hex_to_rgb(UI_SEPARATOR)?;
    PixelBuffer::filled(
        content_width,
        SEPARATOR_HEIGHT,
        [rgb[0], rgb[1], rgb[2], 255],
    )
}

/// Render a complete item tooltip at the standard width
///
/// # Errors
///
/// Returns an error when a section fails to render
pub fn render_tooltip(item: &ItemData, painter: &dyn TextPainter) -> Result<PixelBuffer> {
    render_tooltip_sized(item, TOOLTIP_WIDTH, painter)
}

/// Render a complete item tooltip from item data
///
/// Sections are pre-rendered to size the dynamic-height panel, then stacked
/// top to bottom inside the frame: quality-colored name, slot and bind
/// lines, separator, item level, primary stats (green), secondary stats
/// (white), effects (gold header plus body), set bonuses (dimmed when
/// inactive), quoted flavor text behind a second separator, and the source
/// line.
///
/// # Errors
///
/// Returns an error when a section fails to render
pub fn render_tooltip_sized(
    item: &ItemData,
    width: u32,
    painter: &dyn TextPainter,
) -> Result<PixelBuffer> {
    let content_width = width.saturating_sub(2 * TOOLTIP_PADDING as u32).max(1);
    let mut sections: Vec<Section> = Vec::new();

    // Item name in quality color
    let quality = if item.quality.is_empty() {
        "common"
    } else {
        item.quality.as_str()
    };
    let name = if item.name.is_empty() {
        "Unknown"
    } else {
        item.name.as_str()
    };
    let name_color = quality_colors(quality).name;
    sections.push(Section {
        image: painter.render(name, "heading", 20, name_color)?,
        gap: 2,
    });

    if !item.slot.is_empty() {
        sections.push(Section {
            image: painter.render(&item.slot, "body", 12, UI_TEXT_SECONDARY)?,
            gap: 0,
        });
    }
    if !item.bind.is_empty() {
        sections.push(Section {
            image: painter.render(&item.bind, "body", 12, UI_TEXT_SECONDARY)?,
            gap: 0,
        });
    }

    sections.push(Section {
        image: separator(content_width)?,
        gap: SECTION_GAP,
    });

    if let Some(level) = item.item_level {
        sections.push(Section {
            image: painter.render(&format!("Item Level {level}"), "body", 12, UI_TEXT_GOLD)?,
            gap: 2,
        });
    }

    for stat in &item.primary_stats {
        sections.push(Section {
            image: painter.render(stat, "body", 14, UI_STAT_POSITIVE)?,
            gap: 0,
        });
    }
    for stat in &item.secondary_stats {
        sections.push(Section {
            image: painter.render(stat, "body", 14, "#FFFFFF")?,
            gap: 0,
        });
    }

    for effect in &item.effects {
        if !effect.name.is_empty() {
            sections.push(Section {
                image: painter.render(&effect.name, "heading", 14, UI_TEXT_GOLD)?,
                gap: 2,
            });
        }
        if !effect.description.is_empty() {
            sections.push(Section {
                image: painter.render(&effect.description, "body", 12, "#FFFFFF")?,
                gap: 0,
            });
        }
    }

    for bonus in &item.set_bonuses {
        let color = if bonus.active {
            "#FFFFFF"
        } else {
            UI_TEXT_INACTIVE
        };
        let line = format!("({}) Set: {}", bonus.pieces, bonus.bonus);
        sections.push(Section {
            image: painter.render(&line, "body", 12, color)?,
            gap: 0,
        });
    }

    if !item.flavor_text.is_empty() {
        sections.push(Section {
            image: separator(content_width)?,
            gap: SECTION_GAP,
        });
        let quoted = format!("\"{}\"", item.flavor_text);
        sections.push(Section {
            image: painter.render(&quoted, "body", 12, UI_TEXT_SECONDARY)?,
            gap: 0,
        });
    }

    if !item.source.is_empty() {
        sections.push(Section {
            image: painter.render(&item.source, "body", 10, UI_TEXT_SECONDARY)?,
            gap: 0,
        });
    }

    // Total height: padding, then every section with its gap and spacing
    let mut total_height = TOOLTIP_PADDING * 2;
    for section in &sections {
        total_height += section.image.height() as i32 + LINE_SPACING + section.gap;
    }
    total_height += FRAME_BORDER * 2;
    let full_width = width + (FRAME_BORDER * 2) as u32;

    let mut frame = render_panel_frame(full_width, total_height.max(1) as u32)?;

    let x = FRAME_BORDER + TOOLTIP_PADDING;
    let mut y = FRAME_BORDER + TOOLTIP_PADDING;
    for section in &sections {
        y += section.gap;
        let clipped = section.image.clipped(content_width, section.image.height());
        frame = composite_at(&frame, &clipped, x, y);
        y += section.image.height() as i32 + LINE_SPACING;
    }

    Ok(frame)
}

/// Load item data from a JSON file and render its tooltip
///
/// # Errors
///
/// Returns `ResourceMissing` when the file is absent, `Metadata` when the
/// JSON does not parse, or any rendering error
pub fn render_tooltip_from_file(path: &Path, painter: &dyn TextPainter) -> Result<PixelBuffer> {
    if !path.exists() {
        return Err(PipelineError::ResourceMissing {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| PipelineError::FileSystem {
        path: path.to_path_buf(),
        operation: "read item data",
        source: e,
    })?;
    let item: ItemData = serde_json::from_str(&text).map_err(|e| PipelineError::Metadata {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    render_tooltip(&item, painter)
}
