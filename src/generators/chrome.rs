//! UI chrome: beveled panel frames, buttons, progress bars

use crate::color::hex_to_rgb;
use crate::color::tables::{
    UI_FRAME_HIGHLIGHT, UI_FRAME_INNER, UI_FRAME_OUTER, UI_FRAME_SHADOW, UI_PANEL_BG,
    UI_TEXT_PRIMARY, bar_colors,
};
use crate::io::error::Result;
use crate::layout::text::TextPainter;
use crate::raster::compositor::composite_at;
use crate::raster::primitives::{draw_filled_rect, draw_line, draw_rect};
use crate::raster::{PixelBuffer, Rgba};

fn opaque(rgb: [u8; 3]) -> Rgba {
    [rgb[0], rgb[1], rgb[2], 255]
}

/// Render the standard 4-layer beveled panel frame
///
/// Outermost 1px shadow, 2px metallic gold, 1px top-left highlight, 1px
/// inner bevel, over the panel background fill.
///
/// # Errors
///
/// Returns `InvalidArgument` when either dimension is zero
pub fn render_panel_frame(width: u32, height: u32) -> Result<PixelBuffer> {
    let mut panel = PixelBuffer::new(width, height)?;
    let w = width as i32;
    let h = height as i32;

    let bg = hex_to_rgb(UI_PANEL_BG)?;
    draw_filled_rect(&mut panel, 0, 0, w - 1, h - 1, opaque(bg));

    let shadow = hex_to_rgb(UI_FRAME_SHADOW)?;
    draw_rect(&mut panel, 0, 0, w - 1, h - 1, opaque(shadow));

    let gold = hex_to_rgb(UI_FRAME_OUTER)?;
    draw_rect(&mut panel, 1, 1, w - 2, h - 2, opaque(gold));
    draw_rect(&mut panel, 2, 2, w - 3, h - 3, opaque(gold));

    let highlight = hex_to_rgb(UI_FRAME_HIGHLIGHT)?;
    draw_line(&mut panel, 3, 3, w - 4, 3, opaque(highlight));
    draw_line(&mut panel, 3, 3, 3, h - 4, opaque(highlight));

    let inner = hex_to_rgb(UI_FRAME_INNER)?;
    draw_rect(&mut panel, 4, 4, w - 5, h - 5, opaque(inner));

    Ok(panel)
}

/// Render a beveled button with an optional centered label
///
/// # Errors
///
/// Returns `InvalidArgument` when either dimension is zero or text
/// rendering fails
pub fn render_button(
    width: u32,
    height: u32,
    label: &str,
    painter: &dyn TextPainter,
) -> Result<PixelBuffer> {
    let mut button = PixelBuffer::new(width, height)?;
    let w = width as i32;
    let h = height as i32;

    let bg = hex_to_rgb(UI_FRAME_INNER)?;
    draw_filled_rect(&mut button, 0, 0, w - 1, h - 1, opaque(bg));

    let border = hex_to_rgb(UI_FRAME_OUTER)?;
    draw_rect(&mut button, 0, 0, w - 1, h - 1, opaque(border));

    let highlight = hex_to_rgb(UI_FRAME_HIGHLIGHT)?;
    draw_line(&mut button, 1, 1, w - 2, 1, opaque(highlight));
    draw_line(&mut button, 1, 1, 1, h - 2, opaque(highlight));

    if !label.is_empty() {
        let text = painter.render(label, "body", 12, UI_TEXT_PRIMARY)?;
        let tx = (w - text.width() as i32) / 2;
        let ty = (h - text.height() as i32) / 2;
        button = composite_at(&button, &text, tx, ty);
    }

    Ok(button)
}

/// Render a typed progress bar with a clamped fill fraction
///
/// # Errors
///
/// Returns `InvalidArgument` when either dimension is zero
pub fn render_progress_bar(
    width: u32,
    height: u32,
    progress: f64,
    bar_type: &str,
) -> Result<PixelBuffer> {
    let colors = bar_colors(bar_type);
    let mut bar = PixelBuffer::new(width, height)?;
    let w = width as i32;
    let h = height as i32;

    let bg = hex_to_rgb(colors.bg)?;
    draw_filled_rect(&mut bar, 0, 0, w - 1, h - 1, opaque(bg));

    let fill_width = ((w - 2) as f64 * progress.clamp(0.0, 1.0)) as i32;
    if fill_width > 0 {
        let fill = hex_to_rgb(colors.fill)?;
        draw_filled_rect(&mut bar, 1, 1, fill_width, h - 2, opaque(fill));
    }

    let border = hex_to_rgb(colors.border)?;
    draw_rect(&mut bar, 0, 0, w - 1, h - 1, opaque(border));

    Ok(bar)
}
