//! JSON layout to composed screen renderer

use std::path::{Path, PathBuf};

use crate::color::hex_to_rgb;
use crate::generators::chrome::{render_panel_frame, render_progress_bar};
use crate::io::error::{PipelineError, Result};
use crate::io::image::load_rgba;
use crate::layout::schema::{Element, Layout};
use crate::layout::text::{BitmapTextPainter, TextPainter};
use crate::raster::compositor::composite_at;
use crate::raster::primitives::{draw_filled_rect, draw_line};
use crate::raster::PixelBuffer;

/// Renders composed screens from typed layout definitions
pub struct LayoutEngine {
    painter: Box<dyn TextPainter>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Create an engine with the built-in bitmap text painter
    pub fn new() -> Self {
        Self {
            painter: Box::new(BitmapTextPainter),
        }
    }

    /// Create an engine over a caller-supplied text painter
    pub fn with_painter(painter: Box<dyn TextPainter>) -> Self {
        Self { painter }
    }

    /// Render a layout definition to an RGBA buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero-sized canvas or malformed
    /// colors; missing image files are skipped rather than failing
    pub fn render(&self, layout: &Layout) -> Result<PixelBuffer> {
        let mut canvas = PixelBuffer::new(layout.width, layout.height)?;

        if let Some(background) = &layout.background {
            let rgb = hex_to_rgb(background)?;
            draw_filled_rect(
                &mut canvas,
                0,
                0,
                layout.width as i32 - 1,
                layout.height as i32 - 1,
                [rgb[0], rgb[1], rgb[2], 255],
            );
        }

        for element in &layout.elements {
            canvas = self.render_element(canvas, element, 0, 0)?;
        }

        Ok(canvas)
    }

    fn render_element(
        &self,
        mut canvas: PixelBuffer,
        element: &Element,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<PixelBuffer> {
        match element {
            Element::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rgb = hex_to_rgb(color)?;
                let left = x + offset_x;
                let top = y + offset_y;
                draw_filled_rect(
                    &mut canvas,
                    left,
                    top,
                    left + *width as i32 - 1,
                    top + *height as i32 - 1,
                    [rgb[0], rgb[1], rgb[2], 255],
                );
                Ok(canvas)
            }
            Element::Text {
                x,
                y,
                text,
                font,
                size,
                color,
            } => {
                let rendered = self.painter.render(text, font, *size, color)?;
                Ok(composite_at(&canvas, &rendered, x + offset_x, y + offset_y))
            }
            Element::Image { x, y, path } => {
                let file = PathBuf::from(path);
                if !file.exists() {
                    // Missing layers degrade gracefully
                    return Ok(canvas);
                }
                let image = load_rgba(&file)?;
                Ok(composite_at(&canvas, &image, x + offset_x, y + offset_y))
            }
            Element::Panel {
                x,
                y,
                width,
                height,
                elements,
            } => {
                let frame = render_panel_frame(*width, *height)?;
                let origin_x = x + offset_x;
                let origin_y = y + offset_y;
                canvas = composite_at(&canvas, &frame, origin_x, origin_y);
                for child in elements {
                    canvas = self.render_element(canvas, child, origin_x, origin_y)?;
                }
                Ok(canvas)
            }
            Element::ProgressBar {
                x,
                y,
                width,
                height,
                progress,
                bar_type,
            } => {
                let bar = render_progress_bar(*width, *height, *progress, bar_type)?;
                Ok(composite_at(&canvas, &bar, x + offset_x, y + offset_y))
            }
            Element::Separator { x, y, width, color } => {
                let rgb = hex_to_rgb(color)?;
                let left = x + offset_x;
                let top = y + offset_y;
                draw_line(
                    &mut canvas,
                    left,
                    top,
                    left + *width as i32 - 1,
                    top,
                    [rgb[0], rgb[1], rgb[2], 255],
                );
                Ok(canvas)
            }
        }
    }

    /// Load a layout from a JSON file and render it
    ///
    /// # Errors
    ///
    /// Returns `ResourceMissing` when the file is absent, `Metadata` when
    /// the JSON does not parse, or any rendering error
    pub fn render_from_file(&self, path: &Path) -> Result<PixelBuffer> {
        if !path.exists() {
            return Err(PipelineError::ResourceMissing {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::FileSystem {
            path: path.to_path_buf(),
            operation: "read layout",
            source: e,
        })?;
        let layout: Layout = serde_json::from_str(&text).map_err(|e| PipelineError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.render(&layout)
    }
}
