//! Screen layout: schema, renderer, and the text painting seam

/// Layout renderer
pub mod engine;
/// Typed layout and item descriptions
pub mod schema;
/// Text measurement and rendering seam
pub mod text;

pub use engine::LayoutEngine;
pub use schema::{Element, ItemData, Layout};
pub use text::{BitmapTextPainter, TextPainter};
