//! Asset generators built on the raster, color, and synthesis layers

/// Zone background generation
pub mod backgrounds;
/// Panel frames, buttons, and progress bars
pub mod chrome;
/// Icon variant generation
pub mod icons;
/// Character sprite composition
pub mod sprites;
/// Item tooltip rendering
pub mod tooltips;

pub use backgrounds::generate_background;
pub use icons::{generate_icon, generate_icon_batch};
pub use sprites::compose_sprite;
pub use tooltips::render_tooltip;
