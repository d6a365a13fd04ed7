//! Deterministic synthesis primitives: randomness, noise, dithering

/// Ordered dithering and Bayer matrices
pub mod dither;
/// Coherent noise fields
pub mod noise;
/// Seeded random number generation
pub mod rng;

pub use dither::{apply_ordered_dither, bayer_matrix};
pub use noise::{NoiseField, NoiseSource, generate_field, generate_tileable_field};
pub use rng::SeededRng;
