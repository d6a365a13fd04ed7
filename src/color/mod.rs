//! Color handling: conversion, ramps, quantization, and game tables

/// Hex string conversion
pub mod convert;
/// Nearest-color search and palette quantization
pub mod quantize;
/// Light-to-dark ramp generation
pub mod ramp;
/// Static game color tables
pub mod tables;

/// An RGB triple with 8-bit channels
pub type Rgb = [u8; 3];

pub use convert::{hex_to_rgb, hex_to_rgba, rgb_to_hex};
pub use quantize::{build_palette, nearest_color, quantize};
pub use ramp::generate_ramp;
