//! Hex string color conversion

use crate::color::Rgb;
use crate::io::error::{Result, invalid_argument};
use crate::raster::Rgba;

fn parse_channel(digits: &str, range: std::ops::Range<usize>, full: &str) -> Result<u8> {
    digits
        .get(range)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .ok_or_else(|| invalid_argument("hex", &full, &"expected hex digit pairs"))
}

/// Parse a 6-digit hex color string, with or without a leading `#`
///
/// Case-insensitive: `"#FF8000"`, `"ff8000"`, and `"#Ff8000"` all parse to
/// `[255, 128, 0]`.
///
/// # Errors
///
/// Returns `InvalidArgument` unless the input is exactly six hex digits
/// after the optional `#`
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(invalid_argument(
            "hex",
            &hex,
            &"expected 6 hex digits with optional leading '#'",
        ));
    }
    Ok([
        parse_channel(digits, 0..2, hex)?,
        parse_channel(digits, 2..4, hex)?,
        parse_channel(digits, 4..6, hex)?,
    ])
}

/// Parse a 6- or 8-digit hex color string into RGBA
///
/// A missing alpha pair defaults to fully opaque. Used for the quality glow
/// constants, which carry their translucency inline.
///
/// # Errors
///
/// Returns `InvalidArgument` unless the input is six or eight hex digits
/// after the optional `#`
pub fn hex_to_rgba(hex: &str) -> Result<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let alpha = match digits.len() {
        6 => 255,
        8 => parse_channel(digits, 6..8, hex)?,
        _ => {
            return Err(invalid_argument(
                "hex",
                &hex,
                &"expected 6 or 8 hex digits with optional leading '#'",
            ));
        }
    };
    Ok([
        parse_channel(digits, 0..2, hex)?,
        parse_channel(digits, 2..4, hex)?,
        parse_channel(digits, 4..6, hex)?,
        alpha,
    ])
}

/// Format an RGB triple as an uppercase `#`-prefixed hex string
///
/// Exact round-trip partner of [`hex_to_rgb`].
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
