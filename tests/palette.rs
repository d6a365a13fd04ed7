//! Validates hex conversion, ramp generation, and palette quantization

use pixelsmith::color::quantize::build_palette;
use pixelsmith::color::tables::{material_ramp, quality_glow, zone_palette};
use pixelsmith::color::{generate_ramp, hex_to_rgb, hex_to_rgba, nearest_color, quantize, rgb_to_hex};
use pixelsmith::raster::PixelBuffer;

#[test]
fn test_hex_parsing_forms() {
    assert_eq!(hex_to_rgb("#FF8000").unwrap(), [255, 128, 0]);
    assert_eq!(hex_to_rgb("ff8000").unwrap(), [255, 128, 0]);
    assert_eq!(hex_to_rgb("#fF8000").unwrap(), [255, 128, 0]);
    assert_eq!(hex_to_rgba("#1EFF0033").unwrap(), [30, 255, 0, 51]);
    assert_eq!(hex_to_rgba("#1EFF00").unwrap(), [30, 255, 0, 255]);
}

#[test]
fn test_hex_rejects_malformed() {
    assert!(hex_to_rgb("").is_err());
    assert!(hex_to_rgb("#12345").is_err());
    assert!(hex_to_rgb("#1234567").is_err());
    assert!(hex_to_rgb("GGGGGG").is_err());
    assert!(hex_to_rgba("#123").is_err());
}

#[test]
fn test_hex_round_trip() {
    for rgb in [[0, 0, 0], [255, 255, 255], [255, 128, 0], [13, 122, 0]] {
        assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
    }
    assert_eq!(rgb_to_hex([255, 128, 0]), "#FF8000");
}

#[test]
fn test_ramp_center_holds_base_exactly() {
    let base = [255, 128, 0];
    let ramp = generate_ramp(base, 7).unwrap();

    assert_eq!(ramp.len(), 7);
    assert_eq!(ramp[3], base);
    // Known extremes for this base color
    assert_eq!(ramp[0], [255, 204, 153]);
    assert_eq!(ramp[6], [76, 38, 0]);
}

#[test]
fn test_ramp_brightness_monotonic() {
    for base in [[255, 128, 0], [140, 140, 150], [10, 200, 90]] {
        let ramp = generate_ramp(base, 7).unwrap();
        let sums: Vec<u32> = ramp
            .iter()
            .map(|c| c.iter().map(|&v| u32::from(v)).sum())
            .collect();
        for pair in sums.windows(2) {
            assert!(pair[0] >= pair[1], "brightness increased: {sums:?}");
        }
    }
}

#[test]
fn test_ramp_rejects_zero_steps() {
    assert!(generate_ramp([10, 20, 30], 0).is_err());
}

#[test]
fn test_nearest_color_tie_breaks_first() {
    let palette = [[100, 100, 100], [100, 100, 100], [0, 0, 0]];
    assert_eq!(nearest_color([100, 100, 100], &palette).unwrap(), 0);

    let palette = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];
    assert_eq!(nearest_color([250, 10, 10], &palette).unwrap(), 0);
    assert_eq!(nearest_color([10, 250, 10], &palette).unwrap(), 1);
}

#[test]
fn test_nearest_color_rejects_empty_palette() {
    assert!(nearest_color([0, 0, 0], &[]).is_err());
}

#[test]
fn test_quantize_snaps_opaque_preserves_transparent() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    buffer.set_pixel(0, 0, [120, 130, 125, 255]);
    buffer.set_pixel(1, 0, [10, 20, 30, 200]);
    // Transparent pixel with stale RGB
    buffer.set_pixel(2, 0, [77, 88, 99, 0]);

    let palette = [[0, 0, 0], [255, 255, 255]];
    let result = quantize(&buffer, &palette).unwrap();

    for pixel in result.pixels() {
        if pixel[3] > 0 {
            let rgb = [pixel[0], pixel[1], pixel[2]];
            assert!(palette.contains(&rgb), "unquantized pixel {rgb:?}");
        }
    }
    // Stale RGB under zero alpha passes through untouched
    assert_eq!(result.pixel(2, 0), Some([77, 88, 99, 0]));
    assert_eq!(result.pixel(1, 0).unwrap()[3], 200);
}

#[test]
fn test_build_palette_caps_and_orders() {
    let mut buffer = PixelBuffer::new(16, 16).unwrap();
    for y in 0..16 {
        for x in 0..16 {
            buffer.set_pixel(x, y, [x as u8 * 16, y as u8 * 16, 0, 255]);
        }
    }

    let full = build_palette(&buffer, 0);
    assert_eq!(full.len(), 256);
    // Sorted unique colors make the subsample deterministic
    let capped = build_palette(&buffer, 64);
    assert_eq!(capped.len(), 64);
    assert_eq!(capped, build_palette(&buffer, 64));

    let empty = PixelBuffer::new(4, 4).unwrap();
    assert_eq!(build_palette(&empty, 16), vec![[0, 0, 0]]);
}

#[test]
fn test_material_table_lookups() {
    assert_eq!(material_ramp("iron").len(), 7);
    assert_eq!(material_ramp("iron")[3], [140, 140, 150]);
    // Unknown materials fall back to iron
    assert_eq!(material_ramp("unobtanium"), material_ramp("iron"));

    let glow = quality_glow("legendary");
    assert_eq!(glow.radius, 2);
    assert!(quality_glow("common").color.is_none());

    assert_eq!(zone_palette("wildwood").primary, "#223A22");
    assert_eq!(
        zone_palette("nowhere").primary,
        zone_palette("starting_regions").primary
    );
}
