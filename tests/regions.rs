//! Validates region extraction partitioning and determinism

use std::collections::BTreeSet;

use pixelsmith::ingest::extract_regions;
use pixelsmith::raster::PixelBuffer;

fn opaque_set(buffer: &PixelBuffer) -> BTreeSet<(u32, u32)> {
    let mut set = BTreeSet::new();
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if buffer.alpha(x, y) > 0 {
                set.insert((x as u32, y as u32));
            }
        }
    }
    set
}

fn two_tone_buffer() -> PixelBuffer {
    // Left half red, right half blue, transparent frame around both
    let mut buffer = PixelBuffer::new(20, 10).unwrap();
    for y in 1..9 {
        for x in 1..10 {
            buffer.set_pixel(x, y, [200, 30, 30, 255]);
        }
        for x in 10..19 {
            buffer.set_pixel(x, y, [30, 30, 200, 255]);
        }
    }
    buffer
}

#[test]
fn test_single_region_covers_all_opaque_pixels() {
    let buffer = two_tone_buffer();
    let regions = extract_regions(&buffer, 1, 20).unwrap();

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].label, "region_0");

    let member_set: BTreeSet<(u32, u32)> = regions[0]
        .pixels
        .iter()
        .map(|coord| (coord[0], coord[1]))
        .collect();
    assert_eq!(member_set, opaque_set(&buffer));
}

#[test]
fn test_single_region_mean_color_of_uniform_image() {
    let mut buffer = PixelBuffer::new(6, 6).unwrap();
    for y in 1..5 {
        for x in 1..5 {
            buffer.set_pixel(x, y, [140, 140, 150, 255]);
        }
    }

    let regions = extract_regions(&buffer, 1, 20).unwrap();
    assert_eq!(regions[0].dominant_color, [140, 140, 150]);
}

#[test]
fn test_clusters_partition_opaque_pixels() {
    let buffer = two_tone_buffer();
    let regions = extract_regions(&buffer, 2, 20).unwrap();

    assert!(!regions.is_empty() && regions.len() <= 2);

    let mut union: BTreeSet<(u32, u32)> = BTreeSet::new();
    let mut total = 0;
    for region in &regions {
        total += region.pixels.len();
        union.extend(region.pixels.iter().map(|coord| (coord[0], coord[1])));
    }

    // Disjoint (no coordinate counted twice) and complete
    assert_eq!(total, union.len());
    assert_eq!(union, opaque_set(&buffer));
}

#[test]
fn test_extraction_deterministic_across_calls() {
    let buffer = two_tone_buffer();
    let first = extract_regions(&buffer, 3, 20).unwrap();
    let second = extract_regions(&buffer, 3, 20).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(a.dominant_color, b.dominant_color);
    }
}

#[test]
fn test_more_clusters_than_pixels() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    buffer.set_pixel(0, 0, [255, 0, 0, 255]);
    buffer.set_pixel(3, 3, [0, 0, 255, 255]);

    let regions = extract_regions(&buffer, 5, 20).unwrap();
    assert!(!regions.is_empty() && regions.len() <= 2);
}

#[test]
fn test_empty_image_yields_no_regions() {
    let buffer = PixelBuffer::new(8, 8).unwrap();
    let regions = extract_regions(&buffer, 2, 20).unwrap();
    assert!(regions.is_empty());
}

#[test]
fn test_zero_regions_rejected() {
    let buffer = PixelBuffer::new(8, 8).unwrap();
    assert!(extract_regions(&buffer, 0, 20).is_err());
}
