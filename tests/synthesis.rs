//! Validates seeded RNG reproducibility, Bayer dithering, and noise fields

use std::collections::BTreeSet;

use pixelsmith::raster::PixelBuffer;
use pixelsmith::synthesis::{
    SeededRng, apply_ordered_dither, bayer_matrix, generate_field, generate_tileable_field,
};

#[test]
fn test_rng_identical_seeds_identical_sequences() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(42);

    let seq_a: Vec<f64> = (0..100).map(|_| a.uniform()).collect();
    let seq_b: Vec<f64> = (0..100).map(|_| b.uniform()).collect();
    assert_eq!(seq_a, seq_b);

    let mut a = SeededRng::new(7);
    let mut b = SeededRng::new(7);
    let ints_a: Vec<i64> = (0..100).map(|_| a.int_range(1, 100)).collect();
    let ints_b: Vec<i64> = (0..100).map(|_| b.int_range(1, 100)).collect();
    assert_eq!(ints_a, ints_b);
}

#[test]
fn test_rng_different_seeds_differ() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(99);

    let seq_a: Vec<f64> = (0..10).map(|_| a.uniform()).collect();
    let seq_b: Vec<f64> = (0..10).map(|_| b.uniform()).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_uniform_stays_in_unit_interval() {
    let mut rng = SeededRng::new(123);
    for _ in 0..1000 {
        let value = rng.uniform();
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn test_int_range_inclusive_and_order_tolerant() {
    let mut rng = SeededRng::new(42);
    let mut seen_low = false;
    let mut seen_high = false;
    for _ in 0..500 {
        let value = rng.int_range(10, 20);
        assert!((10..=20).contains(&value));
        seen_low |= value == 10;
        seen_high |= value == 20;
    }
    assert!(seen_low && seen_high, "inclusive bounds never hit");

    for _ in 0..100 {
        let value = rng.int_range(20, 10);
        assert!((10..=20).contains(&value));
    }
}

#[test]
fn test_choice_picks_members_and_rejects_empty() {
    let mut rng = SeededRng::new(42);
    let items = ["a", "b", "c"];
    for _ in 0..50 {
        let picked = rng.choice(&items).unwrap();
        assert!(items.contains(picked));
    }

    let empty: [u8; 0] = [];
    assert!(rng.choice(&empty).is_err());
}

#[test]
fn test_shuffle_is_deterministic_permutation() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(42);

    let mut list_a: Vec<u32> = (0..50).collect();
    let mut list_b: Vec<u32> = (0..50).collect();
    a.shuffle(&mut list_a);
    b.shuffle(&mut list_b);

    assert_eq!(list_a, list_b);
    assert_ne!(list_a, (0..50).collect::<Vec<u32>>());

    let mut sorted = list_a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
}

#[test]
fn test_jitter_bounds() {
    let mut rng = SeededRng::new(42);
    for _ in 0..500 {
        let value = rng.jitter(100.0, 0.1);
        assert!((90.0..=110.0).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_bayer_matrices_distinct_normalized() {
    for size in [2usize, 4, 8] {
        let matrix = bayer_matrix(size).unwrap();
        assert_eq!(matrix.dim(), (size, size));

        let mut seen = BTreeSet::new();
        for &value in &matrix {
            assert!((-0.5..0.5).contains(&value), "threshold {value} escapes range");
            seen.insert(value.to_bits());
        }
        assert_eq!(seen.len(), size * size, "thresholds not distinct");
    }
}

#[test]
fn test_bayer_known_values() {
    let matrix = bayer_matrix(2).unwrap();
    assert_eq!(matrix.get([0, 0]).copied(), Some(-0.5));
    assert_eq!(matrix.get([0, 1]).copied(), Some(0.0));
    assert_eq!(matrix.get([1, 0]).copied(), Some(0.25));
    assert_eq!(matrix.get([1, 1]).copied(), Some(-0.25));

    // Recursive construction: rank 8 lands at (0, 1) in the 4x4 matrix
    let matrix = bayer_matrix(4).unwrap();
    assert_eq!(matrix.get([0, 1]).copied(), Some(0.0));
}

#[test]
fn test_bayer_rejects_unsupported_sizes() {
    assert!(bayer_matrix(0).is_err());
    assert!(bayer_matrix(3).is_err());
    assert!(bayer_matrix(16).is_err());
}

#[test]
fn test_dither_preserves_alpha_and_transparent_rgb() {
    let mut buffer = PixelBuffer::new(8, 8).unwrap();
    buffer.set_pixel(0, 0, [128, 128, 128, 255]);
    buffer.set_pixel(1, 0, [128, 128, 128, 40]);
    buffer.set_pixel(2, 0, [99, 88, 77, 0]);

    let result = apply_ordered_dither(&buffer, 4, 16).unwrap();

    for (before, after) in buffer.pixels().zip(result.pixels()) {
        assert_eq!(before[3], after[3], "alpha changed");
        if before[3] == 0 {
            assert_eq!(before, after, "transparent pixel changed");
        }
    }
}

#[test]
fn test_dither_deterministic_and_zero_spread_identity() {
    let buffer = PixelBuffer::filled(16, 16, [100, 150, 200, 255]).unwrap();

    let once = apply_ordered_dither(&buffer, 8, 12).unwrap();
    let twice = apply_ordered_dither(&buffer, 8, 12).unwrap();
    assert_eq!(once, twice);
    assert_ne!(once, buffer);

    let identity = apply_ordered_dither(&buffer, 4, 0).unwrap();
    assert_eq!(identity, buffer);
}

#[test]
fn test_dither_rejects_unsupported_matrix() {
    let buffer = PixelBuffer::new(4, 4).unwrap();
    assert!(apply_ordered_dither(&buffer, 5, 8).is_err());
}

#[test]
fn test_noise_field_shape_and_range() {
    let field = generate_field(100, 80, 0.05, 42, 3).unwrap();
    assert_eq!(field.width(), 100);
    assert_eq!(field.height(), 80);
    assert!(field.min() >= 0.0);
    assert!(field.max() <= 1.0);
    // Real noise carries variation
    assert!(field.max() - field.min() > 0.5);
}

#[test]
fn test_noise_field_deterministic_per_seed() {
    let a = generate_field(50, 50, 0.1, 42, 2).unwrap();
    let b = generate_field(50, 50, 0.1, 42, 2).unwrap();
    let c = generate_field(50, 50, 0.1, 43, 2).unwrap();

    let mut any_differs = false;
    for y in 0..50 {
        for x in 0..50 {
            assert!((a.get(x, y) - b.get(x, y)).abs() < f64::EPSILON);
            any_differs |= (a.get(x, y) - c.get(x, y)).abs() > f64::EPSILON;
        }
    }
    assert!(any_differs, "different seeds produced identical fields");
}

#[test]
fn test_noise_field_rejects_bad_parameters() {
    assert!(generate_field(0, 10, 0.05, 1, 1).is_err());
    assert!(generate_field(10, 0, 0.05, 1, 1).is_err());
    assert!(generate_field(10, 10, 0.0, 1, 1).is_err());
    assert!(generate_field(10, 10, 0.05, 1, 0).is_err());
    assert!(generate_tileable_field(10, 10, -0.5, 1).is_err());
}

#[test]
fn test_tileable_field_seam_error_bounded() {
    let field = generate_tileable_field(64, 64, 0.05, 42).unwrap();
    assert!(field.min() >= 0.0);
    assert!(field.max() <= 1.0);

    let mut column_diff = 0.0;
    let mut row_diff = 0.0;
    for i in 0..64 {
        column_diff += (field.get(0, i) - field.get(63, i)).abs();
        row_diff += (field.get(i, 0) - field.get(i, 63)).abs();
    }
    column_diff /= 64.0;
    row_diff /= 64.0;

    assert!(column_diff < 0.15, "column seam error {column_diff}");
    assert!(row_diff < 0.15, "row seam error {row_diff}");
}

#[test]
fn test_tileable_field_deterministic() {
    let a = generate_tileable_field(32, 32, 0.1, 99).unwrap();
    let b = generate_tileable_field(32, 32, 0.1, 99).unwrap();
    for y in 0..32 {
        for x in 0..32 {
            assert!((a.get(x, y) - b.get(x, y)).abs() < f64::EPSILON);
        }
    }
}
