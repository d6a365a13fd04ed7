//! Coherent noise fields for procedural backgrounds
//!
//! The coherent-noise primitive sits behind the two-function [`NoiseSource`]
//! seam; any deterministic, continuous, band-limited implementation can be
//! substituted. The default is OpenSimplex as shipped by the `noise` crate;
//! downstream pixel-exact reproducibility is tied to that exact algorithm
//! and version.

use ndarray::Array2;
use noise::{NoiseFn, OpenSimplex};

use crate::io::error::{Result, invalid_argument};

/// Two-function coherent-noise seam
///
/// Implementations must return the same value for the same seed and
/// coordinates, with output roughly in [-1, 1].
pub trait NoiseSource {
    /// Sample 2D noise at (x, y)
    fn noise2(&self, x: f64, y: f64) -> f64;
    /// Sample 4D noise at (x, y, z, w)
    fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

/// OpenSimplex-backed default noise source
pub struct SimplexSource {
    inner: OpenSimplex,
}

impl SimplexSource {
    /// Create a source from an integer seed
    pub fn new(seed: u32) -> Self {
        Self {
            inner: OpenSimplex::new(seed),
        }
    }
}

impl NoiseSource for SimplexSource {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y])
    }

    fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.inner.get([x, y, z, w])
    }
}

/// A per-pixel scalar field normalized to [0, 1]
#[derive(Debug, Clone)]
pub struct NoiseField {
    values: Array2<f64>,
}

impl NoiseField {
    /// Field width in samples
    pub fn width(&self) -> u32 {
        self.values.ncols() as u32
    }

    /// Field height in samples
    pub fn height(&self) -> u32 {
        self.values.nrows() as u32
    }

    /// Sample the field at (x, y), or 0.0 out of bounds
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(0.0)
    }

    /// Smallest value in the field
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the field
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

fn validate_extent(width: u32, height: u32, scale: f64) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_argument(
            "dimensions",
            &format!("{width}x{height}"),
            &"field dimensions must be positive",
        ));
    }
    if scale <= 0.0 {
        return Err(invalid_argument("scale", &scale, &"must be positive"));
    }
    Ok(())
}

/// Min-max normalize a raw field into [0, 1]
///
/// A zero-variance field carries no structure to stretch, so it becomes the
/// constant 0.5 field instead of dividing by zero.
fn normalize(mut values: Array2<f64>) -> Array2<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > min {
        let span = max - min;
        values.mapv_inplace(|v| (v - min) / span);
    } else {
        values.fill(0.5);
    }
    values
}

/// Generate a multi-octave 2D noise field
///
/// Octave `i` samples `noise2(x·scale·2^i, y·scale·2^i)` weighted by
/// `0.5^i`; the summed field is min-max normalized to [0, 1].
///
/// # Errors
///
/// Returns `InvalidArgument` for zero dimensions, non-positive scale, or
/// zero octaves
pub fn generate_field(
    width: u32,
    height: u32,
    scale: f64,
    seed: u32,
    octaves: u32,
) -> Result<NoiseField> {
    generate_field_with(&SimplexSource::new(seed), width, height, scale, octaves)
}

/// [`generate_field`] over a caller-supplied noise source
///
/// # Errors
///
/// Returns `InvalidArgument` for zero dimensions, non-positive scale, or
/// zero octaves
pub fn generate_field_with(
    source: &dyn NoiseSource,
    width: u32,
    height: u32,
    scale: f64,
    octaves: u32,
) -> Result<NoiseField> {
    validate_extent(width, height, scale)?;
    if octaves == 0 {
        return Err(invalid_argument("octaves", &octaves, &"must be positive"));
    }

    let raw = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let mut sum = 0.0;
        for octave in 0..octaves {
            let freq = scale * f64::from(1u32 << octave.min(31));
            let amp = 0.5f64.powi(octave as i32);
            sum += source.noise2(x as f64 * freq, y as f64 * freq) * amp;
        }
        sum
    });

    Ok(NoiseField {
        values: normalize(raw),
    })
}

/// Generate a seamlessly tileable 2D noise field
///
/// Each pixel maps onto a torus embedded in 4D: angles `s = 2πx/width` and
/// `t = 2πy/height` at radius `1/(2π·scale)`, sampled through `noise4`.
/// Opposite edges sample nearly coincident torus points, so the field tiles
/// with only the small residual error of discrete sampling.
///
/// # Errors
///
/// Returns `InvalidArgument` for zero dimensions or non-positive scale
pub fn generate_tileable_field(width: u32, height: u32, scale: f64, seed: u32) -> Result<NoiseField> {
    generate_tileable_field_with(&SimplexSource::new(seed), width, height, scale)
}

/// [`generate_tileable_field`] over a caller-supplied noise source
///
/// # Errors
///
/// Returns `InvalidArgument` for zero dimensions or non-positive scale
pub fn generate_tileable_field_with(
    source: &dyn NoiseSource,
    width: u32,
    height: u32,
    scale: f64,
) -> Result<NoiseField> {
    validate_extent(width, height, scale)?;

    let tau = std::f64::consts::TAU;
    let radius = 1.0 / (tau * scale);

    let raw = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        let s = x as f64 / f64::from(width) * tau;
        let t = y as f64 / f64::from(height) * tau;
        source.noise4(
            radius * s.cos(),
            radius * s.sin(),
            radius * t.cos(),
            radius * t.sin(),
        )
    });

    Ok(NoiseField {
        values: normalize(raw),
    })
}
