//! Material region extraction via k-means clustering
//!
//! Opaque pixels are clustered over joint (position, color) feature vectors,
//! both halves normalized to [0, 1] so spatial proximity and color
//! similarity carry comparable weight. Centroid seeding uses a fixed
//! internal seed: template segmentation must reproduce exactly regardless of
//! which generation seed the caller is working with.

use ndarray::Array2;

use crate::color::Rgb;
use crate::io::configuration::REGION_KMEANS_SEED;
use crate::io::error::{Result, invalid_argument};
use crate::raster::PixelBuffer;
use crate::synthesis::SeededRng;

/// A segmented material region
#[derive(Debug, Clone)]
pub struct Region {
    /// Auto-assigned region name (`region_0`, `region_1`, ...)
    pub label: String,
    /// Member pixel coordinates in original integer pixel space
    pub pixels: Vec<[u32; 2]>,
    /// Mean RGB color of the member pixels
    pub dominant_color: Rgb,
}

/// Number of entries in each clustering feature vector
const FEATURES: usize = 5;

/// Segment a buffer's opaque pixels into material regions
///
/// With `num_regions == 1` the entire opaque set becomes a single region
/// with its mean color and no clustering runs. Otherwise k-means iterates up
/// to `max_iterations` times: nearest-centroid assignment (squared Euclidean
/// in 5D feature space, first minimum wins), mean recomputation (empty
/// clusters keep their previous centroid), early stop once assignments are
/// stable. Empty clusters are dropped, so fewer than `num_regions` regions
/// may come back. A buffer with no opaque pixels yields no regions.
///
/// # Errors
///
/// Returns `InvalidArgument` when `num_regions` is zero
pub fn extract_regions(
    buffer: &PixelBuffer,
    num_regions: usize,
    max_iterations: usize,
) -> Result<Vec<Region>> {
    if num_regions == 0 {
        return Err(invalid_argument(
            "num_regions",
            &num_regions,
            &"must be positive",
        ));
    }

    let (features, coords, colors) = collect_features(buffer);
    if coords.is_empty() {
        return Ok(Vec::new());
    }

    if num_regions == 1 {
        return Ok(vec![build_region(0, &colors, &coords, None)]);
    }

    let k = num_regions.min(coords.len());
    let mut centroids = seed_centroids(&features, k);
    let mut labels = vec![0usize; coords.len()];

    for _ in 0..max_iterations {
        let new_labels: Vec<usize> = (0..coords.len())
            .map(|point| nearest_centroid(&features, point, &centroids))
            .collect();

        if new_labels == labels {
            break;
        }
        labels = new_labels;
        recompute_centroids(&features, &labels, &mut centroids);
    }

    let mut regions = Vec::new();
    for cluster in 0..k {
        let members: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == cluster)
            .map(|(point, _)| point)
            .collect();
        if members.is_empty() {
            continue;
        }
        regions.push(build_region(cluster, &colors, &coords, Some(&members)));
    }

    Ok(regions)
}

/// Gather feature rows, pixel coordinates, and raw colors for opaque pixels
fn collect_features(buffer: &PixelBuffer) -> (Array2<f64>, Vec<[u32; 2]>, Vec<Rgb>) {
    let w = buffer.width();
    let h = buffer.height();
    let x_span = f64::from(w.saturating_sub(1).max(1));
    let y_span = f64::from(h.saturating_sub(1).max(1));

    let mut rows = Vec::new();
    let mut coords = Vec::new();
    let mut colors = Vec::new();
    for (i, pixel) in buffer.pixels().enumerate() {
        if pixel[3] == 0 {
            continue;
        }
        let x = i as u32 % w;
        let y = i as u32 / w;
        rows.extend_from_slice(&[
            f64::from(x) / x_span,
            f64::from(y) / y_span,
            f64::from(pixel[0]) / 255.0,
            f64::from(pixel[1]) / 255.0,
            f64::from(pixel[2]) / 255.0,
        ]);
        coords.push([x, y]);
        colors.push([pixel[0], pixel[1], pixel[2]]);
    }

    let features = Array2::from_shape_vec((coords.len(), FEATURES), rows)
        .unwrap_or_else(|_| Array2::zeros((0, FEATURES)));
    (features, coords, colors)
}

/// Pick `k` distinct feature rows as the initial centroids
///
/// Partial Fisher-Yates over the point indices, driven by the fixed
/// clustering seed.
fn seed_centroids(features: &Array2<f64>, k: usize) -> Array2<f64> {
    let n = features.nrows();
    let mut rng = SeededRng::new(REGION_KMEANS_SEED);
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.int_range(i as i64, n as i64 - 1) as usize;
        indices.swap(i, j);
    }

    Array2::from_shape_fn((k, FEATURES), |(row, col)| {
        indices
            .get(row)
            .and_then(|&point| features.get([point, col]))
            .copied()
            .unwrap_or(0.0)
    })
}

/// Index of the centroid nearest to a feature row, first minimum wins
fn nearest_centroid(features: &Array2<f64>, point: usize, centroids: &Array2<f64>) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for cluster in 0..centroids.nrows() {
        let mut distance = 0.0;
        for col in 0..FEATURES {
            let a = features.get([point, col]).copied().unwrap_or(0.0);
            let b = centroids.get([cluster, col]).copied().unwrap_or(0.0);
            let d = a - b;
            distance += d * d;
        }
        if distance < best_distance {
            best_distance = distance;
            best = cluster;
        }
    }
    best
}

/// Replace each centroid with the mean of its assigned points
///
/// Clusters with no assigned points keep their previous centroid.
fn recompute_centroids(features: &Array2<f64>, labels: &[usize], centroids: &mut Array2<f64>) {
    let k = centroids.nrows();
    let mut sums = vec![[0.0f64; FEATURES]; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in labels.iter().enumerate() {
        if let (Some(sum), Some(count)) = (sums.get_mut(label), counts.get_mut(label)) {
            for (col, slot) in sum.iter_mut().enumerate() {
                *slot += features.get([point, col]).copied().unwrap_or(0.0);
            }
            *count += 1;
        }
    }

    for cluster in 0..k {
        let count = counts.get(cluster).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        if let Some(sum) = sums.get(cluster) {
            for (col, &total) in sum.iter().enumerate() {
                if let Some(cell) = centroids.get_mut([cluster, col]) {
                    *cell = total / count as f64;
                }
            }
        }
    }
}

/// Assemble a region from member indices (or every point when `None`)
///
/// The mean color sums the raw channel bytes rather than the normalized
/// features, so a uniformly colored region reports its color exactly.
fn build_region(
    cluster: usize,
    colors: &[Rgb],
    coords: &[[u32; 2]],
    members: Option<&[usize]>,
) -> Region {
    let all: Vec<usize>;
    let member_indices = match members {
        Some(indices) => indices,
        None => {
            all = (0..coords.len()).collect();
            &all
        }
    };

    let mut pixels = Vec::with_capacity(member_indices.len());
    let mut sums = [0.0f64; 3];
    for &point in member_indices {
        if let Some(&coord) = coords.get(point) {
            pixels.push(coord);
        }
        if let Some(color) = colors.get(point) {
            for (slot, &channel) in sums.iter_mut().zip(color.iter()) {
                *slot += f64::from(channel);
            }
        }
    }

    let count = member_indices.len().max(1) as f64;
    let dominant_color = [
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    ];

    Region {
        label: format!("region_{cluster}"),
        pixels,
        dominant_color,
    }
}
