//! Volume filters: binary dilation and separable gaussian smoothing.

// Kernel radii and grid extents are small
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use crate::grid::ScalarGrid;

/// Gaussian kernels are truncated at this many standard deviations.
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Grow a binary mask by one voxel along the six axis directions.
///
/// A voxel is set when it or one of its face neighbors is set (value above
/// one half). Voxels outside the grid count as unset.
///
/// ```
/// use mesh_volume::{binary_dilation, ScalarGrid};
///
/// let mut mask = ScalarGrid::new((3, 3, 3));
/// mask.set(1, 1, 1, 1.0);
/// let grown = binary_dilation(&mask);
/// assert_eq!(grown.as_slice().iter().filter(|&&v| v == 1.0).count(), 7);
/// ```
#[must_use]
pub fn binary_dilation(mask: &ScalarGrid) -> ScalarGrid {
    let (ni, nj, nk) = mask.dimensions();
    let set = |i: usize, j: usize, k: usize| mask.get(i, j, k) > 0.5;

    ScalarGrid::from_fn((ni, nj, nk), |i, j, k| {
        let hit = set(i, j, k)
            || (i > 0 && set(i - 1, j, k))
            || set(i + 1, j, k)
            || (j > 0 && set(i, j - 1, k))
            || set(i, j + 1, k)
            || (k > 0 && set(i, j, k - 1))
            || set(i, j, k + 1);
        if hit { 1.0 } else { 0.0 }
    })
}

/// Isotropic gaussian filter with standard deviation `sigma` voxels.
///
/// Applied as three 1D passes. Each kernel is truncated at
/// [`GAUSSIAN_TRUNCATE`] standard deviations and normalized to sum to one.
/// Borders reflect about the edge of the outermost voxel
/// (`d c b a | a b c d | d c b a`). A `sigma` of zero (or less) returns a
/// copy of the input.
#[must_use]
pub fn gaussian_filter(grid: &ScalarGrid, sigma: f64) -> ScalarGrid {
    if sigma <= 0.0 || grid.is_empty() {
        return grid.clone();
    }

    let kernel = gaussian_kernel(sigma);
    let (ni, nj, nk) = grid.dimensions();

    let mut out = grid.clone();
    for (len, stride) in [(ni, 1), (nj, ni), (nk, ni * nj)] {
        out = convolve_axis(&out, &kernel, len, stride);
    }
    out
}

/// Normalized 1D gaussian weights for offsets `-r..=r`.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (GAUSSIAN_TRUNCATE * sigma + 0.5) as i64;
    let weights: Vec<f64> = (-radius..=radius)
        .map(|x| (-0.5 * (x * x) as f64 / (sigma * sigma)).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Convolve along the axis whose coordinate has extent `len` and flat stride
/// `stride`.
fn convolve_axis(grid: &ScalarGrid, kernel: &[f64], len: usize, stride: usize) -> ScalarGrid {
    let radius = (kernel.len() / 2) as i64;
    let src = grid.as_slice();
    let mut out = grid.clone();

    for (idx, value) in out.as_mut_slice().iter_mut().enumerate() {
        let coord = (idx / stride) % len;
        let base = idx - coord * stride;
        *value = kernel
            .iter()
            .enumerate()
            .map(|(t, w)| {
                let sample = reflect(coord as i64 + t as i64 - radius, len);
                w * src[base + sample * stride]
            })
            .sum();
    }
    out
}

/// Map an out-of-range coordinate back into `0..len` by half-sample
/// symmetric reflection.
fn reflect(coord: i64, len: usize) -> usize {
    let n = len as i64;
    let m = coord.rem_euclid(2 * n);
    (if m >= n { 2 * n - 1 - m } else { m }) as usize
}
