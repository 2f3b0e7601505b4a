//! Deterministic sample arrays.
//!
//! - [`random_points`]: seeded uniform samples, one point per row.
//! - [`random_pairs`]: seeded `(low, high)` pairs with `low <= high`.
//! - [`center_dip_grid`]: all-ones square grid with one interior dip.

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `rows x cols` points drawn uniformly from `[low, high)`.
///
/// Same seed, same array.
pub fn random_points(rows: usize, cols: usize, low: f64, high: f64, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(low..high))
}

/// `n` intervals with edges in `[-magnitude, magnitude)`, each ordered
/// so that `low <= high`.
pub fn random_pairs(n: usize, magnitude: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let a: f64 = rng.random_range(-magnitude..magnitude);
            let b: f64 = rng.random_range(-magnitude..magnitude);
            (a.min(b), a.max(b))
        })
        .collect()
}

/// A `size x size` grid of ones whose interior cells are set to `dip`.
///
/// With `size = 3` only the centre cell changes, which gives every
/// column a different minimum profile.
pub fn center_dip_grid(size: usize, dip: f64) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(r, c)| {
        let interior = r > 0 && c > 0 && r + 1 < size && c + 1 < size;
        if interior {
            dip
        } else {
            1.0
        }
    })
}
