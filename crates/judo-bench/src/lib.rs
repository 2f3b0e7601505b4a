//! Benchmark workloads for judo.
//!
//! - [`reference_workload`]: 10K points in 32 dimensions against
//!   bounds fitted to a separate sample
//! - [`stress_workload`]: the same at 100K points

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use judo_bounds::Bounds;
use judo_test_utils::random_points;
use ndarray::Array2;

/// Bounds and a batch of points to run them against.
pub struct Workload {
    /// Bounds fitted to a calibration sample with a 10% margin.
    pub bounds: Bounds,
    /// Points to clip, wrap and test; roughly a third fall outside.
    pub points: Array2<f64>,
}

/// Build a workload of `rows` points in `dims` dimensions.
///
/// # Panics
///
/// Panics if `rows` or `dims` is zero.
pub fn workload(rows: usize, dims: usize, seed: u64) -> Workload {
    let calibration = random_points(256, dims, -1.0, 1.0, seed);
    let bounds = Bounds::from_array(&calibration, 1.1).expect("calibration sample is non-empty");
    let points = random_points(rows, dims, -1.5, 1.5, seed.wrapping_add(1));
    Workload { bounds, points }
}

/// 10K points in 32 dimensions.
pub fn reference_workload(seed: u64) -> Workload {
    workload(10_000, 32, seed)
}

/// 100K points in 32 dimensions.
pub fn stress_workload(seed: u64) -> Workload {
    workload(100_000, 32, seed)
}
