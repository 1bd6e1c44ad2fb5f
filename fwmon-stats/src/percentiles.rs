//! Percentile Computation
//!
//! Nearest-rank percentiles over raw readings. The index is
//! `floor(N * fraction)`, clamped to `N - 1`, into the ascending sort.
//! No interpolation is done, so the result is always an observed reading and
//! small samples keep their outliers out of p95 unless they dominate the tail.

/// Fraction used for the latency tail figure
pub const P95: f64 = 0.95;

/// Compute a nearest-rank percentile from unsorted samples.
///
/// `fraction` is in `[0, 1]` (0.95 for p95); values outside that range are
/// clamped. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// # use fwmon_stats::nearest_rank;
/// let samples = vec![100.0, 100.0, 100.0, 5000.0];
/// // floor(4 * 0.95) = 3 -> the outlier
/// assert_eq!(nearest_rank(&samples, 0.95), Some(5000.0));
/// assert_eq!(nearest_rank(&[], 0.95), None);
/// ```
pub fn nearest_rank(samples: &[f64], fraction: f64) -> Option<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    nearest_rank_sorted(&sorted, fraction)
}

/// Same as [`nearest_rank`] for samples already sorted ascending.
pub fn nearest_rank_sorted(sorted: &[f64], fraction: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let index = ((n as f64 * fraction).floor() as usize).min(n - 1);

    Some(sorted[index])
}
