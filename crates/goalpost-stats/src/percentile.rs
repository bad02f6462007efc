//! Percentile estimation with linear interpolation between ranks.

/// Value at fractional rank `p` (0..=1) of `values`, using linear
/// interpolation between the two nearest ranks of the ascending-sorted
/// input.
///
/// Empty input yields `0.0`. A single element is returned for every `p`.
/// `p = 0.0` is the minimum and `p = 1.0` the maximum; `p` outside
/// [0, 1] is clamped.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

/// Median: the 50th percentile.
pub fn median(values: &[f64]) -> f64 {
    percentile(values, 0.5)
}

/// 90th percentile.
pub fn p90(values: &[f64]) -> f64 {
    percentile(values, 0.9)
}

/// 99th percentile.
pub fn p99(values: &[f64]) -> f64 {
    percentile(values, 0.99)
}
