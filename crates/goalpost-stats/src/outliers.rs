//! Outlier trimming against the 99th percentile.

use goalpost_core::constants::{OUTLIER_TRIM_PERCENTILE, SMALL_SAMPLE_THRESHOLD};

use crate::percentile::percentile;

/// Remove values strictly greater than the 99th percentile of the input.
///
/// Disabled filters and samples below `SMALL_SAMPLE_THRESHOLD` pass
/// through unchanged.
pub fn remove_outliers(values: &[f64], enabled: bool) -> Vec<f64> {
    if !enabled || values.len() < SMALL_SAMPLE_THRESHOLD {
        return values.to_vec();
    }
    let cutoff = percentile(values, OUTLIER_TRIM_PERCENTILE);
    values.iter().copied().filter(|v| *v <= cutoff).collect()
}
