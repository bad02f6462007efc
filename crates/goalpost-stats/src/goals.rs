//! View-goal derivation over one sample of per-path view counts.

use goalpost_core::constants::{SMALL_SAMPLE_STRETCH_RATIO, SMALL_SAMPLE_THRESHOLD};
use goalpost_core::models::ViewGoals;

use crate::describe::mean;
use crate::outliers::remove_outliers;
use crate::percentile::{median, p90};

/// Derive view goals from raw per-path view counts.
///
/// The maximum and the sample count are taken from the unfiltered input
/// before any trimming: the outlier rule must not suppress the reported
/// maximum, and the count always reflects the original population size.
///
/// Samples smaller than `SMALL_SAMPLE_THRESHOLD` use the fallback
/// heuristic: the base goal comes from the mean rather than the median,
/// and the stretch goal from 80% of the maximum rather than the p90.
///
/// Goal fields are always rounded up, never down.
pub fn calculate_view_goals(views: &[f64], outlier_filter: bool) -> ViewGoals {
    let sample_count = views.len();
    let original_max = views.iter().copied().fold(0.0_f64, f64::max);

    let filtered = remove_outliers(views, outlier_filter);

    let filtered_mean = mean(&filtered);
    let filtered_median = median(&filtered);
    let filtered_p90 = p90(&filtered);

    let (base_goal, stretch_goal) = if sample_count < SMALL_SAMPLE_THRESHOLD {
        (
            filtered_mean.ceil() as i64,
            (original_max * SMALL_SAMPLE_STRETCH_RATIO).ceil() as i64,
        )
    } else {
        (filtered_median.ceil() as i64, filtered_p90.ceil() as i64)
    };

    ViewGoals {
        base_goal,
        stretch_goal,
        mean: filtered_mean,
        median: filtered_median,
        p90: filtered_p90,
        max: original_max.ceil(),
        sample_count,
    }
}
