use serde::{Deserialize, Serialize};

/// Computed view-count targets over one sample of per-path view counts.
///
/// Goal fields are always rounded up (ceiling), never down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewGoals {
    /// Ceiling of the median view count (mean for small samples).
    pub base_goal: i64,
    /// Ceiling of the 90th percentile (80% of max for small samples).
    pub stretch_goal: i64,
    /// Arithmetic mean of the (possibly outlier-filtered) sample.
    pub mean: f64,
    /// Median of the (possibly outlier-filtered) sample.
    pub median: f64,
    /// 90th percentile of the (possibly outlier-filtered) sample.
    pub p90: f64,
    /// Ceiling of the maximum of the unfiltered sample. Never taken from
    /// the filtered set, even when outlier trimming is enabled.
    pub max: f64,
    /// Number of sampled items, counted before outlier filtering.
    pub sample_count: usize,
}

impl ViewGoals {
    /// A zero-valued result (empty sample). Distinct from "no goals
    /// computed yet", which is the absence of any persisted record.
    pub fn zero() -> Self {
        Self {
            base_goal: 0,
            stretch_goal: 0,
            mean: 0.0,
            median: 0.0,
            p90: 0.0,
            max: 0.0,
            sample_count: 0,
        }
    }
}
