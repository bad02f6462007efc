use serde::{Deserialize, Serialize};

use crate::constants;

/// Full input configuration for one goal computation run.
///
/// Persisted alongside the computed outputs so every run is reproducible
/// and auditable from its stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecomputeConfig {
    /// Scope label for the produced record.
    pub scope: String,
    /// Lookback window in days.
    pub days: u32,
    /// Regex matched against page paths; only matching paths count.
    pub filter_regex: String,
    /// Whether bot traffic was excluded from the source data.
    pub exclude_bot_traffic: bool,
    /// Whether outlier trimming is applied before aggregation.
    pub outlier_filter: bool,
}

impl Default for RecomputeConfig {
    fn default() -> Self {
        Self {
            scope: constants::DEFAULT_SCOPE.to_string(),
            days: constants::DEFAULT_LOOKBACK_DAYS,
            filter_regex: constants::DEFAULT_PATH_PATTERN.to_string(),
            exclude_bot_traffic: true,
            outlier_filter: true,
        }
    }
}
