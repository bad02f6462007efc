use serde::{Deserialize, Serialize};

use crate::models::RecomputeConfig;

/// Defaults applied to recompute requests that omit fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsConfig {
    pub scope: String,
    pub days: u32,
    pub filter_pattern: String,
    pub exclude_bot_traffic: bool,
    pub outlier_filter: bool,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        let base = RecomputeConfig::default();
        Self {
            scope: base.scope,
            days: base.days,
            filter_pattern: base.filter_regex,
            exclude_bot_traffic: base.exclude_bot_traffic,
            outlier_filter: base.outlier_filter,
        }
    }
}

impl GoalsConfig {
    /// The run configuration these defaults describe.
    pub fn as_recompute_config(&self) -> RecomputeConfig {
        RecomputeConfig {
            scope: self.scope.clone(),
            days: self.days,
            filter_regex: self.filter_pattern.clone(),
            exclude_bot_traffic: self.exclude_bot_traffic,
            outlier_filter: self.outlier_filter,
        }
    }
}
