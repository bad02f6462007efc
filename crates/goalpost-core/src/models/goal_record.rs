use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{RecomputeConfig, ViewGoals};

/// One persisted goal computation run.
///
/// Immutable once written; the "latest" record for a scope is the one with
/// the greatest `computed_at`. Concurrent runs are not coordinated, so a
/// slower run that persists later can win that read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Row id assigned by storage. `None` until the record is inserted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique id for this computation run.
    pub run_id: String,
    /// Scope label (e.g. "column").
    pub scope: String,
    pub base_goal: i64,
    pub stretch_goal: i64,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
    pub sample_count: i64,
    /// Lookback window length in days.
    pub days: i64,
    /// Path-filter pattern the run used.
    pub filter_pattern: String,
    pub exclude_bot_traffic: bool,
    pub outlier_filter: bool,
    /// When the computation ran.
    pub computed_at: DateTime<Utc>,
}

impl GoalRecord {
    /// Build an unpersisted record from a run configuration and its
    /// computed goals, stamped with a fresh run id and the current time.
    pub fn from_run(config: &RecomputeConfig, goals: &ViewGoals) -> Self {
        Self {
            id: None,
            run_id: uuid::Uuid::new_v4().to_string(),
            scope: config.scope.clone(),
            base_goal: goals.base_goal,
            stretch_goal: goals.stretch_goal,
            mean: goals.mean,
            median: goals.median,
            p90: goals.p90,
            max: goals.max,
            sample_count: goals.sample_count as i64,
            days: i64::from(config.days),
            filter_pattern: config.filter_regex.clone(),
            exclude_bot_traffic: config.exclude_bot_traffic,
            outlier_filter: config.outlier_filter,
            computed_at: Utc::now(),
        }
    }
}
