//! The goal-computation orchestrator: binds the statistics library to the
//! analytics source and the persistence sink.

use regex::Regex;

use goalpost_core::errors::{ConfigError, GoalpostResult};
use goalpost_core::models::{GoalRecord, RecomputeConfig};
use goalpost_stats::calculate_view_goals;

use crate::state::AppState;

/// Run one full computation: fetch → filter → compute → persist.
///
/// Either the record is fully computed and persisted, or an error is
/// returned with nothing written. Nothing is retried.
pub async fn recompute_goals(
    state: &AppState,
    config: &RecomputeConfig,
) -> GoalpostResult<GoalRecord> {
    let pattern =
        Regex::new(&config.filter_regex).map_err(|e| ConfigError::InvalidFilterPattern {
            pattern: config.filter_regex.clone(),
            reason: e.to_string(),
        })?;

    let rows = state.source.fetch_page_views(config.days).await?;
    let matched: Vec<f64> = rows
        .iter()
        .filter(|row| pattern.is_match(&row.path))
        .map(|row| row.views as f64)
        .collect();

    tracing::info!(
        source = state.source.name(),
        scope = %config.scope,
        days = config.days,
        fetched = rows.len(),
        matched = matched.len(),
        "recompute: fetched analytics rows"
    );

    let goals = calculate_view_goals(&matched, config.outlier_filter);
    let mut record = GoalRecord::from_run(config, &goals);
    let id = state.storage.insert_goal_record(&record)?;
    record.id = Some(id);

    tracing::info!(
        scope = %record.scope,
        run_id = %record.run_id,
        base_goal = record.base_goal,
        stretch_goal = record.stretch_goal,
        sample_count = record.sample_count,
        "recompute: goals persisted"
    );

    Ok(record)
}

/// Most recent persisted record for a scope. `None` means "no goals
/// computed yet", which callers must distinguish from a zero-valued
/// record.
pub fn latest_goals(state: &AppState, scope: &str) -> GoalpostResult<Option<GoalRecord>> {
    state.storage.latest_goal_record(scope)
}

/// Recent records for a scope, newest first.
pub fn goal_history(
    state: &AppState,
    scope: &str,
    limit: usize,
) -> GoalpostResult<Vec<GoalRecord>> {
    state.storage.goal_history(scope, limit)
}
