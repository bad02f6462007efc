use crate::errors::GoalpostResult;
use crate::models::GoalRecord;

/// Insert-only persistence for goal records. No update or delete path
/// exists; history accumulates indefinitely.
pub trait IGoalStorage: Send + Sync {
    /// Persist a new record, returning the assigned row id.
    fn insert_goal_record(&self, record: &GoalRecord) -> GoalpostResult<i64>;

    /// The most recently computed record for a scope, by `computed_at`
    /// descending. `None` when no run has ever completed.
    fn latest_goal_record(&self, scope: &str) -> GoalpostResult<Option<GoalRecord>>;

    /// Recent records for a scope, newest first.
    fn goal_history(&self, scope: &str, limit: usize) -> GoalpostResult<Vec<GoalRecord>>;
}
