//! v001: goal_records.

use rusqlite::Connection;

use goalpost_core::errors::GoalpostResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> GoalpostResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS goal_records (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            run_id              TEXT NOT NULL,
            scope               TEXT NOT NULL,
            base_goal           INTEGER NOT NULL,
            stretch_goal        INTEGER NOT NULL,
            mean                REAL NOT NULL DEFAULT 0,
            median              REAL NOT NULL DEFAULT 0,
            p90                 REAL NOT NULL DEFAULT 0,
            max_views           REAL NOT NULL DEFAULT 0,
            sample_count        INTEGER NOT NULL DEFAULT 0,
            days                INTEGER NOT NULL,
            filter_pattern      TEXT NOT NULL,
            exclude_bot_traffic INTEGER NOT NULL DEFAULT 1,
            outlier_filter      INTEGER NOT NULL DEFAULT 1,
            computed_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_goal_records_scope_computed
            ON goal_records(scope, computed_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
