//! Versioned schema migrations tracked via `PRAGMA user_version`.

mod v001_goal_records;

use rusqlite::Connection;

use goalpost_core::errors::{GoalpostError, GoalpostResult, StorageError};

use crate::to_storage_err;

/// Latest schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Run all outstanding migrations.
pub fn run_migrations(conn: &Connection) -> GoalpostResult<()> {
    let current: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if current < 1 {
        apply(conn, 1, v001_goal_records::migrate)?;
    }

    Ok(())
}

fn apply(
    conn: &Connection,
    version: u32,
    migrate: fn(&Connection) -> GoalpostResult<()>,
) -> GoalpostResult<()> {
    migrate(conn).map_err(|e| {
        GoalpostError::Storage(StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })
    })?;
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))?;
    tracing::debug!(version, "storage: applied migration");
    Ok(())
}
