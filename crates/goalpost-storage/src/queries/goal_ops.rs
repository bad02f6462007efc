//! Raw SQL operations for the goal_records table.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};

use goalpost_core::errors::GoalpostResult;
use goalpost_core::models::GoalRecord;

use crate::to_storage_err;

const RECORD_COLUMNS: &str = "id, run_id, scope, base_goal, stretch_goal, mean, median, p90, \
     max_views, sample_count, days, filter_pattern, exclude_bot_traffic, outlier_filter, \
     computed_at";

/// Insert a goal record, returning the assigned row id.
pub fn insert_goal_record(conn: &Connection, record: &GoalRecord) -> GoalpostResult<i64> {
    conn.execute(
        "INSERT INTO goal_records (
             run_id, scope, base_goal, stretch_goal, mean, median, p90,
             max_views, sample_count, days, filter_pattern,
             exclude_bot_traffic, outlier_filter, computed_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            record.run_id,
            record.scope,
            record.base_goal,
            record.stretch_goal,
            record.mean,
            record.median,
            record.p90,
            record.max,
            record.sample_count,
            record.days,
            record.filter_pattern,
            record.exclude_bot_traffic,
            record.outlier_filter,
            record
                .computed_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(conn.last_insert_rowid())
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<GoalRecord> {
    let raw_timestamp: String = row.get(14)?;
    let computed_at = DateTime::parse_from_rfc3339(&raw_timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(14, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(GoalRecord {
        id: Some(row.get(0)?),
        run_id: row.get(1)?,
        scope: row.get(2)?,
        base_goal: row.get(3)?,
        stretch_goal: row.get(4)?,
        mean: row.get(5)?,
        median: row.get(6)?,
        p90: row.get(7)?,
        max: row.get(8)?,
        sample_count: row.get(9)?,
        days: row.get(10)?,
        filter_pattern: row.get(11)?,
        exclude_bot_traffic: row.get(12)?,
        outlier_filter: row.get(13)?,
        computed_at,
    })
}

/// Most recent record for a scope by computation timestamp.
///
/// Concurrent runs are not coordinated; whichever run stored the greater
/// timestamp wins this read, regardless of insertion order.
pub fn get_latest_goal_record(
    conn: &Connection,
    scope: &str,
) -> GoalpostResult<Option<GoalRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM goal_records
             WHERE scope = ?1
             ORDER BY computed_at DESC
             LIMIT 1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![scope], record_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => Ok(Some(row.map_err(|e| to_storage_err(e.to_string()))?)),
        None => Ok(None),
    }
}

/// Recent records for a scope, newest first.
pub fn get_goal_history(
    conn: &Connection,
    scope: &str,
    limit: usize,
) -> GoalpostResult<Vec<GoalRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM goal_records
             WHERE scope = ?1
             ORDER BY computed_at DESC
             LIMIT ?2"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![scope, limit as i64], record_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(records)
}
