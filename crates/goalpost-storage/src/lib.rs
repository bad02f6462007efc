//! SQLite persistence for goal records.
//!
//! Insert-only: records are never updated or deleted, and history
//! accumulates indefinitely. "Latest" reads sort on the stored computation
//! timestamp, so concurrent writers resolve last-write-wins by timestamp.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use goalpost_core::errors::{GoalpostError, StorageError};

/// Shorthand for wrapping rusqlite failures.
pub(crate) fn to_storage_err(message: impl Into<String>) -> GoalpostError {
    GoalpostError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
