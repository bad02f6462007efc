//! The single serialized write connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use goalpost_core::errors::GoalpostResult;

use crate::pool::pragmas;
use crate::to_storage_err;

/// Owns the one connection allowed to write. All writes serialize on the
/// internal lock.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> GoalpostResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> GoalpostResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the write connection, serialized.
    pub fn with_conn_sync<F, T>(&self, f: F) -> GoalpostResult<T>
    where
        F: FnOnce(&Connection) -> GoalpostResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("write connection lock poisoned"))?;
        f(&guard)
    }
}
