//! Round-robin pool of reader connections.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use goalpost_core::errors::GoalpostResult;

use crate::pool::pragmas;
use crate::to_storage_err;

/// Fixed-size pool of reader connections, handed out round-robin.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    pub fn open(path: &Path, size: usize) -> GoalpostResult<Self> {
        let size = size.max(1);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
            pragmas::apply_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// In-memory readers are isolated databases. They keep the pool shape
    /// uniform, but callers must not expect writer visibility.
    pub fn open_in_memory(size: usize) -> GoalpostResult<Self> {
        let size = size.max(1);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
            pragmas::apply_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Run a closure against the next reader in rotation.
    pub fn with_conn<F, T>(&self, f: F) -> GoalpostResult<T>
    where
        F: FnOnce(&Connection) -> GoalpostResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|_| to_storage_err("read connection lock poisoned"))?;
        f(&guard)
    }
}
