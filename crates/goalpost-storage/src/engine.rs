//! StorageEngine: owns the ConnectionPool, implements IGoalStorage,
//! runs migrations on startup.

use std::path::Path;

use goalpost_core::errors::GoalpostResult;
use goalpost_core::models::GoalRecord;
use goalpost_core::traits::IGoalStorage;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries;

/// The storage engine. Owns the connection pool and provides the
/// insert-only goal record interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for reads (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> GoalpostResult<Self> {
        let pool = ConnectionPool::open(path, 2)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> GoalpostResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations on the writer.
    fn initialize(&self) -> GoalpostResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Get a reference to the connection pool (for maintenance queries).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> GoalpostResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> GoalpostResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IGoalStorage for StorageEngine {
    fn insert_goal_record(&self, record: &GoalRecord) -> GoalpostResult<i64> {
        self.pool
            .writer
            .with_conn_sync(|conn| queries::goal_ops::insert_goal_record(conn, record))
    }

    fn latest_goal_record(&self, scope: &str) -> GoalpostResult<Option<GoalRecord>> {
        self.with_reader(|conn| queries::goal_ops::get_latest_goal_record(conn, scope))
    }

    fn goal_history(&self, scope: &str, limit: usize) -> GoalpostResult<Vec<GoalRecord>> {
        self.with_reader(|conn| queries::goal_ops::get_goal_history(conn, scope, limit))
    }
}
