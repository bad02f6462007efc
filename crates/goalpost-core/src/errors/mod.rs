//! Error types, one enum per domain, aggregated into [`GoalpostError`].
//!
//! The statistics layer defines no error type: it degrades to zero or
//! pass-through on empty input, and the caller decides what a zero-valued
//! result means.

mod analytics_error;
mod config_error;
mod storage_error;

pub use analytics_error::AnalyticsError;
pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Umbrella error for all goalpost operations.
#[derive(Debug, thiserror::Error)]
pub enum GoalpostError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type GoalpostResult<T> = std::result::Result<T, GoalpostError>;
