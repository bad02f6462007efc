//! # goalpost-core
//!
//! Foundation crate for the goalpost analytics service.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GoalpostConfig;
pub use errors::{GoalpostError, GoalpostResult};
pub use models::{GoalRecord, PageViews, RecomputeConfig, ViewGoals};
