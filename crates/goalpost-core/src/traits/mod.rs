//! Traits at the seams between crates.

mod source;
mod storage;

pub use source::IViewSource;
pub use storage::IGoalStorage;
