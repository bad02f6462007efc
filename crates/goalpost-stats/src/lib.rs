//! Pure, stateless numeric transforms over view-count samples.
//!
//! None of these functions fail: empty or tiny input degrades to `0` or
//! pass-through, and the caller decides whether a zero-valued result is
//! meaningful.

pub mod describe;
pub mod goals;
pub mod outliers;
pub mod percentile;

pub use describe::{mean, stddev};
pub use goals::calculate_view_goals;
pub use outliers::remove_outliers;
pub use percentile::{median, p90, p99, percentile};
