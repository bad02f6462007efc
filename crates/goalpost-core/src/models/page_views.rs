use serde::{Deserialize, Serialize};

/// A single analytics row: one content path and its view count over the
/// queried window. Paths with zero views in the window never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViews {
    /// Page path as reported by analytics (e.g. `/column/some-slug`).
    pub path: String,
    /// Total screen page views for the path in the window.
    pub views: u64,
}
