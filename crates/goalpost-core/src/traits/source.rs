use async_trait::async_trait;

use crate::errors::GoalpostResult;
use crate::models::PageViews;

/// A source of per-path view counts over a trailing window.
#[async_trait]
pub trait IViewSource: Send + Sync {
    /// Source name, for logging.
    fn name(&self) -> &str;

    /// Fetch raw per-path view counts for the last `days` days.
    ///
    /// Paths are not filtered here; the caller applies its own pattern
    /// client-side.
    async fn fetch_page_views(&self, days: u32) -> GoalpostResult<Vec<PageViews>>;
}
