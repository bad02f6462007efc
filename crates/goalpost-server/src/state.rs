//! Shared application state.

use std::sync::Arc;

use goalpost_core::config::GoalpostConfig;
use goalpost_core::traits::{IGoalStorage, IViewSource};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GoalpostConfig>,
    pub storage: Arc<dyn IGoalStorage>,
    pub source: Arc<dyn IViewSource>,
}

impl AppState {
    pub fn new(
        config: GoalpostConfig,
        storage: Arc<dyn IGoalStorage>,
        source: Arc<dyn IViewSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            source,
        }
    }

    /// Whether error responses may carry debug detail.
    pub fn expose_error_detail(&self) -> bool {
        !self.config.server.environment.is_production()
    }
}
