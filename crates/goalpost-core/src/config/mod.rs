//! Service configuration: a TOML file with env-var overrides.

mod analytics_config;
pub mod defaults;
mod goals_config;
mod server_config;

pub use analytics_config::AnalyticsConfig;
pub use goals_config::GoalsConfig;
pub use server_config::{Environment, ServerConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, GoalpostResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalpostConfig {
    pub server: ServerConfig,
    pub analytics: AnalyticsConfig,
    pub goals: GoalsConfig,
}

impl GoalpostConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a present-but-invalid file is an error.
    pub fn load(path: &Path) -> GoalpostResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed { reason: e.to_string() })?;
        Ok(config)
    }

    /// Load from the path in `GOALPOST_CONFIG`, falling back to
    /// `goalpost.toml` in the working directory.
    pub fn load_default() -> GoalpostResult<Self> {
        let path =
            std::env::var("GOALPOST_CONFIG").unwrap_or_else(|_| "goalpost.toml".to_string());
        Self::load(Path::new(&path))
    }
}
