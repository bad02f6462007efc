use serde::{Deserialize, Serialize};

use super::defaults;

/// Deployment environment. Controls how much error detail the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Resolve from `GOALPOST_ENV`, `None` when unset. Any value other
    /// than `production` maps to development.
    pub fn from_env() -> Option<Self> {
        match std::env::var("GOALPOST_ENV").ok()?.as_str() {
            "production" => Some(Environment::Production),
            _ => Some(Environment::Development),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the API listens on.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: defaults::DEFAULT_PORT,
            environment: Environment::Development,
        }
    }
}
