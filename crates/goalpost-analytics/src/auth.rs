//! Credential resolution for the Data API.

use goalpost_core::config::{defaults, AnalyticsConfig};
use goalpost_core::errors::{AnalyticsError, GoalpostResult};

/// Resolved analytics credentials: property id plus bearer token.
///
/// The property id comes from config, falling back to `GA_PROPERTY_ID`;
/// the bearer token is read from the env var named in config. Missing
/// either is fatal: the run cannot proceed and nothing is retried.
#[derive(Debug, Clone)]
pub struct AnalyticsAuth {
    property_id: String,
    access_token: String,
}

impl AnalyticsAuth {
    /// Resolve credentials from config and environment.
    pub fn resolve(config: &AnalyticsConfig) -> GoalpostResult<Self> {
        let property_id = if config.property_id.is_empty() {
            std::env::var(defaults::PROPERTY_ID_ENV).unwrap_or_default()
        } else {
            config.property_id.clone()
        };
        if property_id.is_empty() {
            return Err(AnalyticsError::MissingCredentials {
                what: format!(
                    "property id (set analytics.property_id or {})",
                    defaults::PROPERTY_ID_ENV
                ),
            }
            .into());
        }

        let access_token = std::env::var(&config.access_token_env).unwrap_or_default();
        if access_token.is_empty() {
            return Err(AnalyticsError::MissingCredentials {
                what: format!("access token (set {})", config.access_token_env),
            }
            .into());
        }

        Ok(Self {
            property_id,
            access_token,
        })
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    /// Bearer token for the Authorization header.
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}
