use serde::{Deserialize, Serialize};

use super::defaults;

/// GA4 Data API configuration.
///
/// `property_id` may be left empty and supplied via the `GA_PROPERTY_ID`
/// env var instead; the bearer token is always read from the env var named
/// by `access_token_env` (credentials never live in the config file).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Data API base URL (overridable for testing).
    pub base_url: String,
    /// GA4 property id (numeric, as a string).
    pub property_id: String,
    /// Name of the env var holding the OAuth bearer token.
    pub access_token_env: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_ANALYTICS_BASE_URL.to_string(),
            property_id: String::new(),
            access_token_env: defaults::ACCESS_TOKEN_ENV.to_string(),
        }
    }
}
