//! Default values for configuration sections.

/// Default HTTP port for the API server.
pub const DEFAULT_PORT: u16 = 8787;

/// GA4 Data API base URL.
pub const DEFAULT_ANALYTICS_BASE_URL: &str = "https://analyticsdata.googleapis.com/v1beta";

/// Env var consulted when `analytics.property_id` is unset.
pub const PROPERTY_ID_ENV: &str = "GA_PROPERTY_ID";

/// Default name of the env var holding the OAuth bearer token.
pub const ACCESS_TOKEN_ENV: &str = "GA_ACCESS_TOKEN";
