/// Analytics fetcher errors for the GA4 Data API.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("missing analytics credentials: {what}")]
    MissingCredentials { what: String },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("analytics request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("malformed analytics response: {reason}")]
    MalformedResponse { reason: String },
}
