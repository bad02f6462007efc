//! Error-to-response mapping for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use goalpost_core::errors::GoalpostError;

/// An API-level error response.
///
/// `detail` carries the debug representation of the underlying failure and
/// is only populated outside production.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ApiError {
    /// 400 with a plain message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            detail: None,
        }
    }

    /// 404 with a plain message. Not-found is a distinct non-error
    /// condition, not a zero-valued record.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            detail: None,
        }
    }

    /// 500 wrapping an internal failure. `expose_detail` gates the debug
    /// representation.
    pub fn internal(err: GoalpostError, expose_detail: bool) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
            detail: expose_detail.then(|| format!("{err:?}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, error = %self.message, "api error");
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
