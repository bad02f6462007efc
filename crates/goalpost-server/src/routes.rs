//! HTTP routes and handlers.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use goalpost_core::constants;
use goalpost_core::models::RecomputeConfig;

use crate::error::ApiError;
use crate::service;
use crate::state::AppState;

/// Default page size for the history endpoint.
const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/goals/recompute", post(recompute_handler))
        .route("/api/goals/latest", get(latest_handler))
        .route("/api/goals/history", get(history_handler))
        .with_state(state)
}

/// Body for the recompute endpoint; every field optional, defaults come
/// from the `[goals]` config section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecomputeRequest {
    pub scope: Option<String>,
    pub days: Option<u32>,
    pub filter_regex: Option<String>,
    pub exclude_bot_traffic: Option<bool>,
    pub outlier_filter: Option<bool>,
}

impl RecomputeRequest {
    fn into_config(self, defaults: RecomputeConfig) -> RecomputeConfig {
        RecomputeConfig {
            scope: self.scope.unwrap_or(defaults.scope),
            days: self.days.unwrap_or(defaults.days),
            filter_regex: self.filter_regex.unwrap_or(defaults.filter_regex),
            exclude_bot_traffic: self
                .exclude_bot_traffic
                .unwrap_or(defaults.exclude_bot_traffic),
            outlier_filter: self.outlier_filter.unwrap_or(defaults.outlier_filter),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub scope: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct HealthBody {
    service: &'static str,
    version: &'static str,
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthBody {
        service: "goalpost",
        version: constants::VERSION,
    })
}

async fn recompute_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // An empty body means "use the configured defaults".
    let request: RecomputeRequest = if body.is_empty() {
        RecomputeRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::bad_request(format!("malformed request body: {e}")))?
    };
    let config = request.into_config(state.config.goals.as_recompute_config());

    let record = service::recompute_goals(&state, &config)
        .await
        .map_err(|e| ApiError::internal(e, state.expose_error_detail()))?;

    Ok(Json(record))
}

async fn latest_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let scope = state.config.goals.scope.clone();
    let record = service::latest_goals(&state, &scope)
        .map_err(|e| ApiError::internal(e, state.expose_error_detail()))?
        .ok_or_else(|| ApiError::not_found("no goals found"))?;
    Ok(Json(record))
}

async fn history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, ApiError> {
    let scope = params
        .scope
        .unwrap_or_else(|| state.config.goals.scope.clone());
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let records = service::goal_history(&state, &scope, limit)
        .map_err(|e| ApiError::internal(e, state.expose_error_detail()))?;
    Ok(Json(records))
}
