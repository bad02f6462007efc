//! HTTP surface for the goalpost service.
//!
//! Request-scoped execution: each recompute runs fetch → compute →
//! persist within the triggering call. There is no scheduler or queue,
//! and concurrent recomputes are not coordinated; "latest" reads resolve
//! last-write-wins by stored timestamp.

pub mod error;
pub mod routes;
pub mod service;
pub mod state;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::CorsLayer;

use goalpost_analytics::AnalyticsClient;
use goalpost_core::config::GoalpostConfig;
use goalpost_core::errors::GoalpostResult;
use goalpost_storage::StorageEngine;

use crate::state::AppState;

/// Build application state from config: open storage, construct the
/// analytics client. Fails fast on missing credentials.
pub fn build_state(config: GoalpostConfig, db_path: &Path) -> GoalpostResult<AppState> {
    let storage = StorageEngine::open(db_path)?;
    let source = AnalyticsClient::new(&config.analytics)?;
    Ok(AppState::new(config, Arc::new(storage), Arc::new(source)))
}

/// Serve the API until shutdown.
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let port = state.config.server.port;
    let app = routes::router(state).layer(cors);

    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        if ctrl_c().await.is_err() {
            tracing::error!("failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = interrupt => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
