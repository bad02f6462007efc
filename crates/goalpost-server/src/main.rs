use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use goalpost_core::config::{Environment, GoalpostConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut config = GoalpostConfig::load_default().context("loading configuration")?;
    if let Some(env) = Environment::from_env() {
        config.server.environment = env;
    }

    let db_path = std::env::var("GOALPOST_DB").unwrap_or_else(|_| "goalpost.db".to_string());
    let state = goalpost_server::build_state(config, &PathBuf::from(db_path))
        .context("initializing state")?;

    goalpost_server::start_server(state).await
}
