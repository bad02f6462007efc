use std::io::Write;

use goalpost_core::config::{Environment, GoalpostConfig};
use goalpost_core::constants;

#[test]
fn defaults_are_sensible() {
    let config = GoalpostConfig::default();
    assert_eq!(config.server.port, 8787);
    assert!(!config.server.environment.is_production());
    assert_eq!(config.goals.scope, constants::DEFAULT_SCOPE);
    assert_eq!(config.goals.days, constants::DEFAULT_LOOKBACK_DAYS);
    assert_eq!(config.goals.filter_pattern, constants::DEFAULT_PATH_PATTERN);
    assert!(config.goals.exclude_bot_traffic);
    assert!(config.goals.outlier_filter);
    assert!(config.analytics.property_id.is_empty());
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let config = GoalpostConfig::load(&path).unwrap();
    assert_eq!(config.server.port, GoalpostConfig::default().server.port);
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goalpost.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"
[server]
port = 9000
environment = "production"

[goals]
days = 30
"#
    )
    .unwrap();

    let config = GoalpostConfig::load(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.environment, Environment::Production);
    assert_eq!(config.goals.days, 30);
    // Unnamed fields keep their defaults.
    assert_eq!(config.goals.scope, constants::DEFAULT_SCOPE);
    assert_eq!(
        config.analytics.base_url,
        GoalpostConfig::default().analytics.base_url
    );
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goalpost.toml");
    std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
    assert!(GoalpostConfig::load(&path).is_err());
}

#[test]
fn goals_config_round_trips_to_recompute_config() {
    let config = GoalpostConfig::default();
    let run = config.goals.as_recompute_config();
    assert_eq!(run.scope, config.goals.scope);
    assert_eq!(run.days, config.goals.days);
    assert_eq!(run.filter_regex, config.goals.filter_pattern);
}
