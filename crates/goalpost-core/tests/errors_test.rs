use goalpost_core::errors::{AnalyticsError, ConfigError, GoalpostError, StorageError};

#[test]
fn analytics_errors_format_with_context() {
    let err = AnalyticsError::MissingCredentials {
        what: "property id".to_string(),
    };
    assert_eq!(err.to_string(), "missing analytics credentials: property id");

    let err = AnalyticsError::RequestFailed {
        status: 403,
        body: "PERMISSION_DENIED".to_string(),
    };
    assert!(err.to_string().contains("403"));
    assert!(err.to_string().contains("PERMISSION_DENIED"));
}

#[test]
fn storage_errors_format_with_context() {
    let err = StorageError::MigrationFailed {
        version: 1,
        reason: "table exists".to_string(),
    };
    assert_eq!(err.to_string(), "migration failed at version 1: table exists");
}

#[test]
fn umbrella_error_is_transparent() {
    let inner = ConfigError::InvalidFilterPattern {
        pattern: "[".to_string(),
        reason: "unclosed character class".to_string(),
    };
    let outer = GoalpostError::from(inner);
    assert!(outer.to_string().contains("invalid path filter pattern"));
    assert!(outer.to_string().contains("unclosed character class"));
}
