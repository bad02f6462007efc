use goalpost_core::models::{GoalRecord, RecomputeConfig, ViewGoals};

fn sample_goals() -> ViewGoals {
    ViewGoals {
        base_goal: 120,
        stretch_goal: 480,
        mean: 150.5,
        median: 119.0,
        p90: 479.2,
        max: 2100.0,
        sample_count: 42,
    }
}

#[test]
fn record_copies_run_configuration() {
    let config = RecomputeConfig {
        scope: "column".to_string(),
        days: 30,
        filter_regex: "^/column/".to_string(),
        exclude_bot_traffic: false,
        outlier_filter: true,
    };
    let record = GoalRecord::from_run(&config, &sample_goals());

    assert_eq!(record.id, None);
    assert_eq!(record.scope, "column");
    assert_eq!(record.days, 30);
    assert_eq!(record.filter_pattern, "^/column/");
    assert!(!record.exclude_bot_traffic);
    assert!(record.outlier_filter);
    assert_eq!(record.base_goal, 120);
    assert_eq!(record.stretch_goal, 480);
    assert_eq!(record.sample_count, 42);
    assert!(!record.run_id.is_empty());
}

#[test]
fn run_ids_are_unique_per_record() {
    let config = RecomputeConfig::default();
    let a = GoalRecord::from_run(&config, &sample_goals());
    let b = GoalRecord::from_run(&config, &sample_goals());
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn unpersisted_record_serializes_without_id() {
    let record = GoalRecord::from_run(&RecomputeConfig::default(), &sample_goals());
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["base_goal"], 120);
    assert_eq!(json["scope"], "column");
}

#[test]
fn zero_goals_are_all_zero() {
    let zero = ViewGoals::zero();
    assert_eq!(zero.base_goal, 0);
    assert_eq!(zero.stretch_goal, 0);
    assert_eq!(zero.sample_count, 0);
    assert_eq!(zero.max, 0.0);
}

#[test]
fn recompute_config_default_values() {
    let config = RecomputeConfig::default();
    assert_eq!(config.days, 90);
    assert!(config.exclude_bot_traffic);
    assert!(config.outlier_filter);
}
