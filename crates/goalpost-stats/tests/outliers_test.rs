use goalpost_stats::{p99, remove_outliers};

#[test]
fn disabled_filter_is_identity() {
    let values: Vec<f64> = (0..50).map(f64::from).collect();
    assert_eq!(remove_outliers(&values, false), values);
}

#[test]
fn small_samples_pass_through_even_when_enabled() {
    let values: Vec<f64> = (0..9).map(|i| f64::from(i) * 100.0).collect();
    assert_eq!(remove_outliers(&values, true), values);
}

#[test]
fn trims_only_values_strictly_above_p99() {
    // 19 ordinary values and one spike; p99 lands well below the spike.
    let mut values: Vec<f64> = (1..=19).map(f64::from).collect();
    values.push(1000.0);

    let cutoff = p99(&values);
    let filtered = remove_outliers(&values, true);

    assert!(!filtered.contains(&1000.0));
    assert_eq!(filtered.len(), 19);
    for v in &filtered {
        assert!(*v <= cutoff);
    }
    // Survivors keep their original order.
    assert_eq!(filtered, (1..=19).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn values_equal_to_the_cutoff_survive() {
    // Constant sample: p99 equals every element, nothing is strictly above.
    let values = vec![5.0; 12];
    assert_eq!(remove_outliers(&values, true), values);
}

#[test]
fn ten_element_boundary_applies_the_filter() {
    // Exactly at the threshold the filter runs: p99 of this set is 93.7,
    // so the spike at 100 is trimmed.
    let values = [0.0, 0.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 100.0];
    let filtered = remove_outliers(&values, true);
    assert_eq!(filtered.len(), 9);
    assert!(!filtered.contains(&100.0));
}
