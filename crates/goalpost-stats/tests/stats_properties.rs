use goalpost_stats::{calculate_view_goals, median, p99, percentile, remove_outliers};
use proptest::prelude::*;

fn arb_views(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0_f64..50_000.0, min_len..max_len)
}

proptest! {
    #[test]
    fn percentile_stays_within_sample_bounds(
        views in arb_views(1, 100),
        p in 0.0_f64..=1.0,
    ) {
        let result = percentile(&views, p);
        let min = views.iter().copied().fold(f64::INFINITY, f64::min);
        let max = views.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(result >= min - 1e-9);
        prop_assert!(result <= max + 1e-9);
    }

    #[test]
    fn percentile_is_monotone_in_p(
        views in arb_views(1, 100),
        a in 0.0_f64..=1.0,
        b in 0.0_f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(percentile(&views, lo) <= percentile(&views, hi) + 1e-9);
    }

    #[test]
    fn median_matches_percentile_half(views in arb_views(1, 100)) {
        prop_assert_eq!(median(&views), percentile(&views, 0.5));
    }

    #[test]
    fn disabled_filter_never_changes_input(views in arb_views(0, 100)) {
        prop_assert_eq!(remove_outliers(&views, false), views);
    }

    #[test]
    fn small_samples_are_never_trimmed(views in arb_views(0, 10)) {
        prop_assert_eq!(remove_outliers(&views, true), views);
    }

    #[test]
    fn filter_respects_the_p99_cutoff(views in arb_views(10, 100)) {
        let cutoff = p99(&views);
        let filtered = remove_outliers(&views, true);

        // Everything kept is at or below the cutoff.
        for v in &filtered {
            prop_assert!(*v <= cutoff);
        }
        // Everything dropped was strictly above it.
        let dropped = views.len() - filtered.len();
        let above = views.iter().filter(|v| **v > cutoff).count();
        prop_assert_eq!(dropped, above);
    }

    #[test]
    fn max_is_never_taken_from_the_filtered_set(
        views in arb_views(1, 100),
        outlier_filter in any::<bool>(),
    ) {
        let goals = calculate_view_goals(&views, outlier_filter);
        let raw_max = views.iter().copied().fold(0.0_f64, f64::max);
        prop_assert_eq!(goals.max, raw_max.ceil());
        prop_assert_eq!(goals.sample_count, views.len());
    }

    #[test]
    fn normal_branch_keeps_base_at_or_below_stretch(
        views in arb_views(10, 100),
        outlier_filter in any::<bool>(),
    ) {
        // median <= p90 over the same working set, and ceiling preserves
        // the ordering.
        let goals = calculate_view_goals(&views, outlier_filter);
        prop_assert!(goals.base_goal <= goals.stretch_goal);
    }

    #[test]
    fn small_branch_stretch_is_eighty_percent_of_max(views in arb_views(1, 10)) {
        let goals = calculate_view_goals(&views, true);
        let raw_max = views.iter().copied().fold(0.0_f64, f64::max);
        prop_assert_eq!(goals.stretch_goal, (raw_max * 0.8).ceil() as i64);
    }
}
