/// Goalpost system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Below this many sampled items the goal computation switches to the
/// small-sample fallback (mean-based base goal, max-derived stretch goal).
pub const SMALL_SAMPLE_THRESHOLD: usize = 10;

/// Values strictly above this percentile of a sample are trimmed when
/// outlier filtering is enabled.
pub const OUTLIER_TRIM_PERCENTILE: f64 = 0.99;

/// Ratio of the maximum used for the stretch goal on small samples.
pub const SMALL_SAMPLE_STRETCH_RATIO: f64 = 0.8;

/// Default lookback window for analytics queries, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Default scope label for goal records.
pub const DEFAULT_SCOPE: &str = "column";

/// Default path pattern identifying column content.
pub const DEFAULT_PATH_PATTERN: &str = "^/column/";

/// Maximum number of rows requested from a single analytics report.
pub const MAX_REPORT_ROWS: u64 = 100_000;
