//! Wire types for the GA4 Data API `runReport` call.
//!
//! Field names are camelCase on the wire. Only the fields this service
//! uses are modeled; unknown response fields are ignored.

use serde::{Deserialize, Serialize};

/// A `runReport` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportRequest {
    pub date_ranges: Vec<DateRange>,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    /// int64 on the wire, carried as a string per the API's JSON mapping.
    pub limit: String,
}

/// Trailing date range in the API's relative form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: String,
}

impl RunReportRequest {
    /// Per-path screen page views over the last `days` days.
    pub fn page_views(days: u32, limit: u64) -> Self {
        Self {
            date_ranges: vec![DateRange {
                start_date: format!("{days}daysAgo"),
                end_date: "today".to_string(),
            }],
            dimensions: vec![Dimension {
                name: "pagePath".to_string(),
            }],
            metrics: vec![Metric {
                name: "screenPageViews".to_string(),
            }],
            limit: limit.to_string(),
        }
    }
}

/// A `runReport` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReportResponse {
    /// Absent entirely when the query matches nothing.
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    pub row_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimension_values: Vec<DimensionValue>,
    #[serde(default)]
    pub metric_values: Vec<MetricValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DimensionValue {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: String,
}
