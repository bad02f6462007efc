//! The Data API client implementing [`IViewSource`].

use async_trait::async_trait;

use goalpost_core::config::AnalyticsConfig;
use goalpost_core::constants::MAX_REPORT_ROWS;
use goalpost_core::errors::{AnalyticsError, GoalpostResult};
use goalpost_core::models::PageViews;
use goalpost_core::traits::IViewSource;

use crate::auth::AnalyticsAuth;
use crate::transport::protocol::{RunReportRequest, RunReportResponse};

/// GA4 Data API client.
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: String,
    auth: AnalyticsAuth,
}

impl AnalyticsClient {
    /// Build a client, resolving credentials from config and environment.
    pub fn new(config: &AnalyticsConfig) -> GoalpostResult<Self> {
        let auth = AnalyticsAuth::resolve(config)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    fn report_url(&self) -> String {
        format!(
            "{}/properties/{}:runReport",
            self.base_url,
            self.auth.property_id()
        )
    }

    async fn run_report(&self, request: &RunReportRequest) -> GoalpostResult<RunReportResponse> {
        let response = self
            .http
            .post(self.report_url())
            .bearer_auth(self.auth.bearer_token())
            .json(request)
            .send()
            .await
            .map_err(|e| AnalyticsError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyticsError::RequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let report = response
            .json::<RunReportResponse>()
            .await
            .map_err(|e| AnalyticsError::MalformedResponse {
                reason: e.to_string(),
            })?;
        Ok(report)
    }
}

#[async_trait]
impl IViewSource for AnalyticsClient {
    fn name(&self) -> &str {
        "ga4"
    }

    async fn fetch_page_views(&self, days: u32) -> GoalpostResult<Vec<PageViews>> {
        let request = RunReportRequest::page_views(days, MAX_REPORT_ROWS);
        let report = self.run_report(&request).await?;

        let mut rows = Vec::with_capacity(report.rows.len());
        for row in &report.rows {
            let Some(path) = row.dimension_values.first().map(|d| d.value.clone()) else {
                tracing::warn!("analytics: row without a path dimension, skipping");
                continue;
            };
            let raw = row
                .metric_values
                .first()
                .map(|m| m.value.as_str())
                .unwrap_or("");
            match raw.parse::<u64>() {
                Ok(views) => rows.push(PageViews { path, views }),
                Err(_) => {
                    tracing::warn!(
                        path = %path,
                        value = %raw,
                        "analytics: unparseable view count, skipping row"
                    );
                }
            }
        }

        tracing::debug!(days, rows = rows.len(), "analytics: fetched page view report");
        Ok(rows)
    }
}
