//! GA4 Data API client: credential resolution, wire protocol, and the
//! [`IViewSource`](goalpost_core::traits::IViewSource) implementation the
//! orchestrator consumes.

pub mod auth;
pub mod client;
pub mod transport;

pub use auth::AnalyticsAuth;
pub use client::AnalyticsClient;
