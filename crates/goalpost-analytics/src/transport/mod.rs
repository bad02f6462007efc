//! HTTP transport for the Data API.

pub mod protocol;
