//! Backend Data Access
//!
//! The fetch helper every dashboard component goes through.
//!
//! ## Contract
//!
//! `fetch_data(source, endpoint)` issues one GET and returns the decoded body,
//! or `None` when anything goes wrong. Failures are logged with the endpoint
//! and their cause and never propagate to the caller. No retries, no backoff,
//! no caching.
//!
//! ## Architecture
//!
//! - **DataSource**: the seam between components and the network
//! - **HttpClient**: reqwest-backed data source for the real backend
//! - **FetchError**: transport / status / decode classification

mod endpoint;
mod error;
mod http;

#[cfg(test)]
pub(crate) mod memory;

pub use endpoint::{join_url, Endpoint};
pub use error::FetchError;
pub use http::HttpClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Something that can answer a relative GET with a JSON body
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch `endpoint` (path plus query) and return its JSON body
    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value, FetchError>;
}

/// Fetch and decode, keeping the cause of a failure
pub async fn try_fetch<T: DeserializeOwned>(
    source: &dyn DataSource,
    endpoint: &str,
) -> Result<T, FetchError> {
    let value = source.get_json(endpoint).await?;

    serde_json::from_value(value).map_err(|e| FetchError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Fetch and decode, logging any failure and normalizing it to `None`
pub async fn fetch_data<T: DeserializeOwned>(source: &dyn DataSource, endpoint: &str) -> Option<T> {
    match try_fetch(source, endpoint).await {
        Ok(data) => Some(data),
        Err(err) => {
            log_fetch_error(&err);
            None
        }
    }
}

fn log_fetch_error(err: &FetchError) {
    match err.status() {
        Some(status) => tracing::error!(
            status = status,
            endpoint = %err.endpoint(),
            "HTTP error {} fetching {}",
            status,
            err.endpoint()
        ),
        None => tracing::error!(
            endpoint = %err.endpoint(),
            error = %err,
            "Failed to fetch data from {}",
            err.endpoint()
        ),
    }
}
