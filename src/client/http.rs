//! Backend REST client
//!
//! HTTP data source talking to the sentiment backend with reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::endpoint::join_url;
use super::{DataSource, FetchError};
use crate::config::BackendConfig;

/// Sentiment backend REST client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the configured backend
    pub fn new(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative endpoint
    pub fn url_for(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }
}

#[async_trait]
impl DataSource for HttpClient {
    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.url_for(endpoint);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_normalizes_slashes() {
        let config = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout_secs: 5,
        };
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url_for("clientes?page=2&limit=10"),
            "http://localhost:8000/clientes?page=2&limit=10"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = BackendConfig {
            base_url: format!("http://{}", addr),
            request_timeout_secs: 2,
        };
        let client = HttpClient::new(&config).unwrap();

        let err = client.get_json("atendentes?page=1&limit=8").await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.endpoint(), "atendentes?page=1&limit=8");
    }
}
