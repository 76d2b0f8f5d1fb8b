//! In-memory data source for component tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{DataSource, FetchError};

/// Canned responses keyed by relative endpoint; unknown endpoints answer 404
#[derive(Default)]
pub struct MemorySource {
    responses: HashMap<String, Result<serde_json::Value, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, endpoint: &str, body: serde_json::Value) -> Self {
        self.responses.insert(endpoint.to_string(), Ok(body));
        self
    }

    pub fn with_status(mut self, endpoint: &str, status: u16) -> Self {
        self.responses.insert(
            endpoint.to_string(),
            Err(FetchError::Status {
                status,
                endpoint: endpoint.to_string(),
            }),
        );
        self
    }

    /// Every endpoint requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value, FetchError> {
        self.requests.lock().unwrap().push(endpoint.to_string());

        self.responses
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    status: 404,
                    endpoint: endpoint.to_string(),
                })
            })
    }
}
