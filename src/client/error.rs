//! Fetch error types
//!
//! Every failure the fetch helper can see, classified the way the dashboard
//! cares about them: the backend could not be reached, it answered with a
//! non-success status, or its body did not match the expected shape.

use thiserror::Error;

/// Errors that can occur while fetching dashboard data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete in time
    #[error("Request timed out fetching {endpoint}")]
    Timeout { endpoint: String },

    /// Connection refused, DNS failure and friends
    #[error("Backend unavailable fetching {endpoint}: {message}")]
    Unavailable { endpoint: String, message: String },

    /// Any other transport-level failure
    #[error("Failed to fetch data from {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// The backend answered with a non-success status
    #[error("HTTP error {status} fetching {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The body was not JSON or did not match the expected shape
    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl FetchError {
    /// Classify a reqwest failure for `endpoint`
    pub fn from_reqwest(endpoint: &str, err: &reqwest::Error) -> Self {
        let endpoint = endpoint.to_string();
        if err.is_timeout() {
            FetchError::Timeout { endpoint }
        } else if err.is_connect() {
            FetchError::Unavailable {
                endpoint,
                message: err.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Decode {
                endpoint,
                message: err.to_string(),
            }
        } else {
            FetchError::Transport {
                endpoint,
                message: err.to_string(),
            }
        }
    }

    /// The endpoint the failed request was for
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Timeout { endpoint }
            | FetchError::Unavailable { endpoint, .. }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status code, for protocol failures
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Timeout { .. } | FetchError::Unavailable { .. } | FetchError::Transport { .. }
        )
    }
}
