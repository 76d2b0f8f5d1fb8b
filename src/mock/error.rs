//! Mock API Error Types
//!
//! Errors returned by the mock backend and their HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockApiError {
    /// Query parameters out of range or not numbers
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure forced through the fault switch
    #[error("Injected failure with status {0}")]
    Injected(u16),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl MockApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MockApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MockApiError::Injected(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            MockApiError::Internal(_) | MockApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            MockApiError::Validation(_) => "VALIDATION_ERROR",
            MockApiError::Injected(_) => "INJECTED_FAILURE",
            MockApiError::Internal(_) => "INTERNAL_ERROR",
            MockApiError::Io(_) => "IO_ERROR",
        }
    }
}

impl IntoResponse for MockApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Mock API error"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

pub type MockResult<T> = Result<T, MockApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MockApiError::Validation("page".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            MockApiError::Injected(503).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        // Not a valid status code
        assert_eq!(
            MockApiError::Injected(42).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
