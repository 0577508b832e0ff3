//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Backend returned a non-success status; carries the backend body text
    #[error("Backend error: {0}")]
    Backend(String),

    /// Backend replied 2xx but the body lacks the answer or source tag
    #[error("Invalid response from backend")]
    InvalidBackendResponse,

    /// HTTP client error (connect, timeout, body read)
    #[error("Request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    ///
    /// Every relay failure collapses to one server-error status; the chat
    /// contract distinguishes failures by message text, not status code.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Convert to the fixed failure body
    pub fn to_failure_response(&self) -> ApiResponse {
        ApiResponse::failure(self)
    }
}

/// Allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!("Chat relay error: {} - Status code: {}", self, status);

        (status, Json(self.to_failure_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_every_error_maps_to_server_error() {
        let errors = [
            AppError::Validation("user_input must be a string".to_string()),
            AppError::Backend("boom".to_string()),
            AppError::InvalidBackendResponse,
            AppError::Internal("oops".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_failure_body_shape() {
        let error = AppError::Validation("user_input must be a string".to_string());
        let body = error.to_failure_response();

        assert_eq!(body.response, "Error: Invalid input: user_input must be a string");
        assert_eq!(body.source, Source::Local);
        assert_eq!(body.tokens_used, Some(0));
    }

    #[test]
    fn test_backend_error_carries_detail() {
        let error = AppError::Backend("Internal Server Error".to_string());
        let body = error.to_failure_response();

        assert!(body.response.contains("Backend error"));
        assert!(body.response.contains("Internal Server Error"));
    }

    #[test]
    fn test_invalid_backend_response_message() {
        let error = AppError::InvalidBackendResponse;
        assert_eq!(error.to_string(), "Invalid response from backend");
    }
}
