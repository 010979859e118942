//! Error handling module
//!
//! Defines the per-lookup failure taxonomy and the application-level error
//! type returned from HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single upstream classification lookup failed.
///
/// Lookups never abort a batch; this type exists so the adapter can tell a
/// transport problem from an upstream rejection from a bad body, and so
/// richer reporting can be added later without touching the coordinator.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Connection refused, DNS failure, timeout and friends
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// 2xx response whose body was not the expected JSON shape
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::HttpClient(_) | AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!("Application error: {} - Status code: {}", self, status);

        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
