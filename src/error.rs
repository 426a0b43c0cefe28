//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
///
/// The core raises exactly two modeled categories upward: a not-found
/// signal (404) and a domain validation error (422). Everything else is a
/// defect and maps to 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain rule violations (422)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Not-found and persistence failures
    #[error(transparent)]
    Store(#[from] StoreError),

    // Server errors (5xx)
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 422 Unprocessable Entity
            AppError::Domain(domain_err) => {
                let code = match domain_err {
                    DomainError::InvalidAmount { .. } => "invalid_amount",
                    DomainError::NonPositiveAmount(_) => "non_positive_amount",
                    DomainError::ZeroAmount => "zero_amount",
                    DomainError::InsufficientBalance { .. } => "insufficient_balance",
                    DomainError::MalformedTransaction(_) => "malformed_transaction",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    code,
                    Some(domain_err.to_string()),
                )
            }

            // 404 Not Found
            AppError::Store(err @ StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "not_found", Some(err.to_string()))
            }

            // 500 Internal Server Error
            AppError::Store(StoreError::Database(e)) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Store(StoreError::CommitFailed(e)) => {
                tracing::error!("Commit failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "commit_failed", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
