//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Errors answer with a JSON `{"message": ...}` body. Authorization failures
//! are raised by the extractors before a handler runs, so a rejected request
//! never reaches a mutation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::stripe::GatewayError;
use crate::services::token::AuthError;

/// Application-level error type for the ordering API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed (missing or invalid token).
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Authenticated but not allowed (role or identity mismatch).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Payment gateway operation failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_) | Self::Gateway(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Gateway(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients. Gateway errors are
        // passed through so the caller sees the gateway's own diagnosis.
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Gateway(err) => err.to_string(),
            Self::Forbidden(msg) | Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_missing_and_invalid_tokens_are_unauthorized() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::Missing)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::Invalid)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_missing_and_invalid_tokens_have_distinct_messages() {
        assert_ne!(AuthError::Missing.to_string(), AuthError::Invalid.to_string());
    }

    #[test]
    fn test_forbidden_is_403() {
        assert_eq!(
            get_status(AppError::Forbidden("forbidden access".to_string())),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_gateway_error_is_bad_gateway() {
        let err = AppError::Gateway(GatewayError::Api {
            status: 402,
            message: "card declined".to_string(),
        });
        assert_eq!(get_status(err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_request_is_400() {
        assert_eq!(
            get_status(AppError::BadRequest("price must be non-negative".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_errors_are_not_exposed() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
