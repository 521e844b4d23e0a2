//! Unified error handling for CallDash
//!
//! This module provides a single error type covering all failure scenarios
//! in the service, with automatic HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// All errors in the service should be converted to this type.
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database pool error: {0}")]
    Pool(String),

    // ==================== Session Errors ====================
    #[error("Missing session token")]
    MissingSession,

    #[error("Session not found or expired")]
    SessionExpired,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // ==================== Provider Errors ====================
    #[error("Call provider request failed: {0}")]
    Provider(String),

    #[error("Call provider returned an unexpected payload: {0}")]
    ProviderResponse(String),

    // ==================== Business Logic Errors ====================
    #[error("Billing profile not found for user: {0}")]
    BillingProfileNotFound(String),

    #[error("No active subscription for user: {0}")]
    NoSubscription(String),

    #[error("Balance update failed: {0}")]
    BalanceUpdate(String),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            AppError::MissingSession | AppError::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            AppError::Unauthorized(_) => StatusCode::FORBIDDEN,

            // 404 Not Found
            AppError::BillingProfileNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // 402 Payment Required
            AppError::NoSubscription(_) => StatusCode::PAYMENT_REQUIRED,

            // 502 Bad Gateway - upstream call provider failures
            AppError::Provider(_) | AppError::ProviderResponse(_) => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database_error",
            AppError::Pool(_) => "pool_error",
            AppError::MissingSession => "missing_session",
            AppError::SessionExpired => "session_expired",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::Provider(_) => "provider_error",
            AppError::ProviderResponse(_) => "provider_response",
            AppError::BillingProfileNotFound(_) => "billing_profile_not_found",
            AppError::NoSubscription(_) => "no_subscription",
            AppError::BalanceUpdate(_) => "balance_update_failed",
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::SessionExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::BillingProfileNotFound("user-1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ProviderResponse("expected an array".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::NoSubscription("user-1".to_string()).status_code(),
            StatusCode::PAYMENT_REQUIRED
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::MissingSession.error_code(), "missing_session");
        assert_eq!(
            AppError::Provider("timeout".to_string()).error_code(),
            "provider_error"
        );
        assert_eq!(
            AppError::BalanceUpdate("gone".to_string()).error_code(),
            "balance_update_failed"
        );
    }
}
