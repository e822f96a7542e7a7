//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending field, id, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Error body returned by every endpoint
///
/// - `code`: numeric error code
/// - `error`: machine-readable failure kind
/// - `message`: human-readable message
/// - `details`: offending field, id, ... when known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            error: err.code.name().to_string(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Storage details stay in the log, the client only sees the kind
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            let masked = AppError::new(self.code);
            return (status, Json(ErrorResponse::from(&masked))).into_response();
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::SizeNotFound)
            .with_detail("size_id", 42)
            .with_detail("field", "size_id");

        let details = err.details.unwrap();
        assert_eq!(details.get("size_id").unwrap(), 42);
        assert_eq!(details.get("field").unwrap(), "size_id");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::ProductNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::new(ErrorCode::ProductCodeExists).http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::database("disk I/O error").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::ProductNotFound, "Product 5 not found");
        assert_eq!(format!("{}", err), "Product 5 not found");
    }

    #[test]
    fn test_error_response_from_app_error() {
        let err = AppError::new(ErrorCode::ProductCodeExists).with_detail("code", "SKU1");
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, 6002);
        assert_eq!(response.error, "duplicate_code");
        assert_eq!(response.message, "Product code already exists");
        assert_eq!(response.details.unwrap().get("code").unwrap(), "SKU1");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let response = ErrorResponse::from(&AppError::invalid_request("bad body"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":5"));
        assert!(json.contains("\"error\":\"invalid_request\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_error_response_deserialize() {
        let json = r#"{"code":6005,"error":"invalid_price","message":"Price must be greater than 0"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 6005);
        assert_eq!(response.error, "invalid_price");
        assert!(response.details.is_none());
    }
}
