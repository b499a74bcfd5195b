//! # API Error Type
//!
//! Unified error type for the boundary operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow at the Boundary                      │
//! │                                                                     │
//! │  InventoryApi operation                                             │
//! │  Result<T, ApiError>                                                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Rule violation? ── CoreError::DuplicateSku ──────┐                │
//! │         │                                         ▼                │
//! │  Backend fault? ─── StoreError (logged) ──────► ApiError ──► caller│
//! │         │                                         ▲                │
//! │  Bad credentials? ─ Unauthorized ─────────────────┘                │
//! │                                                                     │
//! │  Callers receive { code, message }; `http_status()` gives the      │
//! │  status an HTTP adapter should answer with.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use stockbook_core::CoreError;
use stockbook_store::{LedgerError, StoreError};

/// API error returned from boundary operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock. Available: 2, Requested: 10"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Login failed (401)
    Unauthorized,

    /// Resource not found (404)
    NotFound,

    /// Malformed input or uniqueness violation (400)
    ValidationError,

    /// OUT movement exceeds available stock (400)
    InsufficientStock,

    /// Internal fault: store corruption, unreachable paths (500)
    Internal,
}

impl ErrorCode {
    /// The HTTP status an adapter should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::Unauthorized => 401,
            ErrorCode::NotFound => 404,
            ErrorCode::ValidationError => 400,
            ErrorCode::InsufficientStock => 400,
            ErrorCode::Internal => 500,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error. The message never says whether the
    /// username or the password was wrong.
    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Invalid credentials")
    }

    /// Creates an internal error with a generic caller-facing message.
    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, "Internal server error")
    }
}

/// Converts business rule violations to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound { .. } => ApiError::not_found("Product"),
            CoreError::DuplicateSku { .. } => ApiError::validation("SKU already exists"),
            CoreError::DuplicateUsername { .. } => ApiError::validation("Username already exists"),
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!("Insufficient stock. Available: {available}, Requested: {requested}"),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts backend faults to API errors. The actual error is logged here;
/// callers get a generic message to avoid leaking internal detail.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store fault at boundary");
        ApiError::internal()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Core(e) => e.into(),
            LedgerError::Store(e) => e.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_maps_with_amounts() {
        let err: ApiError = CoreError::InsufficientStock {
            sku: "W-1".to_string(),
            available: 2,
            requested: 10,
        }
        .into();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock. Available: 2, Requested: 10");
        assert_eq!(err.code.http_status(), 400);
    }

    #[test]
    fn test_store_faults_do_not_leak_detail() {
        let err: ApiError = StoreError::Internal("page 12 checksum mismatch".to_string()).into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(!err.message.contains("checksum"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::unauthorized().code.http_status(), 401);
        assert_eq!(ApiError::not_found("Product").code.http_status(), 404);
        assert_eq!(ApiError::validation("bad").code.http_status(), 400);
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let json = serde_json::to_string(&ApiError::not_found("Product")).unwrap();
        assert!(json.contains("\"NOT_FOUND\""));
        assert!(json.contains("Product not found"));
    }
}
