//! # Store and Ledger Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  Backend fault (durable engine, future)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Generic server-fault category          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  LedgerError ← Joins backend faults with CoreError rule violations │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ApiError (boundary crate) ← Serialized for callers                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-memory backend is infallible; `StoreError` exists so a durable
//! backend can report faults through the same seam, kept distinct from the
//! domain errors so the boundary can answer "we failed" instead of "your
//! request was bad" without leaking internals.

use thiserror::Error;

use stockbook_core::CoreError;

// =============================================================================
// Store Error
// =============================================================================

/// Storage backend faults.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend cannot be reached or is not ready.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// Unexpected backend failure (corruption, unreachable code paths).
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Ledger Error
// =============================================================================

/// Failures surfaced by the ledger operations: either a business rule
/// violation or a backend fault.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Business rule violation (recoverable at the request boundary).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage backend fault.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<stockbook_core::ValidationError> for LedgerError {
    fn from(err: stockbook_core::ValidationError) -> Self {
        LedgerError::Core(CoreError::Validation(err))
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through_transparently() {
        let err: LedgerError = CoreError::ProductNotFound { id: 9999 }.into();
        assert_eq!(err.to_string(), "Product not found: 9999");
    }

    #[test]
    fn test_validation_error_wraps_into_core() {
        let err: LedgerError = stockbook_core::ValidationError::Required {
            field: "sku".to_string(),
        }
        .into();
        assert!(matches!(err, LedgerError::Core(CoreError::Validation(_))));
    }
}
