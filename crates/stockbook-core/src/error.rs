//! # Error Types
//!
//! Domain-specific error types for stockbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  stockbook-core errors (this file)                                  │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockbook-store errors (separate crate)                            │
//! │  └── StoreError       - Storage backend faults                      │
//! │                                                                     │
//! │  stockbook-api errors (boundary crate)                              │
//! │  └── ApiError         - What callers see (serialized)               │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, id, quantities)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable at the request boundary

use thiserror::Error;

use crate::types::EntityId;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// These are caught at the boundary and translated to client-facing
/// responses; none are fatal to the process.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// Product lookup miss, or a transaction referencing an unknown product.
    #[error("Product not found: {id}")]
    ProductNotFound { id: EntityId },

    /// Another product already holds the requested SKU.
    ///
    /// Raised both at create time and when an update moves a product onto
    /// a SKU held by a *different* product.
    #[error("SKU already exists: {sku}")]
    DuplicateSku { sku: String },

    /// Another user already holds the requested username.
    #[error("Username already exists: {username}")]
    DuplicateUsername { username: String },

    /// An OUT movement requested more than the available stock.
    ///
    /// Carries both amounts so the boundary can name them in the failure
    /// detail, e.g. "available 2, requested 10".
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a field doesn't meet requirements, before business logic
/// runs. Surfaced with field-level detail.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be a positive integer.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value exceeds the accepted maximum.
    #[error("{field} must be at most {max}")]
    ExceedsMaximum { field: String, max: i64 },

    /// Invalid format (e.g. SKU with forbidden characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
