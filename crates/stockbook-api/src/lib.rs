//! # stockbook-api: Request/Response Boundary
//!
//! The logical operations table consumed by any driver: an HTTP adapter,
//! a test harness, or the bundled demo binary. Transport wiring is an
//! external collaborator; this crate owns the contract.
//!
//! ## Boundary Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     InventoryApi Operations                         │
//! │                                                                     │
//! │  login                         UNAUTHORIZED on bad credentials      │
//! │  list_products                                                      │
//! │  get_product                   NOT_FOUND                            │
//! │  create_product                VALIDATION_ERROR (dup sku/malformed) │
//! │  update_product                NOT_FOUND / VALIDATION_ERROR         │
//! │  delete_product                NOT_FOUND                            │
//! │  list_transactions             newest first                         │
//! │  list_transactions_by_product  newest first, filtered               │
//! │  create_transaction            NOT_FOUND / INSUFFICIENT_STOCK       │
//! │  stats                                                              │
//! │                                                                     │
//! │  Store faults surface as INTERNAL with a generic message; the      │
//! │  real error is logged, never leaked.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - `InventoryApi`, the operation table
//! - [`dto`] - camelCase request/response shapes
//! - [`error`] - `ApiError` with machine-readable codes + HTTP mapping
//! - [`auth`] - argon2 password hashing and verification
//! - [`config`] - environment-driven configuration
//! - [`seed`] - admin bootstrap and demo sample data

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod seed;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use service::InventoryApi;
