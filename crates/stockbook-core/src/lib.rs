//! # stockbook-core: Pure Domain Logic for stockbook
//!
//! This crate is the **heart** of stockbook. It contains the inventory
//! domain model and its validation rules as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      stockbook Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │           Transport Adapter (HTTP, test harness, CLI)         │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                 stockbook-api (boundary DTOs)                 │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │           stockbook-store (entity store + ledger)             │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ stockbook-core (THIS CRATE) ★                 │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐              │ │
//! │  │   │   types   │   │   error   │   │ validation│              │ │
//! │  │   │  Product  │   │ CoreError │   │   rules   │              │ │
//! │  │   │ StockTxn  │   │ Validation│   │  checks   │              │ │
//! │  │   └───────────┘   └───────────┘   └───────────┘              │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StockTransaction, User, stats)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Integer Identity**: Entity ids are `i64`, issued monotonically per
//!    entity kind by the store, never reused after deletion

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Product` instead of
// `use stockbook_core::types::Product`

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which a product counts as "low stock".
///
/// Includes zero-stock products. Fixed for now; could become per-tenant
/// configuration later.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Maximum length accepted for a SKU.
pub const MAX_SKU_LENGTH: usize = 50;

/// Maximum length accepted for a product name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum quantity accepted for a single stock movement.
///
/// Keeps stock arithmetic far away from the `i64` limits: with both this
/// and [`MAX_STOCK_LEVEL`] at one billion, a stock adjustment can never
/// overflow.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Maximum stock level accepted as direct input (create or patch).
pub const MAX_STOCK_LEVEL: i64 = 1_000_000_000;
