//! # stockbook-store: Entity Store and Inventory Ledger
//!
//! This crate provides keyed storage for the three entity kinds and the
//! ledger operations that enforce the bookkeeping rules around them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       stockbook Data Flow                           │
//! │                                                                     │
//! │  Boundary call (create_transaction)                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  stockbook-store (THIS CRATE)                 │ │
//! │  │                                                               │ │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌─────────────────┐  │ │
//! │  │   │   Ledger    │   │ EntityStore  │   │   MemoryStore   │  │ │
//! │  │   │ (ledger.rs) │──►│   (trait)    │◄──│  (memory.rs)    │  │ │
//! │  │   │             │   │              │   │                 │  │ │
//! │  │   │ rules +     │   │ backend seam │   │ RwLock tables,  │  │ │
//! │  │   │ locking     │   │              │   │ monotonic ids   │  │ │
//! │  │   └─────────────┘   └──────────────┘   └─────────────────┘  │ │
//! │  │                                                               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - Generic keyed table with monotonic id issuance
//! - [`store`] - The `EntityStore` backend trait
//! - [`memory`] - In-memory backend (tests and the reference runtime)
//! - [`ledger`] - Ledger operations spanning the Product/Transaction boundary
//! - [`stats`] - Pure stats aggregation
//! - [`error`] - Store and ledger error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockbook_store::{Ledger, MemoryStore};
//!
//! let ledger = Ledger::new(Arc::new(MemoryStore::new()));
//! let product = ledger.create_product(new_product).await?;
//! let txn = ledger.create_transaction(new_transaction).await?;
//! let stats = ledger.stats().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod memory;
pub mod stats;
pub mod store;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{LedgerError, LedgerResult, StoreError, StoreResult};
pub use ledger::Ledger;
pub use memory::MemoryStore;
pub use stats::compute_stats;
pub use store::EntityStore;
