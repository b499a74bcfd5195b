//! # Entity Store Trait
//!
//! The swappable-backend seam between the ledger operations and whatever
//! holds the records.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      EntityStore Backends                           │
//! │                                                                     │
//! │  Ledger<S: EntityStore>                                             │
//! │       │                                                             │
//! │       ├──► MemoryStore   (this crate; tests + reference runtime)   │
//! │       │                                                             │
//! │       └──► durable engine (future; must preserve the field set,    │
//! │            uniqueness and foreign-key constraints, and map engine  │
//! │            faults to StoreError)                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The trait is kind-level only: it stores and retrieves records without
//! enforcing cross-record rules. SKU uniqueness, stock availability, and
//! foreign-key resolution live in the [`Ledger`](crate::Ledger), which also
//! provides the mutual exclusion the check-then-act sequences need.

use stockbook_core::{
    EntityId, NewProduct, NewTransaction, NewUser, Product, ProductPatch, StockTransaction, User,
};

use crate::error::StoreResult;

/// Keyed storage for the three entity kinds with monotonic id issuance.
///
/// Implementations must never reuse an id after deletion and must return
/// `Ok(None)` / `Ok(false)` (not an error) for absent records.
pub trait EntityStore: Send + Sync + 'static {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Returns the user with `id`, if present.
    fn get_user(&self, id: EntityId) -> StoreResult<Option<User>>;

    /// Returns the user holding `username`, if any.
    fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Stores a new user, assigning the next user id.
    fn insert_user(&self, input: NewUser) -> StoreResult<User>;

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Returns the product with `id`, if present.
    fn get_product(&self, id: EntityId) -> StoreResult<Option<Product>>;

    /// Returns the product holding `sku` (case-sensitive), if any.
    fn get_product_by_sku(&self, sku: &str) -> StoreResult<Option<Product>>;

    /// Returns all products. No ordering guarantee at this layer.
    fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Stores a new product, assigning the next product id. Never fails at
    /// the kind level; uniqueness is the ledger's rule.
    fn insert_product(&self, input: NewProduct) -> StoreResult<Product>;

    /// Merges `patch` into the product with `id`, preserving unspecified
    /// fields. Returns the updated product, or `None` if the id is absent.
    fn update_product(&self, id: EntityId, patch: &ProductPatch) -> StoreResult<Option<Product>>;

    /// Removes the product with `id`. Returns whether a record existed.
    /// Referencing transactions are left untouched.
    fn delete_product(&self, id: EntityId) -> StoreResult<bool>;

    // -------------------------------------------------------------------------
    // Transactions (append-only)
    // -------------------------------------------------------------------------

    /// Returns all transactions. No ordering guarantee at this layer.
    fn list_transactions(&self) -> StoreResult<Vec<StockTransaction>>;

    /// Stores a new transaction, assigning the next transaction id and the
    /// creation-time timestamp.
    fn insert_transaction(&self, input: NewTransaction) -> StoreResult<StockTransaction>;
}
