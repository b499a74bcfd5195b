//! # Inventory Ledger
//!
//! The business rules that span the Product/Transaction boundary.
//!
//! ## Stock Movement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  create_transaction Flow                            │
//! │                                                                     │
//! │  create_transaction(product_id, OUT, 3)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  acquire per-product lock ◄── serializes concurrent movements      │
//! │       │                       on the same product                   │
//! │       ▼                                                             │
//! │  resolve product ── absent? ──► ProductNotFound                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  OUT and quantity > current_stock?                                  │
//! │       │ yes ──► InsufficientStock { available, requested }          │
//! │       ▼ no                                                          │
//! │  insert transaction (server timestamp, new id)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  mutate stock ±quantity, clamped to zero ── one logical unit with  │
//! │       │                                     the insert above        │
//! │       ▼                                                             │
//! │  release lock, return transaction                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! - One `tokio::sync::Mutex` per product id (lazily created) covers every
//!   write that touches that product's state: the check-then-act sequence
//!   of `create_transaction`, the merge in `update_product`, and the
//!   removal in `delete_product`. A stock patch can therefore never
//!   interleave with a movement's read-adjust-write.
//! - A single uniqueness lock covers the SKU-check-then-insert sequence of
//!   `create_product`/`update_product` and the username check of
//!   `create_user`. Lock order is always uniqueness lock before product
//!   lock; `create_transaction` and `delete_product` take only the
//!   product lock.
//! - Lock-map entries are dropped again when the operation learns the
//!   product does not exist (and on deletion), so requests against bogus
//!   ids cannot grow the map without bound.
//! - Reads (`list_*`, `stats`) take no ledger lock; snapshot consistency
//!   comes from the store itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use stockbook_core::{
    validation, CoreError, EntityId, InventoryStats, NewProduct, NewTransaction, NewUser, Product,
    ProductPatch, StockTransaction, TransactionKind, TransactionWithProduct, User,
};

use crate::error::LedgerResult;
use crate::stats::compute_stats;
use crate::store::EntityStore;

/// The inventory ledger: CRUD on products, append-only transactions with
/// the stock-adjustment side effect, and the stats projection.
///
/// Explicitly constructed around an injected store; there is no ambient
/// global instance.
pub struct Ledger<S: EntityStore> {
    store: Arc<S>,
    /// Per-product movement locks, created on first use. Entries for
    /// deleted products are dropped in `delete_product`.
    product_locks: StdMutex<HashMap<EntityId, Arc<Mutex<()>>>>,
    /// Serializes every unique-field check-then-insert (SKU, username).
    unique_lock: Mutex<()>,
}

impl<S: EntityStore> Ledger<S> {
    /// Creates a ledger over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Ledger {
            store,
            product_locks: StdMutex::new(HashMap::new()),
            unique_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Gets (or lazily creates) the movement lock for `product_id`.
    fn product_lock(&self, product_id: EntityId) -> Arc<Mutex<()>> {
        let mut locks = self.product_locks.lock().expect("lock map poisoned");
        locks
            .entry(product_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the lock-map entry for `product_id` if no other task still
    /// holds a reference to it. Called on paths that learned the product
    /// does not exist, after the caller has released its guard and clone;
    /// under the map mutex a strong count of 1 means the map's own `Arc`
    /// is the last one.
    fn discard_lock(&self, product_id: EntityId) {
        let mut locks = self.product_locks.lock().expect("lock map poisoned");
        if let Some(lock) = locks.get(&product_id) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(&product_id);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Creates a product.
    ///
    /// Fails with [`CoreError::DuplicateSku`] if an existing product holds
    /// the same SKU. The check and the insert run under the uniqueness
    /// lock, so concurrent creates cannot both pass the check.
    pub async fn create_product(&self, input: NewProduct) -> LedgerResult<Product> {
        validation::validate_new_product(&input)?;

        let _guard = self.unique_lock.lock().await;

        if let Some(existing) = self.store.get_product_by_sku(&input.sku)? {
            warn!(sku = %input.sku, existing_id = existing.id, "duplicate SKU on create");
            return Err(CoreError::DuplicateSku { sku: input.sku }.into());
        }

        let product = self.store.insert_product(input)?;
        info!(id = product.id, sku = %product.sku, stock = product.current_stock, "product created");
        Ok(product)
    }

    /// Applies a partial update to a product.
    ///
    /// Fails with [`CoreError::ProductNotFound`] if `id` is unknown, and
    /// with [`CoreError::DuplicateSku`] if the patch moves the product onto
    /// a SKU held by a *different* product. Unspecified fields are
    /// preserved. The merge runs under the product's movement lock, so a
    /// stock patch cannot interleave with a concurrent transaction's
    /// read-adjust-write on the same product.
    pub async fn update_product(&self, id: EntityId, patch: ProductPatch) -> LedgerResult<Product> {
        validation::validate_product_patch(&patch)?;

        let _unique = self.unique_lock.lock().await;

        if let Some(sku) = &patch.sku {
            if let Some(existing) = self.store.get_product_by_sku(sku)? {
                if existing.id != id {
                    warn!(sku = %sku, existing_id = existing.id, "duplicate SKU on update");
                    return Err(CoreError::DuplicateSku { sku: sku.clone() }.into());
                }
            }
        }

        let lock = self.product_lock(id);
        let guard = lock.lock().await;
        let updated = self.store.update_product(id, &patch)?;
        drop(guard);
        drop(lock);

        match updated {
            Some(updated) => {
                info!(id, sku = %updated.sku, "product updated");
                Ok(updated)
            }
            None => {
                self.discard_lock(id);
                Err(CoreError::ProductNotFound { id }.into())
            }
        }
    }

    /// Deletes a product. Returns whether a record existed; absence is a
    /// no-op reported as `false`, not a hard error (the caller decides the
    /// exit semantics). Referencing transactions are left in place and
    /// become dangling; joined queries drop them.
    pub async fn delete_product(&self, id: EntityId) -> LedgerResult<bool> {
        let lock = self.product_lock(id);
        let guard = lock.lock().await;
        let existed = self.store.delete_product(id)?;
        drop(guard);
        drop(lock);

        if existed {
            // Ids are never reused, so the entry can go unconditionally; a
            // task still waiting on it will re-read, find nothing, and
            // discard its own entry.
            self.product_locks
                .lock()
                .expect("lock map poisoned")
                .remove(&id);
            info!(id, "product deleted");
        } else {
            self.discard_lock(id);
            debug!(id, "delete of absent product ignored");
        }
        Ok(existed)
    }

    /// Returns the product with `id`, if present.
    pub async fn get_product(&self, id: EntityId) -> LedgerResult<Option<Product>> {
        Ok(self.store.get_product(id)?)
    }

    /// Returns the product holding `sku`, if any.
    pub async fn get_product_by_sku(&self, sku: &str) -> LedgerResult<Option<Product>> {
        Ok(self.store.get_product_by_sku(sku)?)
    }

    /// Returns all products.
    pub async fn list_products(&self) -> LedgerResult<Vec<Product>> {
        Ok(self.store.list_products()?)
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    /// Records a stock movement and adjusts the product's stock as one
    /// logical unit.
    ///
    /// ## Failure Conditions
    /// - [`CoreError::ProductNotFound`] when `product_id` does not resolve;
    ///   nothing is recorded.
    /// - [`CoreError::InsufficientStock`] when an OUT movement requests
    ///   more than the available stock; carries both amounts.
    ///
    /// The per-product lock is held across check, insert, and stock
    /// mutation, so a concurrent movement on the same product cannot
    /// interleave with this sequence.
    pub async fn create_transaction(
        &self,
        input: NewTransaction,
    ) -> LedgerResult<StockTransaction> {
        validation::validate_new_transaction(&input)?;

        let lock = self.product_lock(input.product_id);
        let guard = lock.lock().await;

        let Some(product) = self.store.get_product(input.product_id)? else {
            drop(guard);
            drop(lock);
            self.discard_lock(input.product_id);
            return Err(CoreError::ProductNotFound {
                id: input.product_id,
            }
            .into());
        };

        if input.kind == TransactionKind::Out && input.quantity > product.current_stock {
            warn!(
                sku = %product.sku,
                available = product.current_stock,
                requested = input.quantity,
                "OUT movement rejected"
            );
            return Err(CoreError::InsufficientStock {
                sku: product.sku,
                available: product.current_stock,
                requested: input.quantity,
            }
            .into());
        }

        let transaction = self.store.insert_transaction(input.clone())?;

        // Clamped at zero: unreachable under the pre-check above, kept as a
        // defensive floor rather than a behavioral guarantee.
        let delta = input.kind.signed_delta(input.quantity);
        let stock_patch = ProductPatch {
            current_stock: Some(product.adjusted_stock(delta)),
            ..Default::default()
        };
        self.store.update_product(product.id, &stock_patch)?;

        info!(
            id = transaction.id,
            product_id = product.id,
            kind = %transaction.kind,
            quantity = transaction.quantity,
            "transaction recorded"
        );
        Ok(transaction)
    }

    /// Returns all transactions joined with their current product snapshot,
    /// newest first.
    ///
    /// Left join with drop-on-miss: a transaction whose product was deleted
    /// is omitted. Ordering is a contract: timestamp descending, id
    /// descending as the tie-break so creation order holds even within one
    /// timestamp granule.
    pub async fn list_transactions(&self) -> LedgerResult<Vec<TransactionWithProduct>> {
        let mut joined = Vec::new();
        for transaction in self.store.list_transactions()? {
            if let Some(product) = self.store.get_product(transaction.product_id)? {
                joined.push(TransactionWithProduct {
                    transaction,
                    product,
                });
            }
        }

        joined.sort_by(|a, b| {
            b.transaction
                .timestamp
                .cmp(&a.transaction.timestamp)
                .then(b.transaction.id.cmp(&a.transaction.id))
        });
        Ok(joined)
    }

    /// Same as [`list_transactions`](Self::list_transactions), filtered to
    /// one product.
    pub async fn list_transactions_by_product(
        &self,
        product_id: EntityId,
    ) -> LedgerResult<Vec<TransactionWithProduct>> {
        let mut joined = self.list_transactions().await?;
        joined.retain(|t| t.transaction.product_id == product_id);
        Ok(joined)
    }

    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Creates a user. The password hash is produced by the boundary layer
    /// before the input reaches the ledger.
    pub async fn create_user(&self, input: NewUser) -> LedgerResult<User> {
        validation::validate_username(&input.username).map_err(CoreError::from)?;

        let _guard = self.unique_lock.lock().await;

        if self.store.get_user_by_username(&input.username)?.is_some() {
            return Err(CoreError::DuplicateUsername {
                username: input.username,
            }
            .into());
        }

        let user = self.store.insert_user(input)?;
        info!(id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Returns the user holding `username`, if any.
    pub async fn get_user_by_username(&self, username: &str) -> LedgerResult<Option<User>> {
        Ok(self.store.get_user_by_username(username)?)
    }

    // -------------------------------------------------------------------------
    // Stats
    // -------------------------------------------------------------------------

    /// Derives the dashboard counters from the current store contents.
    pub async fn stats(&self) -> LedgerResult<InventoryStats> {
        let products = self.store.list_products()?;
        let transactions = self.store.list_transactions()?;
        Ok(compute_stats(&products, &transactions))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
