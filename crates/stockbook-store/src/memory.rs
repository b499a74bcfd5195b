//! # In-Memory Store
//!
//! The reference `EntityStore` backend: three keyed tables behind one
//! `RwLock`. No persistence across restarts.
//!
//! ## Thread Safety
//! All tables sit behind a single `std::sync::RwLock`, so every individual
//! store operation is atomic and reads may run concurrently. Sequences that
//! span several operations (check-then-act) get their mutual exclusion from
//! the [`Ledger`](crate::Ledger), not from here.

use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;

use stockbook_core::{
    EntityId, NewProduct, NewTransaction, NewUser, Product, ProductPatch, StockTransaction, User,
};

use crate::error::StoreResult;
use crate::store::EntityStore;
use crate::table::Table;

/// The three entity tables. Each has its own independent id counter.
#[derive(Debug, Default)]
struct Tables {
    users: Table<User>,
    products: Table<Product>,
    transactions: Table<StockTransaction>,
}

/// In-memory entity store.
///
/// Constructed explicitly and passed into the ledger; there is no ambient
/// global instance, so tests get isolated stores for free.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore {
            inner: RwLock::new(Tables::default()),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.inner.write().expect("store lock poisoned")
    }
}

impl EntityStore for MemoryStore {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    fn get_user(&self, id: EntityId) -> StoreResult<Option<User>> {
        Ok(self.read().users.get(id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.read().users.find(|u| u.username == username).cloned())
    }

    fn insert_user(&self, input: NewUser) -> StoreResult<User> {
        let user = self.write().users.insert_with(|id| User {
            id,
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
        });
        debug!(id = user.id, username = %user.username, "user stored");
        Ok(user)
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    fn get_product(&self, id: EntityId) -> StoreResult<Option<Product>> {
        Ok(self.read().products.get(id).cloned())
    }

    fn get_product_by_sku(&self, sku: &str) -> StoreResult<Option<Product>> {
        Ok(self.read().products.find(|p| p.sku == sku).cloned())
    }

    fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read().products.list())
    }

    fn insert_product(&self, input: NewProduct) -> StoreResult<Product> {
        let product = self.write().products.insert_with(|id| Product {
            id,
            name: input.name.clone(),
            sku: input.sku.clone(),
            category: input.category.clone(),
            current_stock: input.current_stock,
        });
        debug!(id = product.id, sku = %product.sku, "product stored");
        Ok(product)
    }

    fn update_product(&self, id: EntityId, patch: &ProductPatch) -> StoreResult<Option<Product>> {
        Ok(self.write().products.update(id, |p| patch.apply_to(p)))
    }

    fn delete_product(&self, id: EntityId) -> StoreResult<bool> {
        let existed = self.write().products.remove(id);
        debug!(id, existed, "product delete");
        Ok(existed)
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    fn list_transactions(&self) -> StoreResult<Vec<StockTransaction>> {
        Ok(self.read().transactions.list())
    }

    fn insert_transaction(&self, input: NewTransaction) -> StoreResult<StockTransaction> {
        let transaction = self.write().transactions.insert_with(|id| StockTransaction {
            id,
            product_id: input.product_id,
            kind: input.kind,
            quantity: input.quantity,
            // Creation instant captured here; immutable afterwards.
            timestamp: Utc::now(),
        });
        debug!(
            id = transaction.id,
            product_id = transaction.product_id,
            kind = %transaction.kind,
            quantity = transaction.quantity,
            "transaction stored"
        );
        Ok(transaction)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::TransactionKind;

    fn new_product(sku: &str, stock: i64) -> NewProduct {
        NewProduct {
            name: format!("Product {sku}"),
            sku: sku.to_string(),
            category: "Test".to_string(),
            current_stock: stock,
        }
    }

    #[test]
    fn test_counters_are_independent_per_kind() {
        let store = MemoryStore::new();

        let product = store.insert_product(new_product("A-1", 3)).unwrap();
        let transaction = store
            .insert_transaction(NewTransaction {
                product_id: product.id,
                kind: TransactionKind::In,
                quantity: 3,
            })
            .unwrap();
        let user = store
            .insert_user(NewUser {
                username: "admin".to_string(),
                password_hash: "hash".to_string(),
            })
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(transaction.id, 1);
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_sku_lookup_is_case_sensitive() {
        let store = MemoryStore::new();
        store.insert_product(new_product("ABC", 0)).unwrap();

        assert!(store.get_product_by_sku("ABC").unwrap().is_some());
        assert!(store.get_product_by_sku("abc").unwrap().is_none());
    }

    #[test]
    fn test_update_product_merges_partially() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product("A-1", 5)).unwrap();

        let patch = ProductPatch {
            current_stock: Some(2),
            ..Default::default()
        };
        let updated = store.update_product(product.id, &patch).unwrap().unwrap();

        assert_eq!(updated.current_stock, 2);
        assert_eq!(updated.sku, "A-1");
        assert_eq!(updated.name, product.name);
    }

    #[test]
    fn test_delete_leaves_transactions_in_place() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product("A-1", 5)).unwrap();
        store
            .insert_transaction(NewTransaction {
                product_id: product.id,
                kind: TransactionKind::Out,
                quantity: 1,
            })
            .unwrap();

        assert!(store.delete_product(product.id).unwrap());
        // The transaction dangles; joined queries drop it, the raw list keeps it.
        assert_eq!(store.list_transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_absent_lookups_return_none_not_error() {
        let store = MemoryStore::new();
        assert!(store.get_product(9999).unwrap().is_none());
        assert!(store.get_user(9999).unwrap().is_none());
        assert!(!store.delete_product(9999).unwrap());
        assert!(store
            .update_product(9999, &ProductPatch::default())
            .unwrap()
            .is_none());
    }
}
