//! # Domain Types
//!
//! Core domain types used throughout stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌─────────────────┐    │
//! │  │    Product      │  │ StockTransaction │  │      User       │    │
//! │  │  ─────────────  │  │  ──────────────  │  │  ─────────────  │    │
//! │  │  id (i64)       │  │  id (i64)        │  │  id (i64)       │    │
//! │  │  sku (unique)   │  │  product_id (FK) │  │  username       │    │
//! │  │  name           │  │  kind (IN/OUT)   │  │  password_hash  │    │
//! │  │  category       │  │  quantity        │  └─────────────────┘    │
//! │  │  current_stock  │  │  timestamp       │                         │
//! │  └─────────────────┘  └──────────────────┘                         │
//! │                                                                     │
//! │  ┌──────────────────────┐  ┌─────────────────┐                     │
//! │  │ TransactionWith      │  │ InventoryStats  │                     │
//! │  │ Product (join view)  │  │ (pure read-only │                     │
//! │  │                      │  │  projection)    │                     │
//! │  └──────────────────────┘  └─────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Every entity carries an `i64` id assigned by the store from a
//! per-entity-kind monotonic counter. Ids start at 1 and are never reused,
//! even after deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity identifier. Issued by the store, immutable after creation.
pub type EntityId = i64;

// =============================================================================
// Transaction Kind
// =============================================================================

/// Direction of a stock movement.
///
/// Wire representation is the upper-case string (`"IN"` / `"OUT"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Stock received into inventory.
    #[serde(rename = "IN")]
    In,
    /// Stock dispatched out of inventory.
    #[serde(rename = "OUT")]
    Out,
}

impl TransactionKind {
    /// Signed stock delta for a movement of `quantity` in this direction.
    #[inline]
    pub fn signed_delta(&self, quantity: i64) -> i64 {
        match self {
            TransactionKind::In => quantity,
            TransactionKind::Out => -quantity,
        }
    }

    /// Wire label (`"IN"` / `"OUT"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::In => "IN",
            TransactionKind::Out => "OUT",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product with its current stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned on creation, immutable thereafter.
    pub id: EntityId,

    /// Display name shown to the operator.
    pub name: String,

    /// Stock Keeping Unit - unique business identifier (case-sensitive).
    pub sku: String,

    /// Free-text category. The UI offers suggestions but any string is
    /// accepted and stored verbatim.
    pub category: String,

    /// Current stock level. Invariant: never negative.
    pub current_stock: i64,
}

impl Product {
    /// Whether this product counts as low stock (at or below the threshold,
    /// zero included).
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= crate::LOW_STOCK_THRESHOLD
    }

    /// Applies a signed stock delta, clamping the result to a floor of zero.
    ///
    /// The clamp is defensive: the ledger's pre-check already rejects OUT
    /// movements that exceed available stock, so a negative intermediate
    /// value is unreachable through the public operations. The addition
    /// saturates for the same reason: the input caps keep real inputs far
    /// from the `i64` limits, and saturation keeps even a pathological
    /// delta from panicking or wrapping.
    #[inline]
    pub fn adjusted_stock(&self, delta: i64) -> i64 {
        self.current_stock.saturating_add(delta).max(0)
    }
}

/// Input shape for creating a product. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Initial stock level. Defaults to 0 when omitted at the boundary.
    #[serde(default)]
    pub current_stock: i64,
}

/// Partial update for a product. `None` fields are preserved unchanged;
/// full replace is not supported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub current_stock: Option<i64>,
}

impl ProductPatch {
    /// True when no field is set (a no-op merge).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.category.is_none()
            && self.current_stock.is_none()
    }

    /// Merges this patch into `product`, preserving unspecified fields.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(stock) = self.current_stock {
            product.current_stock = stock;
        }
    }
}

// =============================================================================
// Stock Transaction
// =============================================================================

/// A recorded stock movement. Append-only: no update or delete is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTransaction {
    /// Unique identifier, assigned on creation, immutable.
    pub id: EntityId,

    /// The product this movement applies to. Must resolve at creation time;
    /// may dangle later if the product is deleted.
    pub product_id: EntityId,

    /// Movement direction.
    pub kind: TransactionKind,

    /// Units moved. Always >= 1.
    pub quantity: i64,

    /// Creation instant, captured by the store. Immutable.
    pub timestamp: DateTime<Utc>,
}

/// Input shape for recording a stock movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub product_id: EntityId,
    pub kind: TransactionKind,
    pub quantity: i64,
}

/// A transaction joined with the current snapshot of its product.
///
/// Produced by the listing queries, which drop transactions whose product
/// no longer exists (left join with drop-on-miss).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionWithProduct {
    pub transaction: StockTransaction,
    pub product: Product,
}

// =============================================================================
// User
// =============================================================================

/// An operator account. Used only for the login check.
///
/// The reference system stored plaintext passwords; stockbook stores an
/// argon2 PHC hash string instead and compares through the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    /// Unique login name.
    pub username: String,
    /// Argon2 PHC string. Never serialized out through the boundary DTOs.
    pub password_hash: String,
}

/// Input shape for creating a user. The password is already hashed by the
/// time it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

// =============================================================================
// Inventory Stats
// =============================================================================

/// Summary counters derived from the current store contents.
///
/// Purely derived, recomputed on every call; no caching, no state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Count of all products.
    pub total_products: usize,
    /// Sum of quantities over all IN transactions.
    pub total_stock_in: i64,
    /// Sum of quantities over all OUT transactions.
    pub total_stock_out: i64,
    /// Count of products with stock at or below [`crate::LOW_STOCK_THRESHOLD`].
    pub low_stock_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            category: "Tools".to_string(),
            current_stock: 5,
        }
    }

    #[test]
    fn test_signed_delta() {
        assert_eq!(TransactionKind::In.signed_delta(7), 7);
        assert_eq!(TransactionKind::Out.signed_delta(7), -7);
    }

    #[test]
    fn test_kind_wire_format() {
        assert_eq!(serde_json::to_string(&TransactionKind::In).unwrap(), "\"IN\"");
        assert_eq!(serde_json::to_string(&TransactionKind::Out).unwrap(), "\"OUT\"");
        let kind: TransactionKind = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(kind, TransactionKind::Out);
    }

    #[test]
    fn test_adjusted_stock_clamps_at_zero() {
        let product = widget();
        assert_eq!(product.adjusted_stock(3), 8);
        assert_eq!(product.adjusted_stock(-3), 2);
        assert_eq!(product.adjusted_stock(-10), 0);
    }

    #[test]
    fn test_adjusted_stock_saturates_instead_of_overflowing() {
        let mut product = widget();
        assert_eq!(product.adjusted_stock(i64::MAX), i64::MAX);

        product.current_stock = i64::MAX - 1;
        assert_eq!(product.adjusted_stock(i64::MAX), i64::MAX);
        assert_eq!(product.adjusted_stock(i64::MIN), 0);
    }

    #[test]
    fn test_low_stock_threshold_inclusive() {
        let mut product = widget();
        product.current_stock = crate::LOW_STOCK_THRESHOLD;
        assert!(product.is_low_stock());
        product.current_stock = crate::LOW_STOCK_THRESHOLD + 1;
        assert!(!product.is_low_stock());
        product.current_stock = 0;
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_patch_preserves_unspecified_fields() {
        let mut product = widget();
        let patch = ProductPatch {
            name: Some("Widget Pro".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.name, "Widget Pro");
        assert_eq!(product.sku, "W-1");
        assert_eq!(product.category, "Tools");
        assert_eq!(product.current_stock, 5);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            current_stock: Some(0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_new_product_stock_defaults_to_zero() {
        let parsed: NewProduct =
            serde_json::from_str(r#"{"name":"Widget","sku":"W-1","category":"Tools"}"#).unwrap();
        assert_eq!(parsed.current_stock, 0);
    }
}
