//! # Boundary DTOs
//!
//! Request and response shapes for the boundary operations.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the wire contract
//! - Allows selective field exposure (a user's hash never leaves)
//! - Handles serde rename to camelCase for JS consumption
//!
//! The transaction direction field keeps its original wire name `type`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{
    EntityId, InventoryStats, NewProduct, NewTransaction, Product, ProductPatch, StockTransaction,
    TransactionKind, TransactionWithProduct, User,
};

// =============================================================================
// Auth
// =============================================================================

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login echo. Only id and username; never the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserDto,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: EntityId,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        UserDto {
            id: u.id,
            username: u.username,
        }
    }
}

/// Account creation payload. The password is hashed before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Products
// =============================================================================

/// Public view of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: EntityId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub current_stock: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            sku: p.sku,
            category: p.category,
            current_stock: p.current_stock,
        }
    }
}

/// Product creation payload. `currentStock` defaults to 0 when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub category: String,
    #[serde(default)]
    pub current_stock: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(r: CreateProductRequest) -> Self {
        NewProduct {
            name: r.name,
            sku: r.sku,
            category: r.category,
            current_stock: r.current_stock,
        }
    }
}

/// Partial product update payload. Absent fields are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub current_stock: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(r: UpdateProductRequest) -> Self {
        ProductPatch {
            name: r.name,
            sku: r.sku,
            category: r.category,
            current_stock: r.current_stock,
        }
    }
}

/// Delete confirmation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
}

// =============================================================================
// Transactions
// =============================================================================

/// Public view of a stock movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: EntityId,
    pub product_id: EntityId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    pub timestamp: DateTime<Utc>,
}

impl From<StockTransaction> for TransactionDto {
    fn from(t: StockTransaction) -> Self {
        TransactionDto {
            id: t.id,
            product_id: t.product_id,
            kind: t.kind,
            quantity: t.quantity,
            timestamp: t.timestamp,
        }
    }
}

/// Movement creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub product_id: EntityId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
}

impl From<CreateTransactionRequest> for NewTransaction {
    fn from(r: CreateTransactionRequest) -> Self {
        NewTransaction {
            product_id: r.product_id,
            kind: r.kind,
            quantity: r.quantity,
        }
    }
}

/// A movement joined with the current snapshot of its product, as the
/// listing operations return it: transaction fields at the top level plus
/// an embedded `product`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithProductDto {
    #[serde(flatten)]
    pub transaction: TransactionDto,
    pub product: ProductDto,
}

impl From<TransactionWithProduct> for TransactionWithProductDto {
    fn from(t: TransactionWithProduct) -> Self {
        TransactionWithProductDto {
            transaction: t.transaction.into(),
            product: t.product.into(),
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Dashboard counters payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_products: usize,
    pub total_stock_in: i64,
    pub total_stock_out: i64,
    pub low_stock_count: usize,
}

impl From<InventoryStats> for StatsDto {
    fn from(s: InventoryStats) -> Self {
        StatsDto {
            total_products: s.total_products,
            total_stock_in: s.total_stock_in,
            total_stock_out: s.total_stock_out,
            low_stock_count: s.low_stock_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_product_dto_uses_camel_case() {
        let dto = ProductDto {
            id: 1,
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            category: "Tools".to_string(),
            current_stock: 5,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"currentStock\":5"));
    }

    #[test]
    fn test_transaction_dto_kind_serializes_as_type() {
        let dto = TransactionDto {
            id: 1,
            product_id: 2,
            kind: TransactionKind::Out,
            quantity: 3,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"type\":\"OUT\""));
        assert!(json.contains("\"productId\":2"));
    }

    #[test]
    fn test_create_product_request_stock_defaults() {
        let parsed: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Widget","sku":"W-1","category":"Tools"}"#).unwrap();
        assert_eq!(parsed.current_stock, 0);
    }

    #[test]
    fn test_joined_dto_flattens_transaction_fields() {
        let dto = TransactionWithProductDto {
            transaction: TransactionDto {
                id: 7,
                product_id: 1,
                kind: TransactionKind::In,
                quantity: 50,
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            product: ProductDto {
                id: 1,
                name: "Widget".to_string(),
                sku: "W-1".to_string(),
                category: "Tools".to_string(),
                current_stock: 55,
            },
        };
        let value: serde_json::Value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["quantity"], 50);
        assert_eq!(value["product"]["sku"], "W-1");
    }

    #[test]
    fn test_create_transaction_request_parses_wire_type() {
        let parsed: CreateTransactionRequest =
            serde_json::from_str(r#"{"productId":3,"type":"IN","quantity":25}"#).unwrap();
        assert_eq!(parsed.product_id, 3);
        assert_eq!(parsed.kind, TransactionKind::In);
    }
}
