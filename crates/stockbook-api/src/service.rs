//! # Inventory API Service
//!
//! The operation table of the request/response boundary. Each method maps
//! one logical operation: DTO in, DTO out, `ApiError` on failure.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Boundary Operation Flow                        │
//! │                                                                     │
//! │  adapter ──► InventoryApi::create_transaction(request)              │
//! │                   │                                                 │
//! │                   ▼                                                 │
//! │              DTO → domain input                                     │
//! │                   │                                                 │
//! │                   ▼                                                 │
//! │              Ledger::create_transaction (rules + locking)           │
//! │                   │                                                 │
//! │         ┌─────────┴──────────┐                                      │
//! │         ▼                    ▼                                      │
//! │     Ok(domain)          Err(LedgerError)                            │
//! │         │                    │                                      │
//! │         ▼                    ▼                                      │
//! │     domain → DTO        ApiError { code, message }                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use stockbook_core::EntityId;
use stockbook_store::{EntityStore, Ledger};

use crate::auth;
use crate::dto::{
    CreateProductRequest, CreateTransactionRequest, DeleteResponse, LoginRequest, LoginResponse,
    ProductDto, RegisterUserRequest, StatsDto, TransactionDto, TransactionWithProductDto,
    UpdateProductRequest, UserDto,
};
use crate::error::ApiError;

/// The boundary service: the logical operations any transport adapter
/// exposes.
pub struct InventoryApi<S: EntityStore> {
    ledger: Ledger<S>,
}

impl<S: EntityStore> InventoryApi<S> {
    /// Creates the service over an injected store.
    pub fn new(store: Arc<S>) -> Self {
        InventoryApi {
            ledger: Ledger::new(store),
        }
    }

    /// Returns the underlying ledger, for drivers that need direct access.
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    /// Checks credentials and echoes the public user view.
    ///
    /// Fails with `UNAUTHORIZED` on an unknown username or a wrong
    /// password, without revealing which.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        debug!(username = %request.username, "login attempt");

        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(ApiError::validation("Username and password are required"));
        }

        let user = self
            .ledger
            .get_user_by_username(&request.username)
            .await?
            .ok_or_else(ApiError::unauthorized)?;

        if !auth::verify_password(&request.password, &user.password_hash) {
            return Err(ApiError::unauthorized());
        }

        info!(id = user.id, username = %user.username, "login succeeded");
        Ok(LoginResponse {
            success: true,
            user: user.into(),
        })
    }

    /// Creates an operator account, hashing the password before storage.
    pub async fn register_user(&self, request: RegisterUserRequest) -> Result<UserDto, ApiError> {
        if request.password.is_empty() {
            return Err(ApiError::validation("password is required"));
        }

        let password_hash = auth::hash_password(&request.password)?;
        let user = self
            .ledger
            .create_user(stockbook_core::NewUser {
                username: request.username,
                password_hash,
            })
            .await?;
        Ok(user.into())
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Lists the whole catalog.
    pub async fn list_products(&self) -> Result<Vec<ProductDto>, ApiError> {
        let products = self.ledger.list_products().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Fetches one product, or `NOT_FOUND`.
    pub async fn get_product(&self, id: EntityId) -> Result<ProductDto, ApiError> {
        debug!(id, "get_product");
        let product = self
            .ledger
            .get_product(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Product"))?;
        Ok(product.into())
    }

    /// Creates a product.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductDto, ApiError> {
        let product = self.ledger.create_product(request.into()).await?;
        Ok(product.into())
    }

    /// Applies a partial update to a product.
    pub async fn update_product(
        &self,
        id: EntityId,
        request: UpdateProductRequest,
    ) -> Result<ProductDto, ApiError> {
        let product = self.ledger.update_product(id, request.into()).await?;
        Ok(product.into())
    }

    /// Deletes a product, answering `NOT_FOUND` when it never existed.
    pub async fn delete_product(&self, id: EntityId) -> Result<DeleteResponse, ApiError> {
        let existed = self.ledger.delete_product(id).await?;
        if !existed {
            return Err(ApiError::not_found("Product"));
        }
        Ok(DeleteResponse {
            message: "Product deleted successfully".to_string(),
        })
    }

    // -------------------------------------------------------------------------
    // Transactions
    // -------------------------------------------------------------------------

    /// Lists all movements joined with product snapshots, newest first.
    pub async fn list_transactions(&self) -> Result<Vec<TransactionWithProductDto>, ApiError> {
        let joined = self.ledger.list_transactions().await?;
        Ok(joined
            .into_iter()
            .map(TransactionWithProductDto::from)
            .collect())
    }

    /// Same, filtered to one product.
    pub async fn list_transactions_by_product(
        &self,
        product_id: EntityId,
    ) -> Result<Vec<TransactionWithProductDto>, ApiError> {
        let joined = self.ledger.list_transactions_by_product(product_id).await?;
        Ok(joined
            .into_iter()
            .map(TransactionWithProductDto::from)
            .collect())
    }

    /// Records a stock movement.
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<TransactionDto, ApiError> {
        let transaction = self.ledger.create_transaction(request.into()).await?;
        Ok(transaction.into())
    }

    // -------------------------------------------------------------------------
    // Stats
    // -------------------------------------------------------------------------

    /// Derives the dashboard counters.
    pub async fn stats(&self) -> Result<StatsDto, ApiError> {
        let stats = self.ledger.stats().await?;
        Ok(stats.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockbook_core::TransactionKind;
    use stockbook_store::MemoryStore;

    fn api() -> InventoryApi<MemoryStore> {
        InventoryApi::new(Arc::new(MemoryStore::new()))
    }

    fn widget_request(stock: i64) -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            category: "Tools".to_string(),
            current_stock: stock,
        }
    }

    #[tokio::test]
    async fn test_widget_scenario_end_to_end() {
        let api = api();
        let product = api.create_product(widget_request(5)).await.unwrap();

        api.create_transaction(CreateTransactionRequest {
            product_id: product.id,
            kind: TransactionKind::Out,
            quantity: 3,
        })
        .await
        .unwrap();

        assert_eq!(api.get_product(product.id).await.unwrap().current_stock, 2);

        let err = api
            .create_transaction(CreateTransactionRequest {
                product_id: product.id,
                kind: TransactionKind::Out,
                quantity: 10,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock. Available: 2, Requested: 10");
        assert_eq!(api.get_product(product.id).await.unwrap().current_stock, 2);
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_bad_request() {
        let api = api();
        api.create_product(widget_request(5)).await.unwrap();

        let err = api.create_product(widget_request(0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "SKU already exists");
        assert_eq!(err.code.http_status(), 400);

        assert_eq!(api.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_transaction_for_unknown_product_is_not_found() {
        let api = api();
        let err = api
            .create_transaction(CreateTransactionRequest {
                product_id: 9999,
                kind: TransactionKind::In,
                quantity: 1,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(api.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_roundtrip_and_rejection() {
        let api = api();
        api.register_user(RegisterUserRequest {
            username: "admin".to_string(),
            password: "password".to_string(),
        })
        .await
        .unwrap();

        let response = api
            .login(LoginRequest {
                username: "admin".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.user.username, "admin");

        let err = api
            .login(LoginRequest {
                username: "admin".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");

        let err = api
            .login(LoginRequest {
                username: "nobody".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn test_update_and_delete_product() {
        let api = api();
        let product = api.create_product(widget_request(5)).await.unwrap();

        let updated = api
            .update_product(
                product.id,
                UpdateProductRequest {
                    name: Some("Widget Pro".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Widget Pro");
        assert_eq!(updated.sku, "W-1");

        let confirmation = api.delete_product(product.id).await.unwrap();
        assert_eq!(confirmation.message, "Product deleted successfully");

        let err = api.delete_product(product.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_input_is_validation_error() {
        let api = api();
        let err = api
            .create_product(CreateProductRequest {
                name: "Widget".to_string(),
                sku: "has space".to_string(),
                category: "Tools".to_string(),
                current_stock: 0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_listing_joined_and_filtered() {
        let api = api();
        let product = api.create_product(widget_request(10)).await.unwrap();
        let other = api
            .create_product(CreateProductRequest {
                name: "Gadget".to_string(),
                sku: "G-1".to_string(),
                category: "Tools".to_string(),
                current_stock: 10,
            })
            .await
            .unwrap();

        for (id, quantity) in [(product.id, 4), (other.id, 6)] {
            api.create_transaction(CreateTransactionRequest {
                product_id: id,
                kind: TransactionKind::In,
                quantity,
            })
            .await
            .unwrap();
        }

        let all = api.list_transactions().await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first.
        assert_eq!(all[0].transaction.quantity, 6);

        let filtered = api.list_transactions_by_product(other.id).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product.sku, "G-1");
    }

    #[tokio::test]
    async fn test_stats_counters() {
        let api = api();
        let product = api.create_product(widget_request(5)).await.unwrap();
        api.create_transaction(CreateTransactionRequest {
            product_id: product.id,
            kind: TransactionKind::In,
            quantity: 50,
        })
        .await
        .unwrap();
        api.create_transaction(CreateTransactionRequest {
            product_id: product.id,
            kind: TransactionKind::Out,
            quantity: 45,
        })
        .await
        .unwrap();

        let stats = api.stats().await.unwrap();
        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.total_stock_in, 50);
        assert_eq!(stats.total_stock_out, 45);
        assert_eq!(stats.low_stock_count, 1); // stock is 10 after the moves
    }
}
