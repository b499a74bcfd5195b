//! # Bootstrap and Demo Data
//!
//! Startup seeding: the bootstrap admin account, and the sample catalog
//! the reference system shipped with (behind a config flag).

use tracing::info;

use stockbook_core::TransactionKind;
use stockbook_store::EntityStore;

use crate::config::ApiConfig;
use crate::dto::{CreateProductRequest, CreateTransactionRequest, RegisterUserRequest};
use crate::error::ApiError;
use crate::service::InventoryApi;

/// Creates the bootstrap admin account from configuration. Skipped when
/// the username is already taken (idempotent across restarts of a durable
/// backend).
pub async fn bootstrap_admin<S: EntityStore>(
    api: &InventoryApi<S>,
    config: &ApiConfig,
) -> Result<(), ApiError> {
    if api
        .ledger()
        .get_user_by_username(&config.admin_username)
        .await?
        .is_some()
    {
        info!(username = %config.admin_username, "admin account already present");
        return Ok(());
    }

    let user = api
        .register_user(RegisterUserRequest {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        })
        .await?;
    info!(id = user.id, username = %user.username, "admin account created");
    Ok(())
}

/// Seeds the sample catalog: three products across the stock spectrum and
/// one movement each.
pub async fn seed_demo_data<S: EntityStore>(api: &InventoryApi<S>) -> Result<(), ApiError> {
    let samples = [
        ("Wireless Headphones", "WH-001", "Electronics", 145),
        ("Office Chair", "OC-002", "Furniture", 8),
        ("Gaming Keyboard", "GK-003", "Electronics", 0),
    ];

    let mut product_ids = Vec::new();
    for (name, sku, category, stock) in samples {
        let product = api
            .create_product(CreateProductRequest {
                name: name.to_string(),
                sku: sku.to_string(),
                category: category.to_string(),
                current_stock: stock,
            })
            .await?;
        product_ids.push(product.id);
    }

    let movements = [
        (product_ids[0], TransactionKind::In, 50),
        (product_ids[1], TransactionKind::Out, 5),
        (product_ids[2], TransactionKind::In, 25),
    ];
    for (product_id, kind, quantity) in movements {
        api.create_transaction(CreateTransactionRequest {
            product_id,
            kind,
            quantity,
        })
        .await?;
    }

    info!(products = product_ids.len(), movements = movements.len(), "demo data seeded");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockbook_store::MemoryStore;

    fn api() -> InventoryApi<MemoryStore> {
        InventoryApi::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_bootstrap_admin_is_idempotent() {
        let api = api();
        let config = ApiConfig::default();

        bootstrap_admin(&api, &config).await.unwrap();
        bootstrap_admin(&api, &config).await.unwrap();

        let user = api
            .ledger()
            .get_user_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_seed_produces_expected_stats() {
        let api = api();
        seed_demo_data(&api).await.unwrap();

        let stats = api.stats().await.unwrap();
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_stock_in, 75);
        assert_eq!(stats.total_stock_out, 5);
        // Office Chair ends at 3, Gaming Keyboard at 25, Headphones at 195.
        assert_eq!(stats.low_stock_count, 1);
    }
}
