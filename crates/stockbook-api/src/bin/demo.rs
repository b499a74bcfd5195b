//! # stockbook demo driver
//!
//! Exercises the boundary end to end without a transport adapter: builds
//! an in-memory store, bootstraps the admin account, optionally seeds the
//! sample catalog, then walks the operation table and logs the results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Demo Flow                                   │
//! │                                                                     │
//! │  tracing init ──► config ──► MemoryStore ──► InventoryApi           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  bootstrap admin ──► seed catalog ──► login ──► movements ──► stats │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbook_api::config::ApiConfig;
use stockbook_api::dto::{CreateTransactionRequest, LoginRequest};
use stockbook_api::seed::{bootstrap_admin, seed_demo_data};
use stockbook_api::InventoryApi;
use stockbook_core::TransactionKind;
use stockbook_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the log filter applies from the start
    let config = ApiConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!("Starting stockbook demo...");
    info!(
        admin = %config.admin_username,
        seed = config.seed_demo_data,
        "Configuration loaded"
    );

    let api = InventoryApi::new(Arc::new(MemoryStore::new()));

    bootstrap_admin(&api, &config).await?;
    if config.seed_demo_data {
        seed_demo_data(&api).await?;
    }

    let login = api
        .login(LoginRequest {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        })
        .await?;
    info!(user = %login.user.username, "logged in");

    // Walk the catalog and record one movement against the first product
    let products = api.list_products().await?;
    for product in &products {
        info!(
            id = product.id,
            sku = %product.sku,
            stock = product.current_stock,
            "product"
        );
    }

    if let Some(first) = products.first() {
        let movement = api
            .create_transaction(CreateTransactionRequest {
                product_id: first.id,
                kind: TransactionKind::In,
                quantity: 10,
            })
            .await?;
        info!(id = movement.id, quantity = movement.quantity, "recorded stock-in");
    }

    for entry in api.list_transactions().await? {
        info!(
            id = entry.transaction.id,
            kind = %entry.transaction.kind,
            quantity = entry.transaction.quantity,
            product = %entry.product.sku,
            "movement"
        );
    }

    let stats = api.stats().await?;
    info!(
        total_products = stats.total_products,
        total_stock_in = stats.total_stock_in,
        total_stock_out = stats.total_stock_out,
        low_stock_count = stats.low_stock_count,
        "dashboard stats"
    );

    info!("Demo complete");
    Ok(())
}
