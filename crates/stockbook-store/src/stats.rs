//! # Stats Aggregation
//!
//! Pure projection over the current store contents. Recomputed on every
//! call; nothing here is cached or stateful.

use stockbook_core::{InventoryStats, Product, StockTransaction, TransactionKind};

/// Derives the summary counters from a snapshot of products and
/// transactions.
///
/// `total_stock_in - total_stock_out` need not equal the summed product
/// stock: OUT movements clamp at zero while the transaction records keep
/// the requested quantity. That divergence is deliberate and documented,
/// not a bug to fix here.
pub fn compute_stats(products: &[Product], transactions: &[StockTransaction]) -> InventoryStats {
    // Saturating sums: per-movement quantities are capped on input, but an
    // arbitrarily long history still must not overflow the counters.
    let total_stock_in = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::In)
        .fold(0i64, |acc, t| acc.saturating_add(t.quantity));

    let total_stock_out = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Out)
        .fold(0i64, |acc, t| acc.saturating_add(t.quantity));

    let low_stock_count = products.iter().filter(|p| p.is_low_stock()).count();

    InventoryStats {
        total_products: products.len(),
        total_stock_in,
        total_stock_out,
        low_stock_count,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
