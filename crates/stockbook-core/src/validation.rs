//! # Validation Module
//!
//! Field-level validation rules for stockbook input shapes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Boundary (stockbook-api)                                  │
//! │  ├── Type validation (deserialization)                              │
//! │  └── THIS MODULE: field rules on request payloads                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Ledger (stockbook-store)                                  │
//! │  ├── Cross-record rules (SKU uniqueness, stock availability)        │
//! │  └── THIS MODULE again on direct library callers                    │
//! │                                                                     │
//! │  Defense in depth: both entry points apply the same field rules     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewProduct, NewTransaction, ProductPatch};
use crate::{MAX_NAME_LENGTH, MAX_QUANTITY, MAX_SKU_LENGTH, MAX_STOCK_LEVEL};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LENGTH {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LENGTH,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a category.
///
/// Any non-empty string is accepted; the UI suggestion list is advisory
/// only and the store keeps whatever it is given.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

/// Validates a username.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a transaction quantity. Must be >= 1 and within the movement
/// cap, so stock arithmetic stays far from the `i64` limits.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_QUANTITY {
        return Err(ValidationError::ExceedsMaximum {
            field: "quantity".to_string(),
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed; negative is not, and direct
/// input is capped the same way quantities are.
pub fn validate_stock_level(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "currentStock".to_string(),
        });
    }

    if stock > MAX_STOCK_LEVEL {
        return Err(ValidationError::ExceedsMaximum {
            field: "currentStock".to_string(),
            max: MAX_STOCK_LEVEL,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a full product creation payload.
pub fn validate_new_product(input: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_sku(&input.sku)?;
    validate_category(&input.category)?;
    validate_stock_level(input.current_stock)?;
    Ok(())
}

/// Validates the fields present in a product patch.
///
/// Absent fields are skipped: a patch only has to be valid for what it
/// actually changes.
pub fn validate_product_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(sku) = &patch.sku {
        validate_sku(sku)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(stock) = patch.current_stock {
        validate_stock_level(stock)?;
    }
    Ok(())
}

/// Validates a transaction creation payload.
///
/// Product existence is a cross-record rule checked by the ledger, not here.
pub fn validate_new_transaction(input: &NewTransaction) -> ValidationResult<()> {
    validate_quantity(input.quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("W-1").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("product_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Wireless Headphones").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category_accepts_any_nonempty_string() {
        assert!(validate_category("Electronics").is_ok());
        assert!(validate_category("not on the suggestion list").is_ok());
        assert!(validate_category("  ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(MAX_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_quantity_rejects_values_above_cap() {
        assert!(matches!(
            validate_quantity(MAX_QUANTITY + 1),
            Err(ValidationError::ExceedsMaximum { max, .. }) if max == MAX_QUANTITY
        ));
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level(0).is_ok());
        assert!(validate_stock_level(145).is_ok());
        assert!(validate_stock_level(MAX_STOCK_LEVEL).is_ok());
        assert!(validate_stock_level(-1).is_err());
        assert!(validate_stock_level(MAX_STOCK_LEVEL + 1).is_err());
        assert!(validate_stock_level(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_patch_skips_absent_fields() {
        assert!(validate_product_patch(&ProductPatch::default()).is_ok());

        let patch = ProductPatch {
            sku: Some("bad sku".to_string()),
            ..Default::default()
        };
        assert!(validate_product_patch(&patch).is_err());
    }

    #[test]
    fn test_validate_new_transaction() {
        let input = NewTransaction {
            product_id: 1,
            kind: TransactionKind::In,
            quantity: 50,
        };
        assert!(validate_new_transaction(&input).is_ok());

        let input = NewTransaction {
            product_id: 1,
            kind: TransactionKind::Out,
            quantity: 0,
        };
        assert!(validate_new_transaction(&input).is_err());
    }
}
