//! # Validation Module
//!
//! Input validation for Navalha POS. These checks run at the command boundary
//! before anything touches the store; the database constraints are the second
//! layer of defense.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Maximum product name length (mirrors the `VARCHAR(50)` column).
pub const MAX_NAME_LEN: usize = 50;

/// Maximum outflow description length (mirrors the `VARCHAR(100)` column).
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an outflow description.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a price or amount: must not be negative. Zero is allowed.
pub fn validate_non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a sale quantity: must be at least 1.
///
/// The stock ceiling is enforced by the store's guarded decrement, not here;
/// checking it up front would reintroduce the check-then-write race.
pub fn validate_sale_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level for product add/edit: must not be negative.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_name_rules() {
        assert!(validate_product_name("Pomade").is_ok());
        assert!(validate_product_name("  ").is_err());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"x".repeat(51)).is_err());
        assert!(validate_product_name(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn description_rules() {
        assert!(validate_description("Coffee for the shop").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(&"x".repeat(101)).is_err());
    }

    #[test]
    fn amount_rules() {
        assert!(validate_non_negative("price", Money::from_cents(0)).is_ok());
        assert!(validate_non_negative("price", Money::from_cents(1099)).is_ok());
        assert!(validate_non_negative("price", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn quantity_rules() {
        assert!(validate_sale_quantity(1).is_ok());
        assert!(validate_sale_quantity(0).is_err());
        assert!(validate_sale_quantity(-3).is_err());

        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }
}
