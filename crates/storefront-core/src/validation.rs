//! # Validation Module
//!
//! Input validation for catalog data and cart arguments.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog load ──► validate_product() per entry                         │
//! │                   (price, original price, rating, id, name)            │
//! │                                                                         │
//! │  Add N to cart ─► validate_quantity()                                  │
//! │                                                                         │
//! │  Price slider ──► validate_price_range()                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Cart::update_quantity` deliberately does not validate: a non-positive
//! quantity there means "remove the line".

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest rating a product may carry.
pub const MAX_RATING: f64 = 5.0;

/// Validates a quantity to add to the cart in one step.
///
/// ```rust
/// use storefront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an inclusive price range in cents.
pub fn validate_price_range(min_cents: i64, max_cents: i64) -> ValidationResult<()> {
    validate_price_cents(min_cents)?;
    validate_price_cents(max_cents)?;

    if min_cents > max_cents {
        return Err(ValidationError::InvalidRange {
            field: "price range".to_string(),
            min: min_cents,
            max: max_cents,
        });
    }

    Ok(())
}

/// Validates a rating (product score or minimum-rating threshold).
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::Invalid {
            field: "rating".to_string(),
            reason: format!("must be between 0 and {}", MAX_RATING),
        });
    }

    Ok(())
}

/// Validates a single catalog entry.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    validate_price_cents(product.price_cents)?;

    if let Some(original) = product.original_price_cents {
        if original < product.price_cents {
            return Err(ValidationError::Invalid {
                field: format!("product {} original price", product.id),
                reason: "must not be below the selling price".to_string(),
            });
        }
    }

    validate_rating(product.rating)
}
