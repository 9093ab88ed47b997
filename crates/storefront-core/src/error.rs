//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Domain errors                                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront app errors (separate crate)                                │
//! │  ├── AppError         - Bootstrap failures (catalog file, JSON)        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing or updating an id that is not in the cart is NOT an error;
//! those operations are no-ops.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but is out of stock.
    #[error("Product {0} is out of stock")]
    ProductUnavailable(String),

    /// Checkout requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Sort token outside the closed set.
    ///
    /// Only produced by the strict parser; query callers normally go through
    /// `SortKey::parse_or_default`, which falls back to featured-first.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Catalog data could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be positive")]
    MustBePositive { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A lower bound above its upper bound.
    #[error("{field} minimum {min} exceeds maximum {max}")]
    InvalidRange { field: String, min: i64, max: i64 },

    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    #[error("{field} {reason}")]
    Invalid { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::ProductNotFound("42".to_string()).to_string(),
            "Product not found: 42"
        );
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(
            CoreError::UnknownSortKey("cheapest".to_string()).to_string(),
            "Unknown sort key: cheapest"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::InvalidRange {
            field: "price range".to_string(),
            min: 500,
            max: 100,
        };
        assert_eq!(err.to_string(), "price range minimum 500 exceeds maximum 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "id".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
