//! # API Error Type
//!
//! Unified error types for the storefront app.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  read catalog file ──► AppError::CatalogRead                            │
//! │  parse / validate ───► AppError::Catalog(CoreError)                     │
//! │                                                                         │
//! │  Commands                                                               │
//! │  ────────                                                               │
//! │  Result<T, ApiError>                                                    │
//! │    CoreError::ProductNotFound ──► { code: "NOT_FOUND", ... }            │
//! │    CoreError::Validation ───────► { code: "VALIDATION_ERROR", ... }     │
//! │    CoreError::EmptyCart ────────► { code: "CART_ERROR", ... }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use storefront_core::CoreError;
use thiserror::Error;
use ts_rs::TS;

/// Failures while bringing the storefront up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CoreError),
}

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Product cannot be bought right now
    Unavailable,

    /// Cart operation failed
    CartError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::ProductUnavailable(_) => ApiError::new(ErrorCode::Unavailable, err.to_string()),
            CoreError::EmptyCart => ApiError::cart(err.to_string()),
            CoreError::UnknownSortKey(_) => ApiError::validation(err.to_string()),
            CoreError::InvalidCatalog(e) => {
                tracing::error!("Catalog error surfaced to a command: {}", e);
                ApiError::internal("Catalog is unavailable")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound("42".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::ProductUnavailable("7".to_string()).into();
        assert_eq!(err.code, ErrorCode::Unavailable);
        assert_eq!(err.message, "Product 7 is out of stock");

        let err: ApiError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "9");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 9");
    }
}
