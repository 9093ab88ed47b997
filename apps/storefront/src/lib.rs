//! # Storefront App Library
//!
//! Composition root for the storefront: owns the cart, catalog and
//! configuration, and exposes the commands the frontend calls.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart handle
//! │   ├── catalog.rs  ◄─── Catalog loaded at startup
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product listing/detail commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Simulated order placement
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── AppError / ApiError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()            RUST_LOG or "info,storefront=debug"       │
//! │  2. ConfigState::from_env()   STOREFRONT_* overrides                    │
//! │  3. CatalogState::load()      JSON file from STOREFRONT_CATALOG_PATH    │
//! │  4. CartState::new()          empty cart for the process lifetime       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::AppError;
use state::{CartState, CatalogState, ConfigState};

/// The storefront's state objects, built once at startup.
///
/// Fields are handed to commands individually, e.g.
/// `commands::cart::add_to_cart(&app.catalog, &app.cart, id)`.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub cart: CartState,
}

impl Storefront {
    /// Builds the storefront from environment configuration.
    pub fn bootstrap() -> Result<Self, AppError> {
        Self::from_config(ConfigState::from_env())
    }

    /// Builds the storefront, loading the catalog named in `config`.
    pub fn from_config(config: ConfigState) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => CatalogState::load(path)?,
            None => {
                warn!("STOREFRONT_CATALOG_PATH not set, starting with an empty catalog");
                CatalogState::default()
            }
        };

        Ok(Self::with_catalog(config, catalog))
    }

    /// Builds the storefront around an already-loaded catalog.
    pub fn with_catalog(config: ConfigState, catalog: CatalogState) -> Self {
        info!(
            store = %config.store_name,
            products = catalog.catalog().len(),
            "Storefront initialized"
        );

        Storefront {
            config,
            catalog,
            cart: CartState::new(),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - Default: INFO, DEBUG for storefront crates
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_app=debug,storefront_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bootstrap_without_catalog() {
        let app = Storefront::from_config(ConfigState::default()).unwrap();
        assert!(app.catalog.catalog().is_empty());
        assert!(app.cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_bootstrap_missing_catalog_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/nonexistent/storefront.json")),
            ..ConfigState::default()
        };
        assert!(matches!(
            Storefront::from_config(config),
            Err(AppError::CatalogRead { .. })
        ));
    }

    #[test]
    fn test_end_to_end_browse_and_buy() {
        let catalog = CatalogState::from_json(
            r#"[
                {"id":"1","name":"Camera","priceCents":3000,"category":"Electronics","rating":4.3,"inStock":true},
                {"id":"2","name":"Poems","priceCents":1000,"category":"Books","rating":4.8,"inStock":true,"featured":true}
            ]"#,
        )
        .unwrap();
        let app = Storefront::with_catalog(ConfigState::default(), catalog);

        let listing = commands::catalog::query_products(
            &app.catalog,
            &storefront_core::FilterCriteria::default(),
            "featured",
        )
        .unwrap();
        for product in &listing.products {
            commands::cart::add_to_cart(&app.catalog, &app.cart, &product.id).unwrap();
        }

        let cart = commands::cart::get_cart(&app.cart);
        assert_eq!(cart.lines[0].product.id, "2");
        assert_eq!(cart.totals.item_count, 2);
        assert_eq!(app.config.format_currency(cart.totals.summary.total.cents()), "$53.99");
    }

    #[test]
    fn test_init_tracing_once() {
        assert!(init_tracing().is_ok());
        assert!(init_tracing().is_err());
    }
}
