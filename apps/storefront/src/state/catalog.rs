//! # Catalog State
//!
//! The product catalog, loaded once at startup and read-only afterwards.
//! Shared behind an `Arc` so queries never copy the product list.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use storefront_core::Catalog;
use tracing::info;

use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Parses a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(Self::new(Catalog::from_json(json)?))
    }

    /// Reads and parses the catalog file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let state = Self::from_json(&json)?;
        info!(path = %path.display(), products = state.catalog.len(), "Catalog loaded");
        Ok(state)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
