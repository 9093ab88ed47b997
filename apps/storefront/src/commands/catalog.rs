//! # Catalog Commands
//!
//! Product listing, detail and category lookups.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Products page                                                          │
//! │                                                                         │
//! │  sidebar change ──► query_products(criteria, "price-asc")               │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                 "Showing 4 of 12 products"                              │
//! │                                                                         │
//! │  Home page ───────► featured_products(), list_categories()              │
//! │  Detail page ─────► get_product(id) (includes related products)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::CatalogState;
use storefront_core::{
    CategorySummary, CoreError, FilterCriteria, Product, SortKey, RELATED_PRODUCTS_LIMIT,
};

/// Products page result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QueryResponse {
    pub products: Vec<Product>,
    /// Size of the whole catalog, for "Showing X of Y".
    pub catalog_size: usize,
    /// Sort actually applied (after fallback).
    pub sort: SortKey,
    /// Whether filter chips should be rendered.
    pub filters_active: bool,
}

/// Everything the detail page needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDetail {
    pub product: Product,
    pub discount_percent: u32,
    pub gallery: Vec<String>,
    pub related: Vec<Product>,
}

/// Runs the filter/sort pipeline.
///
/// `sort` is the raw token from the frontend; unknown tokens fall back to
/// featured-first. Criteria with inverted price bounds are rejected.
pub fn query_products(
    catalog: &CatalogState,
    criteria: &FilterCriteria,
    sort: &str,
) -> Result<QueryResponse, ApiError> {
    debug!(
        categories = ?criteria.categories,
        min_cents = criteria.price_range.min_cents,
        max_cents = criteria.price_range.max_cents,
        min_rating = ?criteria.min_rating,
        sort = %sort,
        "query_products command"
    );

    criteria.validate().map_err(CoreError::from)?;
    let sort = SortKey::parse_or_default(sort);

    let products = catalog
        .catalog()
        .query(criteria, sort)
        .into_iter()
        .cloned()
        .collect();

    Ok(QueryResponse {
        products,
        catalog_size: catalog.catalog().len(),
        sort,
        filters_active: criteria.is_active(),
    })
}

pub fn get_product(catalog: &CatalogState, product_id: &str) -> Result<ProductDetail, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    let catalog = catalog.catalog();
    let product = catalog
        .get(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(ProductDetail {
        product: product.clone(),
        discount_percent: product.discount_percent(),
        gallery: product.gallery().into_iter().map(str::to_string).collect(),
        related: catalog
            .related(product_id, RELATED_PRODUCTS_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
    })
}

pub fn featured_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("featured_products command");
    catalog.catalog().featured().into_iter().cloned().collect()
}

pub fn list_categories(catalog: &CatalogState) -> Vec<CategorySummary> {
    debug!("list_categories command");
    catalog.catalog().categories()
}
