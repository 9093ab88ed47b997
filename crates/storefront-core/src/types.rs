//! # Domain Types
//!
//! Catalog-facing types shared by the cart and the query engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │      Product        │   │ CategorySummary │   │     TaxRate     │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (stable)        │   │  name           │   │  bps (u32)      │   │
//! │  │  price_cents        │   │  product_count  │   │  1000 = 10%     │   │
//! │  │  original_price     │   └─────────────────┘   └─────────────────┘   │
//! │  │  category, rating   │                                               │
//! │  │  in_stock, featured │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products come from the static catalog and are never mutated by this
//! crate; the cart stores its own snapshot of each product it holds.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (1 bps = 0.01%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Deserialized from the catalog JSON with camelCase keys:
/// ```json
/// {
///   "id": "1",
///   "name": "Wireless Headphones",
///   "description": "Noise cancelling",
///   "priceCents": 7999,
///   "originalPriceCents": 9999,
///   "category": "Electronics",
///   "image": "/img/headphones.jpg",
///   "rating": 4.5,
///   "reviews": 128,
///   "inStock": true,
///   "featured": true,
///   "badge": "Sale"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Stable identifier, unique within the catalog.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Selling price in cents.
    pub price_cents: i64,

    /// Pre-discount price in cents. When present it is at least `price_cents`.
    #[serde(default)]
    pub original_price_cents: Option<i64>,

    pub category: String,

    /// Primary image URL.
    #[serde(default)]
    pub image: String,

    /// Additional gallery images for the detail page.
    #[serde(default)]
    pub images: Vec<String>,

    /// Average review score, 0.0 to 5.0.
    pub rating: f64,

    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub reviews: u32,

    pub in_stock: bool,

    #[serde(default)]
    pub featured: bool,

    /// Optional marketing label ("New", "Sale", ...).
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Discount shown on the product badge, as a whole percentage.
    ///
    /// Returns 0 when the product has no original price.
    pub fn discount_percent(&self) -> u32 {
        self.original_price()
            .map(|original| self.price().percent_below(original))
            .unwrap_or(0)
    }

    /// Gallery for the detail page, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}

// =============================================================================
// Category Summary
// =============================================================================

/// A category derived from the catalog, with how many products it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySummary {
    pub name: String,
    pub product_count: usize,
}
