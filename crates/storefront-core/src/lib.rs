//! # storefront-core: Pure Commerce Logic for the Storefront
//!
//! The client-side commerce state engine behind the storefront UI: the
//! cart and the catalog query engine, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Frontend                          │   │
//! │  │   Products page ──► Product detail ──► Cart ──► Checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             storefront-app (composition root)                   │   │
//! │  │    CartState, CatalogState, ConfigState, checkout task          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐          │   │
//! │  │   │  money  │  │  cart   │  │ catalog │  │ checkout │          │   │
//! │  │   │  Money  │  │  Cart   │  │  query  │  │  Order   │          │   │
//! │  │   │ TaxRate │  │CartLine │  │ SortKey │  │ Summary  │          │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog product and category types
//! - [`money`] - Integer-cent money type
//! - [`cart`] - Cart with one line per product
//! - [`catalog`] - Filter/sort pipeline over the catalog
//! - [`checkout`] - Shipping, tax and total rules
//! - [`validation`] - Argument and catalog validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Catalog, FilterCriteria, SortKey};
//!
//! let catalog = Catalog::from_json(r#"[
//!   {"id":"1","name":"Headphones","priceCents":4000,"category":"Electronics","rating":4.5,"inStock":true}
//! ]"#).unwrap();
//!
//! let mut cart = Cart::new();
//! for product in catalog.query(&FilterCriteria::default(), SortKey::PriceAsc) {
//!     cart.add_item(product);
//! }
//!
//! let summary = cart.summary();
//! assert_eq!(summary.total.cents(), 5399); // $40 + $9.99 shipping + $4 tax
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartChange, CartLine};
pub use catalog::{query, Catalog, FilterCriteria, PriceRange, SortKey};
pub use checkout::OrderSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Largest quantity that can be added to the cart in a single step.
///
/// Guards the detail page's quantity picker against typos (1000 instead
/// of 10). Repeated single adds are not capped.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// How many related products the detail page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;
