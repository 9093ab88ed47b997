//! # Commands Module
//!
//! All operations exposed to the storefront frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product listing, detail, categories
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Simulated order placement
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn query_products(catalog: &CatalogState, criteria: &FilterCriteria, sort: &str)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, product_id: &str)
//! ```
//!
//! Commands never show notifications or navigate; they return what changed
//! and the frontend decides how to present it.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
