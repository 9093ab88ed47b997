//! # State Module
//!
//! Application state owned by the composition root.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs, and tests can build
//! any one of them in isolation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<        │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │   Catalog>   │  │    Cart      │  │  currency        │              │
//! │  │              │  │  >>          │  │  checkout delay  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CatalogState: read-only after startup                               │
//! │  • CartState: shared with the checkout task                            │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartResponse, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::{ConfigState, DEFAULT_CHECKOUT_DELAY_MS};
