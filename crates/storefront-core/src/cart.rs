//! # Cart Module
//!
//! The shopping cart: one line per product, in the order products were
//! first added, with totals derived on every read.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront Action        Cart Operation          Line Change           │
//! │  ─────────────────        ──────────────          ───────────           │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item() ───────────► qty + 1 / new line   │
//! │  Detail page "Add 3" ───► add_item_quantity() ──► qty + 3 / new line   │
//! │  Quantity input ────────► update_quantity() ────► qty = n (≤0 removes) │
//! │  "+" button ────────────► increment_quantity() ─► qty + 1              │
//! │  "−" button ────────────► decrement_quantity() ─► max(1, qty − 1)      │
//! │  Trash icon ────────────► remove_item() ────────► line removed         │
//! │  Order placed ──────────► clear() ──────────────► all lines removed    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation returns a [`CartChange`] so the caller can decide how to
//! tell the shopper (toast, badge bump); the cart itself has no side effects.
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity in `1..=MAX_ITEM_QUANTITY`
//! - `total()` and `item_count()` reflect the latest mutation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::checkout::OrderSummary;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// One product held in the cart with its quantity.
///
/// The product is a snapshot taken when the line was created, so the cart
/// keeps rendering consistently even if the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CartChange {
    /// A new line was appended.
    #[serde(rename_all = "camelCase")]
    Added { product_id: String, quantity: i64 },
    /// An existing line now has `quantity`.
    #[serde(rename_all = "camelCase")]
    QuantityChanged { product_id: String, quantity: i64 },
    #[serde(rename_all = "camelCase")]
    Removed { product_id: String },
    #[serde(rename_all = "camelCase")]
    Cleared { lines_removed: usize },
    /// Nothing to do (unknown id, or quantity already at its clamp).
    Unchanged,
}

/// The shopping cart.
///
/// Backed by an [`IndexMap`] keyed on product id: O(1) lookup for
/// mutations, insertion order for rendering.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: IndexMap<String, CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: IndexMap::new(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// If the product is already in the cart its quantity goes up by one,
    /// otherwise a new line with quantity 1 is appended. Never fails: a
    /// line already at [`MAX_ITEM_QUANTITY`] stays there.
    ///
    /// ```rust
    /// # use storefront_core::{Cart, Product};
    /// # let json = r#"{"id":"1","name":"Mug","priceCents":1200,"category":"Home","rating":4.0,"inStock":true}"#;
    /// # let mug: Product = serde_json::from_str(json).unwrap();
    /// let mut cart = Cart::new();
    /// cart.add_item(&mug);
    /// cart.add_item(&mug);
    /// assert_eq!(cart.line_count(), 1);
    /// assert_eq!(cart.item_count(), 2);
    /// ```
    pub fn add_item(&mut self, product: &Product) -> CartChange {
        self.add(product, 1)
    }

    /// Adds `quantity` units of `product` in one step.
    ///
    /// Same end state as calling [`Cart::add_item`] `quantity` times.
    /// A non-positive or oversized quantity is rejected and the cart is
    /// left untouched.
    pub fn add_item_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<CartChange> {
        validate_quantity(quantity)?;
        Ok(self.add(product, quantity))
    }

    fn add(&mut self, product: &Product, quantity: i64) -> CartChange {
        if let Some(line) = self.lines.get_mut(&product.id) {
            let next = line.quantity.saturating_add(quantity).min(MAX_ITEM_QUANTITY);
            if next == line.quantity {
                return CartChange::Unchanged;
            }
            line.quantity = next;
            return CartChange::QuantityChanged {
                product_id: product.id.clone(),
                quantity: line.quantity,
            };
        }

        self.lines
            .insert(product.id.clone(), CartLine::new(product, quantity));
        CartChange::Added {
            product_id: product.id.clone(),
            quantity,
        }
    }

    /// Sets the quantity of an existing line.
    ///
    /// - `quantity ≤ 0` removes the line, exactly like [`Cart::remove_item`]
    /// - `quantity` above [`MAX_ITEM_QUANTITY`] is clamped to it
    /// - unknown `product_id` is a no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = quantity.min(MAX_ITEM_QUANTITY);

        match self.lines.get_mut(product_id) {
            Some(line) if line.quantity == quantity => CartChange::Unchanged,
            Some(line) => {
                line.quantity = quantity;
                CartChange::QuantityChanged {
                    product_id: product_id.to_string(),
                    quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// "+" button: one more of an existing line.
    pub fn increment_quantity(&mut self, product_id: &str) -> CartChange {
        match self.lines.get(product_id) {
            Some(line) => {
                let next = line.quantity.saturating_add(1);
                self.update_quantity(product_id, next)
            }
            None => CartChange::Unchanged,
        }
    }

    /// "−" button: one fewer, but never below 1.
    ///
    /// Removal is a separate, explicit action in the storefront, so this
    /// clamps instead of dropping the line.
    pub fn decrement_quantity(&mut self, product_id: &str) -> CartChange {
        match self.lines.get(product_id) {
            Some(line) => {
                let next = (line.quantity - 1).max(1);
                self.update_quantity(product_id, next)
            }
            None => CartChange::Unchanged,
        }
    }

    /// Removes the line for `product_id`, if any. Remaining lines keep
    /// their order.
    pub fn remove_item(&mut self, product_id: &str) -> CartChange {
        match self.lines.shift_remove(product_id) {
            Some(_) => CartChange::Removed {
                product_id: product_id.to_string(),
            },
            None => CartChange::Unchanged,
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) -> CartChange {
        let lines_removed = self.lines.len();
        self.lines.clear();
        CartChange::Cleared { lines_removed }
    }

    /// Σ unit price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Σ quantity over all lines (the navbar badge count).
    pub fn item_count(&self) -> i64 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Shipping, tax and grand total for the current contents.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.total())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
