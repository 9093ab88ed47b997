//! # Cart State
//!
//! Holds the shopper's cart for the lifetime of the process.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because the simulated checkout
//! runs as a tokio task and must clear the cart when it completes. UI
//! commands and that task are the only two writers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Action          Command                 Cart Change           │
//! │  ───────────────          ───────                 ───────────           │
//! │  Click "Add to cart" ───► add_to_cart() ────────► add_item()            │
//! │  Click +/− ─────────────► increment/decrement ──► qty ± 1 (min 1)       │
//! │  Click trash ───────────► remove_from_cart() ───► remove_item()         │
//! │  Place order ───────────► place_order() ────────► clear() after delay   │
//! │  Navbar badge ──────────► get_cart() ───────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartChange, CartLine, OrderSummary};
use ts_rs::TS;

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Σ quantity (navbar badge)
    pub item_count: i64,
    /// Distinct products
    pub line_count: usize,
    pub summary: OrderSummary,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            summary: cart.summary(),
        }
    }
}

/// Cart contents and totals as rendered by the cart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    /// What the command changed, so the UI can pick a notification.
    /// `None` for plain reads.
    pub change: Option<CartChange>,
}

impl CartResponse {
    pub fn from_cart(cart: &Cart, change: Option<CartChange>) -> Self {
        CartResponse {
            lines: cart.lines().cloned().collect(),
            totals: CartTotals::from(cart),
            change,
        }
    }
}

/// Shared handle to the process-wide cart.
///
/// Cloning is cheap and every clone sees the same cart. Tests build their
/// own instance instead of sharing a global.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // A panic mid-mutation cannot leave the cart half-updated: every
        // Cart method completes its change before returning.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    /// Applies a mutation and snapshots the result in one lock.
    pub fn apply<F>(&self, f: F) -> CartResponse
    where
        F: FnOnce(&mut Cart) -> CartChange,
    {
        self.with_cart_mut(|cart| {
            let change = f(cart);
            CartResponse::from_cart(cart, Some(change))
        })
    }

    pub fn snapshot(&self) -> CartResponse {
        self.with_cart(|cart| CartResponse::from_cart(cart, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Product;

    fn product(id: &str, price_cents: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Product {}", id),
            "priceCents": price_cents,
            "category": "Books",
            "rating": 4.0,
            "inStock": true
        }))
        .unwrap()
    }

    #[test]
    fn test_clones_share_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|c| c.add_item(&product("1", 1500)));

        assert_eq!(other.with_cart(|c| c.item_count()), 1);
    }

    #[test]
    fn test_independent_instances() {
        let a = CartState::new();
        let b = CartState::new();

        a.with_cart_mut(|c| c.add_item(&product("1", 1500)));

        assert!(b.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_apply_returns_change_and_totals() {
        let state = CartState::new();
        let response = state.apply(|c| c.add_item(&product("1", 4000)));

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.totals.summary.total.cents(), 5399);
        assert!(matches!(response.change, Some(CartChange::Added { .. })));
    }

    #[test]
    fn test_snapshot_has_no_change() {
        let state = CartState::new();
        let response = state.snapshot();
        assert!(response.lines.is_empty());
        assert!(response.change.is_none());
        assert_eq!(response.totals.item_count, 0);
    }
}
