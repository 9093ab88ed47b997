//! # Cart Commands
//!
//! Cart manipulation for the cart page, product cards and detail page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ (2s wait)│     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                       cart cleared       │
//! │       │           update_cart_item                        │             │
//! │       │           remove_from_cart                        │             │
//! │       └───────────────────────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, CatalogState};
use storefront_core::{CoreError, Product};

/// Gets the current cart contents and totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.snapshot()
}

fn lookup<'a>(catalog: &'a CatalogState, product_id: &str) -> Result<&'a Product, ApiError> {
    catalog
        .catalog()
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()).into())
}

/// Looks up a product for the detail page's quantity picker, whose add
/// button is disabled for out-of-stock products.
fn purchasable<'a>(catalog: &'a CatalogState, product_id: &str) -> Result<&'a Product, ApiError> {
    let product = lookup(catalog, product_id)?;

    if !product.in_stock {
        return Err(CoreError::ProductUnavailable(product_id.to_string()).into());
    }

    Ok(product)
}

/// Adds one unit of a product ("Add to cart" on a product card).
///
/// Product cards do not check stock, so neither does this; only an
/// unknown id fails.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = lookup(catalog, product_id)?;
    Ok(cart.apply(|c| c.add_item(product)))
}

/// Adds several units at once (quantity picker on the detail page).
pub fn add_to_cart_quantity(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart_quantity command");

    let product = purchasable(catalog, product_id)?;
    cart.with_cart_mut(|c| {
        let change = c.add_item_quantity(product, quantity)?;
        Ok::<CartResponse, ApiError>(CartResponse::from_cart(c, Some(change)))
    })
}

/// Sets a line's quantity. Zero or below removes the line; an id not in
/// the cart is a no-op.
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    cart.apply(|c| c.update_quantity(product_id, quantity))
}

/// "+" button on a cart line.
pub fn increment_cart_item(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "increment_cart_item command");
    cart.apply(|c| c.increment_quantity(product_id))
}

/// "−" button on a cart line. Stops at 1; use [`remove_from_cart`] to drop
/// the line.
pub fn decrement_cart_item(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "decrement_cart_item command");
    cart.apply(|c| c.decrement_quantity(product_id))
}

pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    cart.apply(|c| c.remove_item(product_id))
}

pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.apply(|c| c.clear())
}
