//! # Checkout Commands
//!
//! Simulated order placement. There is no payment gateway behind this:
//! the order "processes" for a fixed delay, then the cart is emptied and a
//! receipt is returned. A real payment integration replaces the task body.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Place Order" clicked                                                  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  place_order() ── cart empty? ──► Err(CART_ERROR)                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  snapshot totals, spawn task ──► CheckoutHandle returned immediately    │
//! │        │                                                                │
//! │        ▼  (task, not cancellable)                                       │
//! │  sleep(checkout_delay) ──► clear cart ──► CheckoutReceipt               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};
use storefront_core::{CoreError, OrderSummary};

/// Confirmation of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutReceipt {
    pub order_id: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    /// Totals at the moment the order was placed.
    pub summary: OrderSummary,
    pub item_count: i64,
}

/// A checkout in progress.
///
/// Dropping the handle does not stop the order: the task keeps running and
/// still clears the cart.
///
/// The receipt's totals are taken when the order is placed, but the clear
/// at the end of the delay empties the whole cart. Anything added while
/// the order is processing is discarded and does not appear on the receipt.
#[derive(Debug)]
pub struct CheckoutHandle {
    order_id: String,
    task: JoinHandle<CheckoutReceipt>,
}

impl CheckoutHandle {
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the simulated payment to complete.
    pub async fn wait(self) -> Result<CheckoutReceipt, ApiError> {
        self.task.await.map_err(|e| {
            tracing::error!(order_id = %self.order_id, "checkout task failed: {}", e);
            ApiError::internal("Checkout did not complete")
        })
    }
}

/// Starts the simulated checkout for the current cart.
///
/// Must be called from within a tokio runtime.
pub fn place_order(cart: &CartState, config: &ConfigState) -> Result<CheckoutHandle, ApiError> {
    debug!("place_order command");

    let (summary, item_count) = cart.with_cart(|c| (c.summary(), c.item_count()));
    if item_count == 0 {
        return Err(CoreError::EmptyCart.into());
    }

    let order_id = Uuid::new_v4().to_string();
    let delay = config.checkout_delay();
    info!(
        order_id = %order_id,
        total_cents = summary.total.cents(),
        delay_ms = config.checkout_delay_ms,
        "Processing order"
    );

    let task_cart = cart.clone();
    let task_order_id = order_id.clone();
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        task_cart.with_cart_mut(|c| c.clear());
        info!(order_id = %task_order_id, "Order placed, cart cleared");

        CheckoutReceipt {
            order_id: task_order_id,
            placed_at: Utc::now(),
            summary,
            item_count,
        }
    });

    Ok(CheckoutHandle { order_id, task })
}
