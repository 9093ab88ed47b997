//! # Checkout Math
//!
//! Shipping, tax and grand total derived from a cart subtotal. The cart and
//! checkout pages both render these numbers, so the rules live in one place.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal ──┬──► shipping = 0      if subtotal > $50.00                 │
//! │             │               $9.99  otherwise                            │
//! │             ├──► tax      = subtotal × 10%                              │
//! │             └──► total    = subtotal + shipping + tax                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use storefront_core::checkout::OrderSummary;
//! use storefront_core::Money;
//!
//! let summary = OrderSummary::from_subtotal(Money::from_cents(4000));
//! assert_eq!(summary.shipping.cents(), 999);
//! assert_eq!(summary.tax.cents(), 400);
//! assert_eq!(summary.total.cents(), 5399);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::TaxRate;

/// Flat shipping fee charged on orders at or below the threshold.
pub const SHIPPING_FEE: Money = Money::from_cents(999);

/// Orders strictly above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(5000);

/// Sales tax applied to the subtotal.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Priced breakdown of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    /// How much more the shopper needs to spend for free shipping.
    /// Zero once shipping is free.
    pub amount_to_free_shipping: Money,
}

impl OrderSummary {
    pub fn from_subtotal(subtotal: Money) -> Self {
        let shipping = shipping_for(subtotal);
        let tax = subtotal.calculate_tax(TAX_RATE);
        let amount_to_free_shipping = if shipping.is_zero() {
            Money::zero()
        } else {
            FREE_SHIPPING_THRESHOLD - subtotal
        };

        OrderSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            amount_to_free_shipping,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Shipping charged for a given subtotal.
pub fn shipping_for(subtotal: Money) -> Money {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        SHIPPING_FEE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_below_threshold() {
        let s = OrderSummary::from_subtotal(Money::from_cents(4000));
        assert_eq!(s.shipping.cents(), 999);
        assert_eq!(s.tax.cents(), 400);
        assert_eq!(s.total.cents(), 5399);
        assert_eq!(s.amount_to_free_shipping.cents(), 1000);
        assert!(!s.has_free_shipping());
    }

    #[test]
    fn test_subtotal_above_threshold() {
        let s = OrderSummary::from_subtotal(Money::from_cents(6000));
        assert_eq!(s.shipping, Money::zero());
        assert_eq!(s.tax.cents(), 600);
        assert_eq!(s.total.cents(), 6600);
        assert_eq!(s.amount_to_free_shipping, Money::zero());
        assert!(s.has_free_shipping());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly $50.00 still pays shipping
        assert_eq!(shipping_for(Money::from_cents(5000)), SHIPPING_FEE);
        assert_eq!(shipping_for(Money::from_cents(5001)), Money::zero());
    }

    #[test]
    fn test_empty_cart_summary() {
        let s = OrderSummary::from_subtotal(Money::zero());
        assert_eq!(s.tax, Money::zero());
        assert_eq!(s.total, SHIPPING_FEE);
    }
}
