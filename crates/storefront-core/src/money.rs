//! # Money Module
//!
//! Provides the `Money` type for catalog prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices arrive as decimals ($29.99, $9.99 shipping).            │
//! │                                                                         │
//! │  Summed as floats:   29.99 + 9.99 + 0.1 * 29.99 → 42.978999999...      │
//! │  Summed as cents:    2999 + 999 + 300            → 4298  ($42.98)       │
//! │                                                                         │
//! │  Every subtotal, shipping fee and tax amount is integer cents.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(2999); // $29.99
//! let line = price * 2_i64;            // $59.98
//! assert_eq!(line.to_string(), "$59.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that differences (e.g. "amount left until free shipping")
/// can be computed without special cases; catalog prices themselves are
/// validated to be non-negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(999).cents(), 999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax on this amount, rounding half up to the nearest cent.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(4000); // $40.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.cents(), 400);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large carts from overflowing before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies a unit price by a line quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Whole-number percentage that `self` is below `original`,
    /// rounded half up. Zero when `original` is not above `self`.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(7999);
    /// let original = Money::from_cents(9999);
    /// assert_eq!(price.percent_below(original), 20);
    /// ```
    pub fn percent_below(&self, original: Money) -> u32 {
        if original.0 <= 0 || original.0 <= self.0 {
            return 0;
        }
        let saved = (original.0 - self.0) as i128;
        let whole = original.0 as i128;
        ((saved * 200 + whole) / (whole * 2)) as u32
    }
}

/// Renders as `$12.34` / `-$5.50`. Presentation code that needs another
/// currency symbol formats from [`Money::cents`] itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
