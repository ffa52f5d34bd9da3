//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    R350.00 is 35000 cents, and 35000 × 2 is exactly 70000              │
//! │                                                                         │
//! │  Cents are the ONLY internal representation; rands appear only at      │
//! │  display boundaries and in the courier declared_value field.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pour_core::money::Money;
//!
//! // Create from cents (the only constructor)
//! let price = Money::from_cents(35000); // R350.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // R700.00
//! let total = price + Money::from_cents(20000);  // R550.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents, ZAR).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for any realistic cart total
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pour_core::money::Money;
    ///
    /// let price = Money::from_cents(35000); // Represents R350.00
    /// assert_eq!(price.cents(), 35000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rand) portion.
    #[inline]
    pub const fn rand(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pour_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(35000); // R350.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 70000); // R700.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Converts to whole major units, rounded **up**, with a floor of 1.
    ///
    /// Used for the courier `declared_value` field, which is expressed in
    /// whole rand. Rounding up means the parcel is never under-declared,
    /// and the floor of 1 keeps the provider happy for degenerate inputs.
    ///
    /// ## Example
    /// ```rust
    /// use pour_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(90000).declared_major_units(), 900);
    /// assert_eq!(Money::from_cents(90001).declared_major_units(), 901);
    /// assert_eq!(Money::from_cents(0).declared_major_units(), 1);
    /// ```
    pub const fn declared_major_units(&self) -> i64 {
        let ceil = (self.0 + 99) / 100;
        if ceil < 1 {
            1
        } else {
            ceil
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and order summaries. Frontend display formatting
/// (with localization) happens outside this workspace.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R{}.{:02}", sign, self.rand().abs(), self.cents_part())
    }
}

/// Default money is zero.
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(35000);
        assert_eq!(money.cents(), 35000);
        assert_eq!(money.rand(), 350);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(35000)), "R350.00");
        assert_eq!(format!("{}", Money::from_cents(7999)), "R79.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(20000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 60000);
    }

    #[test]
    fn test_declared_major_units_rounds_up() {
        assert_eq!(Money::from_cents(90000).declared_major_units(), 900);
        assert_eq!(Money::from_cents(90001).declared_major_units(), 901);
        assert_eq!(Money::from_cents(99).declared_major_units(), 1);
    }

    #[test]
    fn test_declared_major_units_floor_is_one() {
        assert_eq!(Money::zero().declared_major_units(), 1);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
