//! # Money Module
//!
//! Provides the `Money` type for nightly rates and stay totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rates are quoted in whole rand today (R2200 / night), but a future    │
//! │  rate card with cents must not reintroduce float drift:                │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents)                             │
//! │    R2200.00 = 220_000 cents                                            │
//! │    nights × rate × rooms stays exact                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stayhub_core::money::Money;
//!
//! let rate = Money::from_major(2200);
//! assert_eq!(rate.cents(), 220_000);
//! assert_eq!(rate.to_string(), "R2200");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Currency symbol used by `Display`.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Hotel.price_per_night_cents ──► StayRequest.nightly_rate
///                                        │
///                    nights × rate × rooms (compute_total_cost)
///                                        │
///                                        ▼
///                               StayQuote.total_cost ──► "R4400" in UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units (rand).
    ///
    /// ## Example
    /// ```rust
    /// use stayhub_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(15).cents(), 1500);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a count, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use stayhub_core::money::Money;
    ///
    /// let rate = Money::from_major(1500);
    /// assert_eq!(rate.checked_mul(3), Some(Money::from_major(4500)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul(2), None);
    /// ```
    #[inline]
    pub fn checked_mul(&self, count: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(count)).map(Money)
    }

    /// Formats with an explicit currency symbol.
    ///
    /// The minor part is only shown when it is non-zero, matching how rates
    /// are printed on hotel cards ("R2200 / night").
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = self.major().abs();
        match self.minor_part() {
            0 => format!("{sign}{symbol}{major}"),
            minor => format!("{sign}{symbol}{major}.{minor:02}"),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(2200);
        assert_eq!(money.cents(), 220_000);
        assert_eq!(money.major(), 2200);
        assert_eq!(money.minor_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(4400).to_string(), "R4400");
        assert_eq!(Money::from_cents(150_050).to_string(), "R1500.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-R5.50");
        assert_eq!(Money::zero().to_string(), "R0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(1200).format_with("$"), "$1200");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!((a + b).major(), 15);
        assert_eq!((a - b).major(), 5);

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_major(15));
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert_eq!(Money::from_major(3).checked_mul(0), Some(Money::zero()));
        assert!(Money::from_cents(i64::MAX / 2 + 1).checked_mul(2).is_none());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
