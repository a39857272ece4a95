//! # Money Module
//!
//! Provides the `Money` type: a monetary amount after it has been rounded to
//! whole centavos.
//!
//! ## Why Round Exactly Once?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE TRUNCATION PROBLEM                                                 │
//! │                                                                         │
//! │  Input from a lease form:       10.555                                  │
//! │  Truncate the fraction first:   10.55  → "cinquenta e cinco centavos"   │
//! │  Round half-up first:           10.56  → "cinquenta e seis centavos"  ✓ │
//! │                                                                         │
//! │  OUR SOLUTION: one exact decimal rounding, then integer centavos        │
//! │    Decimal ──round_dp(2, HALF_UP)──► Money(i128 centavos)               │
//! │    Everything downstream (reais, centavos, words) is integer math      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentify_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let rent: Decimal = "1988.50".parse().unwrap();
//! let money = Money::from_decimal(rent);
//!
//! assert_eq!(money.reais(), 1988);
//! assert_eq!(money.centavos_part(), 50);
//! assert_eq!(money.to_string(), "R$ 1.988,50");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of fractional digits a Brazilian Real amount carries.
pub const CENT_PLACES: u32 = 2;

const CENTS_PER_REAL: i128 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos.
///
/// ## Design Decisions
/// - **i128 (signed)**: holds every rounded `Decimal` exactly. A `Decimal`
///   mantissa is 96 bits, times 100 still fits with room to spare.
/// - **Single field tuple struct**: zero-cost abstraction over the integer
/// - Only constructed through [`Money::from_decimal`] or [`Money::from_cents`],
///   so every value has an exact [`Money::to_decimal`] and a written form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i128);

impl Money {
    /// Rounds a decimal amount to centavos using round-half-up.
    ///
    /// A value exactly halfway between two centavos rounds away from zero:
    /// `10.555` becomes `10.56` and `-10.555` becomes `-10.56`. Amounts that
    /// already carry two or fewer fractional digits are unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use rentify_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let up = Money::from_decimal("10.555".parse::<Decimal>().unwrap());
    /// let down = Money::from_decimal("10.554".parse::<Decimal>().unwrap());
    /// assert_eq!(up.cents(), 1056);
    /// assert_eq!(down.cents(), 1055);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let rounded =
            amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
        // round_dp leaves the scale at or below CENT_PLACES
        let widen = 10i128.pow(CENT_PLACES - rounded.scale());
        Money(rounded.mantissa() * widen)
    }

    /// Creates a Money value from centavos.
    ///
    /// Returns `None` when no `Decimal` can carry the amount exactly, which is
    /// the same range [`Money::from_decimal`] produces.
    ///
    /// ## Example
    /// ```rust
    /// use rentify_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150).unwrap().to_string(), "R$ 1,50");
    /// assert!(Money::from_cents(i128::MAX).is_none());
    /// ```
    pub fn from_cents(cents: i128) -> Option<Self> {
        exact_decimal(cents).map(|_| Money(cents))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Whole reais, without sign.
    ///
    /// ## Example
    /// ```rust
    /// use rentify_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(198850).unwrap().reais(), 1988);
    /// assert_eq!(Money::from_cents(-150).unwrap().reais(), 1);
    /// ```
    #[inline]
    pub const fn reais(&self) -> u128 {
        (self.0 / CENTS_PER_REAL).unsigned_abs()
    }

    /// Centavos portion (always 0-99, without sign).
    #[inline]
    pub const fn centavos_part(&self) -> u8 {
        (self.0 % CENTS_PER_REAL).unsigned_abs() as u8
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// The amount as a `Decimal` with two fractional digits.
    ///
    /// Amounts too large for two places keep fewer; those never carry the
    /// centavos that would be dropped.
    ///
    /// ## Example
    /// ```rust
    /// use rentify_core::money::Money;
    ///
    /// let money = Money::from_cents(198850).unwrap();
    /// assert_eq!(money.to_decimal().to_string(), "1988.50");
    /// assert_eq!(Money::from_decimal(money.to_decimal()), money);
    /// ```
    pub fn to_decimal(&self) -> Decimal {
        match exact_decimal(self.0) {
            Some(decimal) => decimal,
            None => unreachable!("Money is only built from amounts a Decimal can carry"),
        }
    }

    /// Plain decimal notation with exactly two places: `1988.50`, `-1.05`.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.reais(), self.centavos_part())
    }

    /// The amount written out in Brazilian Portuguese.
    ///
    /// ```rust
    /// use rentify_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150).unwrap().in_words(), "um real e cinquenta centavos");
    /// ```
    pub fn in_words(&self) -> String {
        crate::extenso::verbalize(*self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Brazilian currency notation: `R$ 1.988,50`, `-R$ 1,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.reais()),
            self.centavos_part()
        )
    }
}

/// Serializes as a plain decimal string, the same shape `Decimal` uses.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

/// The centavo count as a `Decimal`, at the largest scale (2, 1 or 0) that
/// holds it exactly.
fn exact_decimal(cents: i128) -> Option<Decimal> {
    (0..=CENT_PLACES).rev().find_map(|scale| {
        let divisor = 10i128.pow(CENT_PLACES - scale);
        if cents % divisor != 0 {
            return None;
        }
        Decimal::try_from_i128_with_scale(cents / divisor, scale).ok()
    })
}

/// Inserts `.` between every three digits, counting from the right.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
