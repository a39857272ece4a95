//! Property-based tests for amount verbalization.
//!
//! - Rounding is exact and a no-op on two-place amounts
//! - The centavos clause appears exactly when the rounded fraction is nonzero
//! - "de" appears exactly for round millions
//! - `Money` and `Decimal` convert into each other without loss

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::number::MAX_NUMBER;
use super::{convert, number_to_words};
use crate::money::Money;

/// Two-place amounts from 0.00 to 10,000,000,000.00.
fn two_place_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Amounts with 3 to 6 fractional digits, so rounding has work to do.
fn long_scale_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64, 3u32..=6).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Centavo counts across the whole `i128` range, weighted toward the edge of
/// what a `Decimal` can carry.
fn any_cents() -> impl Strategy<Value = i128> {
    prop_oneof![
        any::<i128>(),
        -(1i128 << 104)..(1i128 << 104),
        -1_000_000_000_000i128..1_000_000_000_000,
    ]
}

/// Whole reais that are exact multiples of one million.
fn round_millions() -> impl Strategy<Value = u128> {
    (1u128..1_000_000_000).prop_map(|millions| millions * 1_000_000)
}

fn centavos_clause(words: &str) -> bool {
    words.ends_with(" centavo") || words.ends_with(" centavos")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Amounts that already have two places survive rounding untouched.
    #[test]
    fn prop_rounding_is_noop_on_two_places(amount in two_place_amount()) {
        let money = Money::from_decimal(amount);
        prop_assert_eq!(money.cents(), amount.mantissa());
    }

    /// Rounding never moves an amount by more than half a centavo.
    #[test]
    fn prop_rounding_stays_within_half_centavo(amount in long_scale_amount()) {
        let money = Money::from_decimal(amount);
        let rounded = Decimal::from_i128_with_scale(money.cents(), 2);
        prop_assert!((rounded - amount).abs() <= Decimal::new(5, 3));
    }

    #[test]
    fn prop_centavos_clause_iff_fraction(amount in long_scale_amount()) {
        let money = Money::from_decimal(amount);
        let words = convert(Some(amount));
        prop_assert_eq!(centavos_clause(&words), money.centavos_part() > 0);
        if money.centavos_part() == 1 {
            prop_assert!(words.ends_with(" um centavo"));
        }
    }

    #[test]
    fn prop_de_iff_round_million(amount in two_place_amount()) {
        let reais = Money::from_decimal(amount).reais();
        let words = convert(Some(amount));
        let has_de = words.contains(" de real");
        prop_assert_eq!(has_de, reais > 0 && reais % 1_000_000 == 0);
    }

    #[test]
    fn prop_round_millions_read_de_reais(reais in round_millions()) {
        let words = convert(Some(Decimal::from(reais as u64)));
        prop_assert!(words.ends_with(" de reais"), "{}", words);
    }

    /// "zero" only appears for amounts that round to nothing.
    #[test]
    fn prop_zero_only_for_zero(amount in long_scale_amount()) {
        let words = convert(Some(amount));
        let is_zero = Money::from_decimal(amount).is_zero();
        prop_assert_eq!(words == "zero reais", is_zero);
        if !is_zero {
            prop_assert!(!words.contains("zero"));
        }
    }

    #[test]
    fn prop_output_is_clean(n in prop_oneof![0u128..=u128::from(u64::MAX), 0u128..=MAX_NUMBER]) {
        let words = number_to_words(n);
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.contains(" ,"));
        prop_assert!(!words.ends_with(" e"));
    }

    /// Money survives a trip through `Decimal` and reads the same either way.
    #[test]
    fn prop_money_decimal_round_trip(cents in any_cents()) {
        if let Some(money) = Money::from_cents(cents) {
            prop_assert_eq!(Money::from_decimal(money.to_decimal()), money);
            prop_assert_eq!(money.in_words(), convert(Some(money.to_decimal())));
        } else {
            prop_assert!(cents.unsigned_abs() > Decimal::MAX.mantissa().unsigned_abs());
        }
    }

    #[test]
    fn prop_negative_mirrors_positive(amount in two_place_amount()) {
        prop_assume!(!amount.is_zero());
        let positive = convert(Some(amount));
        let negative = convert(Some(-amount));
        prop_assert_eq!(negative, format!("menos {}", positive));
    }
}
