//! # Extenso Module
//!
//! Writes monetary amounts out in full, in Brazilian Portuguese, as lease
//! contracts require ("valor por extenso").
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Option<Decimal>                                                        │
//! │       │                                                                 │
//! │       ├── None ──────────────────────────────────────────────► ""       │
//! │       ▼                                                                 │
//! │  Money::from_decimal (round half-up to centavos)                       │
//! │       │                                                                 │
//! │       ├── 0 reais, 0 centavos ──────────────────────► "zero reais"      │
//! │       ▼                                                                 │
//! │  reais clause      number_to_words(W) [+ " de"] + " real" | " reais"   │
//! │  centavos clause   [" e "] + number_to_words(C) + " centavo(s)"        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "um mil, novecentos e oitenta e oito reais e cinquenta centavos"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentify_core::extenso::convert;
//! use rust_decimal::Decimal;
//!
//! let rent: Decimal = "1988.00".parse().unwrap();
//! assert_eq!(
//!     convert(Some(rent)),
//!     "um mil, novecentos e oitenta e oito reais"
//! );
//! assert_eq!(convert(None), "");
//! ```

mod lexicon;
mod number;
mod triplet;

#[cfg(test)]
mod props;

use rust_decimal::Decimal;
use tracing::trace;

use crate::money::Money;

pub(crate) use number::number_to_words;

/// Whole-real counts divisible by this take "de" before the currency word.
const MILLION: u128 = 1_000_000;

const NEGATIVE_PREFIX: &str = "menos ";

/// Converts an optional amount to its written-out form.
///
/// An absent amount gives an empty string, so unset optional fees render as
/// nothing while a zero amount still reads "zero reais". The amount is rounded
/// half-up to centavos before anything else.
///
/// ## Example
/// ```rust
/// use rentify_core::extenso::convert;
/// use rust_decimal::Decimal;
///
/// let amount = |s: &str| Some(s.parse::<Decimal>().unwrap());
///
/// assert_eq!(convert(amount("0.00")), "zero reais");
/// assert_eq!(convert(amount("1000000.00")), "um milhão de reais");
/// assert_eq!(convert(amount("10.555")), "dez reais e cinquenta e seis centavos");
/// ```
pub fn convert(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => verbalize(Money::from_decimal(amount)),
        None => String::new(),
    }
}

/// Writes out an already rounded amount.
///
/// Negative amounts read as their magnitude prefixed with "menos". Every
/// `Money` fits a `Decimal`, so its whole reais stay within the scale table.
pub(crate) fn verbalize(money: Money) -> String {
    let reais = money.reais();
    let centavos = money.centavos_part();
    trace!(cents = %money.cents(), reais = %reais, centavos, "verbalizing amount");

    if reais == 0 && centavos == 0 {
        return "zero reais".to_string();
    }

    let mut words = String::new();
    if money.is_negative() {
        words.push_str(NEGATIVE_PREFIX);
    }

    if reais > 0 {
        words.push_str(&number_to_words(reais));
        if reais % MILLION == 0 {
            words.push_str(" de");
        }
        words.push_str(if reais == 1 { " real" } else { " reais" });
    }

    if centavos > 0 {
        if reais > 0 {
            words.push_str(" e ");
        }
        words.push_str(&number_to_words(u128::from(centavos)));
        words.push_str(if centavos == 1 { " centavo" } else { " centavos" });
    }

    words
}

// =============================================================================
// Unit Tests
// =============================================================================
