//! # Validation Module
//!
//! Input validation utilities for monetary values entered by people.
//!
//! ## Accepted Amount Notation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input              Read as          Why                                │
//! │  ─────────────────  ───────────────  ──────────────────────────────     │
//! │  1988.50            1988.50          plain decimal                      │
//! │  1.988,50           1988.50          Brazilian notation (has a comma)   │
//! │  R$ 1.988,50        1988.50          currency prefix dropped            │
//! │  -R$ 1,50           -1.50            sign before the prefix             │
//! │  1,988.50           rejected         comma before the decimal point     │
//! │  (empty)            rejected         amount is required                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentify_core::validation::parse_amount;
//!
//! let amount = parse_amount("R$ 1.988,50").unwrap();
//! assert_eq!(amount.to_string(), "1988.50");
//! assert!(parse_amount("abc").is_err());
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

const AMOUNT_FIELD: &str = "amount";
const CURRENCY_PREFIX: &str = "R$";

/// Parses a monetary amount in plain or Brazilian notation.
///
/// When the text contains a comma, the comma is the decimal separator and
/// dots are thousands separators. Otherwise the dot is the decimal separator.
pub fn parse_amount(input: &str) -> ValidationResult<Decimal> {
    let mut text = input.trim();

    let negative = text.starts_with('-');
    if negative {
        text = text[1..].trim_start();
    }
    text = text.strip_prefix(CURRENCY_PREFIX).unwrap_or(text).trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: AMOUNT_FIELD.to_string(),
        });
    }

    let normalized = normalize_separators(text)?;
    let amount = Decimal::from_str(&normalized).map_err(|e| ValidationError::InvalidFormat {
        field: AMOUNT_FIELD.to_string(),
        reason: e.to_string(),
    })?;

    if amount.is_sign_negative() && !amount.is_zero() && negative {
        return Err(invalid("more than one minus sign"));
    }

    Ok(if negative { -amount } else { amount })
}

/// Rejects amounts below zero.
///
/// ## Example
/// ```rust
/// use rentify_core::validation::validate_non_negative;
/// use rust_decimal::Decimal;
///
/// assert!(validate_non_negative("baseRent", &Decimal::ZERO).is_ok());
/// assert!(validate_non_negative("baseRent", &Decimal::NEGATIVE_ONE).is_err());
/// ```
pub fn validate_non_negative(field: &str, amount: &Decimal) -> ValidationResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn normalize_separators(text: &str) -> ValidationResult<String> {
    let Some(comma) = text.rfind(',') else {
        return Ok(text.to_string());
    };

    if text[..comma].contains(',') {
        return Err(invalid("more than one decimal comma"));
    }
    if text[comma..].contains('.') {
        return Err(invalid("thousands separator after the decimal comma"));
    }

    Ok(text.replace('.', "").replace(',', "."))
}

fn invalid(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: AMOUNT_FIELD.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
