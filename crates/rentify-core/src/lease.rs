//! # Lease Amounts
//!
//! The monetary fields of a lease and their written-out counterparts, as
//! printed on the generated contract.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Lease created / updated                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LeaseAmounts { baseRentValue, securityDepositValue, paintingFeeValue } │
//! │       │                                                                 │
//! │       ├── validate()  → negative values rejected per field              │
//! │       ▼                                                                 │
//! │  in_words() ← THIS MODULE                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LeaseAmountsInWords stored next to the numbers, shown on the contract │
//! │  "Valor por extenso: um mil, quinhentos reais"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unset field stays unset (`null`) in the words document rather than
//! becoming an empty string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationResult};
use crate::extenso::convert;
use crate::validation::validate_non_negative;

// =============================================================================
// Lease Amounts
// =============================================================================

/// Monetary values of a lease. Any of them may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaseAmounts {
    /// Monthly rent.
    #[ts(as = "Option<String>")]
    pub base_rent_value: Option<Decimal>,

    /// Security deposit paid at signing.
    #[ts(as = "Option<String>")]
    pub security_deposit_value: Option<Decimal>,

    /// Painting fee charged at move-out.
    #[ts(as = "Option<String>")]
    pub painting_fee_value: Option<Decimal>,
}

impl LeaseAmounts {
    /// Decodes a lease amounts JSON document and validates it.
    ///
    /// ## Example
    /// ```rust
    /// use rentify_core::lease::LeaseAmounts;
    ///
    /// let amounts = LeaseAmounts::from_json(r#"{"baseRentValue": "1500.00"}"#).unwrap();
    /// assert!(amounts.security_deposit_value.is_none());
    ///
    /// assert!(LeaseAmounts::from_json(r#"{"baseRentValue": "-1"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let amounts: LeaseAmounts = serde_json::from_str(json)?;
        amounts.validate()?;
        Ok(amounts)
    }

    /// Rejects negative values, reporting the first offending field.
    pub fn validate(&self) -> ValidationResult<()> {
        for (field, value) in self.fields() {
            if let Some(value) = value {
                validate_non_negative(field, value)?;
            }
        }
        Ok(())
    }

    /// Writes out every set field.
    pub fn in_words(&self) -> LeaseAmountsInWords {
        let words = LeaseAmountsInWords {
            rent_value_in_words: self.base_rent_value.map(|v| convert(Some(v))),
            deposit_value_in_words: self.security_deposit_value.map(|v| convert(Some(v))),
            painting_fee_in_words: self.painting_fee_value.map(|v| convert(Some(v))),
        };

        debug!(
            rent = words.rent_value_in_words.is_some(),
            deposit = words.deposit_value_in_words.is_some(),
            painting_fee = words.painting_fee_in_words.is_some(),
            "lease amounts written out"
        );

        words
    }

    fn fields(&self) -> [(&'static str, Option<&Decimal>); 3] {
        [
            ("baseRentValue", self.base_rent_value.as_ref()),
            ("securityDepositValue", self.security_deposit_value.as_ref()),
            ("paintingFeeValue", self.painting_fee_value.as_ref()),
        ]
    }
}

// =============================================================================
// Lease Amounts In Words
// =============================================================================

/// Written-out lease values, one per monetary field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeaseAmountsInWords {
    pub rent_value_in_words: Option<String>,
    pub deposit_value_in_words: Option<String>,
    pub painting_fee_in_words: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
