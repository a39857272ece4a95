//! Turns one input into one output line (or document).

use rentify_core::validation::{parse_amount, validate_non_negative};
use rentify_core::{LeaseAmounts, Money};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// JSON output shape for a single amount.
#[derive(Debug, Serialize)]
struct AmountWords<'a> {
    /// Rounded to centavos, plain notation.
    amount: Money,
    words: &'a str,
}

/// Parses, rounds and writes out one amount.
pub fn render_amount(input: &str, output: OutputFormat, reject_negative: bool) -> CliResult<String> {
    let amount = parse_amount(input)?;
    if reject_negative {
        validate_non_negative("amount", &amount)?;
    }

    let money = Money::from_decimal(amount);
    let words = money.in_words();
    debug!(input, rounded = %money, "amount written out");

    let line = match output {
        OutputFormat::Text => format!("{}: {}", money, words),
        OutputFormat::Json => serde_json::to_string(&AmountWords {
            amount: money,
            words: &words,
        })?,
    };
    Ok(line)
}

/// Counts from one batch of amount inputs. Blank lines count as neither.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub rejected: usize,
}

/// Writes one line per nonblank input to `out`; rejected inputs and their
/// reasons go to `err` instead.
pub fn render_batch<I, W, E>(
    inputs: I,
    output: OutputFormat,
    reject_negative: bool,
    out: &mut W,
    err: &mut E,
) -> CliResult<BatchSummary>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for input in inputs {
        let input = input.as_ref();
        if input.trim().is_empty() {
            continue;
        }
        summary.processed += 1;

        match render_amount(input, output, reject_negative) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(e) => {
                summary.rejected += 1;
                warn!(input, error = %e, "Amount rejected");
                writeln!(err, "{}: {}", input.trim(), e)?;
            }
        }
    }
    out.flush()?;

    Ok(summary)
}

/// Decodes a lease amounts document and returns its words as pretty JSON.
pub fn render_lease(document: &str) -> CliResult<String> {
    let amounts = LeaseAmounts::from_json(document)?;
    Ok(serde_json::to_string_pretty(&amounts.in_words())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_amount("1988", OutputFormat::Text, false).unwrap(),
            "R$ 1.988,00: um mil, novecentos e oitenta e oito reais"
        );
        assert_eq!(
            render_amount("R$ 0,01", OutputFormat::Text, false).unwrap(),
            "R$ 0,01: um centavo"
        );
    }

    #[test]
    fn test_render_json_uses_rounded_amount() {
        let line = render_amount("10.555", OutputFormat::Json, false).unwrap();
        assert_eq!(
            line,
            r#"{"amount":"10.56","words":"dez reais e cinquenta e seis centavos"}"#
        );
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(
            render_amount("-1.50", OutputFormat::Text, false).unwrap(),
            "-R$ 1,50: menos um real e cinquenta centavos"
        );
        assert!(matches!(
            render_amount("-1.50", OutputFormat::Text, true),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_amount() {
        let err = render_amount("dez", OutputFormat::Text, false).unwrap_err();
        assert!(err.to_string().starts_with("Invalid amount: amount has invalid format"));
    }

    #[test]
    fn test_batch_skips_blank_lines() {
        let inputs = ["1", "", "   ", "dez", "0,50"];
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let summary =
            render_batch(inputs, OutputFormat::Text, false, &mut out, &mut err).unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                processed: 3,
                rejected: 1
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "R$ 1,00: um real\nR$ 0,50: cinquenta centavos\n"
        );
        assert!(String::from_utf8(err).unwrap().starts_with("dez: Invalid amount"));
    }

    #[test]
    fn test_batch_of_blank_lines_processes_nothing() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary =
            render_batch(vec!["", "\t"], OutputFormat::Json, false, &mut out, &mut err).unwrap();
        assert_eq!(summary, BatchSummary::default());
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_render_lease() {
        let document = r#"{"baseRentValue": "1500.00", "paintingFeeValue": "350"}"#;
        let json: serde_json::Value =
            serde_json::from_str(&render_lease(document).unwrap()).unwrap();
        assert_eq!(json["rentValueInWords"], "um mil, quinhentos reais");
        assert_eq!(json["depositValueInWords"], serde_json::Value::Null);
        assert_eq!(json["paintingFeeInWords"], "trezentos e cinquenta reais");
    }

    #[test]
    fn test_render_lease_rejects_negative() {
        let err = render_lease(r#"{"baseRentValue": "-1"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: baseRentValue must not be negative"
        );
    }
}
