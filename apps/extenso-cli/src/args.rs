//! Command line argument parsing.
//!
//! ## Usage
//! ```bash
//! # Amounts as arguments
//! extenso 1988.00 "R$ 1.500,50"
//!
//! # One amount per line from stdin
//! printf '10.555\n0.01\n' | extenso --json
//!
//! # Lease amounts document (file or stdin)
//! extenso --lease lease.json
//! echo '{"baseRentValue":"1500.00"}' | extenso --lease -
//! ```

use crate::config::OutputFormat;

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write out each amount; read stdin when the list is empty.
    Amounts(Vec<String>),

    /// Write out a lease amounts JSON document read from a path or `-`.
    Lease(String),

    Help,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,

    /// Overrides `EXTENSO_OUTPUT` when given.
    pub output: Option<OutputFormat>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Unknown option: {0} (see --help)")]
    UnknownOption(String),

    #[error("Option {0} requires a value")]
    MissingValue(String),

    #[error("--lease cannot be combined with amounts")]
    LeaseWithAmounts,
}

pub const HELP: &str = "\
Rentify Extenso - writes BRL amounts out in full (pt-BR)

Usage: extenso [OPTIONS] [AMOUNT...]

Amounts may use plain (1988.50) or Brazilian (R$ 1.988,50) notation.
With no AMOUNT, amounts are read from stdin, one per line.

Options:
  --json               Print one JSON object per amount
  --text               Print \"R$ 1.988,50: words\" lines (default)
  --lease <FILE|->     Read a lease amounts JSON document and print its words
  -h, --help           Show this help message

Environment:
  EXTENSO_OUTPUT            text | json (default: text)
  EXTENSO_LOG               tracing filter for stderr logs (default: warn)
  EXTENSO_REJECT_NEGATIVE   true | false (default: false)
";

/// Parses arguments, excluding the program name.
///
/// Anything that is not an option is an amount, including negative numbers
/// such as `-1.50`.
pub fn parse_args<I, S>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut amounts = Vec::new();
    let mut lease = None;
    let mut output = None;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                return Ok(Args {
                    command: Command::Help,
                    output,
                })
            }
            "--json" => output = Some(OutputFormat::Json),
            "--text" => output = Some(OutputFormat::Text),
            "--lease" => {
                let source = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue("--lease".to_string()))?;
                lease = Some(source);
            }
            option if option.starts_with("--") => {
                return Err(ArgsError::UnknownOption(option.to_string()));
            }
            amount => amounts.push(amount.to_string()),
        }
    }

    let command = match lease {
        Some(_) if !amounts.is_empty() => return Err(ArgsError::LeaseWithAmounts),
        Some(source) => Command::Lease(source),
        None => Command::Amounts(amounts),
    };

    Ok(Args { command, output })
}
