//! # Rentify Extenso
//!
//! Command line front end for writing BRL amounts out in full.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► Args ──► Help? ──► print usage                                │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  env ──► ExtensoConfig ──► tracing subscriber (stderr)                  │
//! │                      │                                                  │
//! │          ┌───────────┴────────────┐                                     │
//! │          ▼                        ▼                                     │
//! │   amounts / stdin lines     lease document                              │
//! │   one line per amount       LeaseAmountsInWords JSON                    │
//! │   bad input → stderr,                                                   │
//! │   exit status 1 at the end                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod config;
mod error;
mod render;

use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::args::{parse_args, Command, HELP};
use crate::config::{ExtensoConfig, OutputFormat};
use crate::error::CliResult;
use crate::render::{render_batch, render_lease};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = parse_args(env::args().skip(1))?;
    let command = match args.command {
        Command::Help => {
            print!("{HELP}");
            return Ok(ExitCode::SUCCESS);
        }
        command => command,
    };

    // Load configuration
    let config = ExtensoConfig::load()?;
    init_tracing(&config.log_filter)?;
    debug!(?config, "Configuration loaded");

    let output = args.output.unwrap_or(config.output);

    let status = match command {
        Command::Lease(source) => run_lease(&source)?,
        Command::Amounts(amounts) => run_amounts(amounts, output, config.reject_negative)?,
        Command::Help => unreachable!("help is printed before configuration loads"),
    };
    Ok(status)
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn run_amounts(
    amounts: Vec<String>,
    output: OutputFormat,
    reject_negative: bool,
) -> CliResult<ExitCode> {
    let inputs = if amounts.is_empty() {
        debug!("Reading amounts from stdin");
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        amounts
    };

    let summary = render_batch(
        &inputs,
        output,
        reject_negative,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    info!(
        processed = summary.processed,
        rejected = summary.rejected,
        "Amounts processed"
    );
    Ok(if summary.rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_lease(source: &str) -> CliResult<ExitCode> {
    let document = if source == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(source)?
    };
    debug!(source, bytes = document.len(), "Lease document read");

    println!("{}", render_lease(&document)?);
    Ok(ExitCode::SUCCESS)
}
