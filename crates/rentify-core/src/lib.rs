//! # rentify-core: Pure Business Logic for Rentify Lease Documents
//!
//! Writes lease monetary values out in full, in Brazilian Portuguese, the way
//! contracts require ("valor por extenso"). Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rentify Extenso Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  extenso-cli (`extenso` binary)                 │   │
//! │  │        config from env ──► tracing ──► args / stdin / JSON      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rentify-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  extenso  │  │   lease   │  │ validation│  │   │
//! │  │   │   Money   │  │  convert  │  │  Amounts  │  │  parsing  │  │   │
//! │  │   │ rounding  │  │  words    │  │  InWords  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Rounded amount in centavos, Brazilian currency display
//! - [`extenso`] - Amount and number verbalization
//! - [`lease`] - Lease monetary fields and their written-out form
//! - [`validation`] - Amount parsing and checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe from any thread
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Round Once**: amounts are rounded half-up to centavos exactly once
//! 4. **Total Verbalizer**: every `Decimal` has a written form, no error path
//!
//! ## Example Usage
//!
//! ```rust
//! use rentify_core::convert;
//! use rust_decimal::Decimal;
//!
//! let amount: Decimal = "12345678.90".parse().unwrap();
//! assert_eq!(
//!     convert(Some(amount)),
//!     "doze milhões, trezentos e quarenta e cinco mil, seiscentos e setenta e oito reais e noventa centavos"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod extenso;
pub mod lease;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use extenso::convert;
pub use lease::{LeaseAmounts, LeaseAmountsInWords};
pub use money::Money;
