//! # Error Types
//!
//! Domain-specific error types for rentify-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rentify-core errors (this file)                                       │
//! │  ├── CoreError        - Lease document decoding failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  extenso-cli errors (app)                                              │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  The verbalizer itself never fails: every Decimal has a written form.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning external input into domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The lease amounts document is not valid JSON or has the wrong shape.
    #[error("Invalid lease amounts document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary value below zero where only non-negative values make sense.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
