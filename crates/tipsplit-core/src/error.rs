//! # Error Types
//!
//! Domain-specific error types for tipsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipsplit-core errors (this file)                                      │
//! │  ├── TipError         - Calculation failures                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  UI frontend (separate repository)                                     │
//! │  └── form error state - What the user sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → TipError → frontend error state               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending input, the field)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Tip Error
// =============================================================================

/// Calculation errors.
///
/// These errors represent inputs the arithmetic cannot proceed with. The UI
/// is expected to gate calls behind [`crate::validation::is_valid_bill`], so
/// in practice it should only ever see these during development.
#[derive(Debug, Error)]
pub enum TipError {
    /// Bill text did not parse as a number after normalization.
    ///
    /// ## When This Occurs
    /// - Letters or symbols in the bill field ("12a")
    /// - More than one decimal separator ("1,2,3" normalizes to "1.2.3")
    #[error("bill amount '{input}' is not a valid number")]
    InvalidAmount { input: String },

    /// Split count of zero.
    ///
    /// ## When This Occurs
    /// Never through the UI (the decrement button stops at 1); only a caller
    /// passing an unclamped value can reach this.
    #[error("split count must be at least 1")]
    SplitByZero,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before the arithmetic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u32, max: u32 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a parseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with TipError.
pub type TipResult<T> = Result<T, TipError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
