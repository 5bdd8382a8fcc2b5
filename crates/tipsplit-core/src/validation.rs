//! # Validation Module
//!
//! Input validation the UI gates its form with.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI form (frontend)                                           │
//! │  ├── is_valid_bill() gates the split / tip / slider rows               │
//! │  └── clamps split count to ≥ 1 and tip percent to 0-100                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculation (this crate)                                     │
//! │  ├── parse failure → TipError::InvalidAmount                           │
//! │  └── zero split    → TipError::SplitByZero                             │
//! │                                                                         │
//! │  The calculations do NOT re-check ranges: an unclamped 250% tip is    │
//! │  computed as asked. Range policy lives here, for the caller to apply.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::{is_valid_bill, validate_split_count};
//!
//! // Gate the form rows on the bill field
//! assert!(is_valid_bill("12,50"));
//! assert!(!is_valid_bill(""));
//!
//! // Validate a split count before calling total_per_person
//! validate_split_count(4).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::normalize::parse_amount;
use crate::{MAX_TIP_PERCENT, MIN_SPLIT_COUNT};

// =============================================================================
// Bill Text
// =============================================================================

/// Validates the bill field's raw text.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must parse as a number after separator normalization
/// - Must be finite and greater than zero
pub fn validate_bill_text(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "bill".to_string(),
        });
    }

    let value = parse_amount(raw).map_err(|_| ValidationError::InvalidFormat {
        field: "bill".to_string(),
        reason: "must be a number".to_string(),
    })?;

    // "inf" and "NaN" are valid f64 literals but nonsense as bills
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "bill".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "bill".to_string(),
        });
    }

    Ok(())
}

/// The predicate form of [`validate_bill_text`].
///
/// The UI shows the split / tip / slider rows only while this holds.
#[inline]
pub fn is_valid_bill(raw: &str) -> bool {
    validate_bill_text(raw).is_ok()
}

// =============================================================================
// Numeric Inputs
// =============================================================================

/// Validates a split count.
///
/// ## Rules
/// - Must be at least MIN_SPLIT_COUNT (1)
pub fn validate_split_count(count: u32) -> ValidationResult<()> {
    if count < MIN_SPLIT_COUNT {
        return Err(ValidationError::MustBePositive {
            field: "split count".to_string(),
        });
    }

    Ok(())
}

/// Validates a tip percentage.
///
/// ## Rules
/// - Must be at most MAX_TIP_PERCENT (100); the slider's full range
pub fn validate_tip_percent(percent: u32) -> ValidationResult<()> {
    if percent > MAX_TIP_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "tip percent".to_string(),
            min: 0,
            max: MAX_TIP_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
