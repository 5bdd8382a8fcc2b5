//! # Tip Calculations
//!
//! The derived values the calculator screen displays.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tip Calculation Flow                                │
//! │                                                                         │
//! │  Bill text "100,50" ──► parse_amount ──► 100.50                        │
//! │                                            │                            │
//! │       tip_percent 10 ─────────────────────►├──► tip      10.05         │
//! │                                            │                            │
//! │       split_by 2 ─────────────────────────►└──► per head  55.275       │
//! │                                                                         │
//! │  The UI re-runs this on every keystroke, button tap, and slider move.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty bill field is not an error: the screen shows 0.00 until the user
//! types something, so every operation short-circuits to zero on `""`.

use crate::error::{TipError, TipResult};
use crate::normalize::parse_amount;
use crate::types::TipBreakdown;
use crate::MIN_TIPPABLE_BILL;

/// Tip for an already-parsed bill value.
///
/// Bills at or below [`MIN_TIPPABLE_BILL`] earn no tip.
fn tip_for(bill: f64, tip_percent: u32) -> f64 {
    if bill > MIN_TIPPABLE_BILL {
        bill * f64::from(tip_percent) / 100.0
    } else {
        0.0
    }
}

/// Calculates the tip amount for a raw bill string.
///
/// ## Contract
/// - Empty bill text → `Ok(0.0)` (nothing typed yet, nothing to tip)
/// - Bill value ≤ [`MIN_TIPPABLE_BILL`] → `Ok(0.0)`
/// - Otherwise → `Ok(bill × tip_percent / 100)`
///
/// `tip_percent` is used as given; the caller clamps it to
/// [`crate::MAX_TIP_PERCENT`] before calling.
///
/// ## Errors
/// [`TipError::InvalidAmount`] when the bill text does not parse after
/// normalization.
///
/// ## Example
/// ```rust
/// use tipsplit_core::tip_amount;
///
/// assert_eq!(tip_amount("100", 20).unwrap(), 20.0);
/// assert_eq!(tip_amount("", 20).unwrap(), 0.0);
/// ```
pub fn tip_amount(raw_bill: &str, tip_percent: u32) -> TipResult<f64> {
    if raw_bill.is_empty() {
        return Ok(0.0);
    }

    let bill = parse_amount(raw_bill)?;
    Ok(tip_for(bill, tip_percent))
}

/// Calculates each person's share of the bill plus tip.
///
/// ## Contract
/// - Empty bill text → `Ok(0.0)`
/// - Otherwise → `Ok((tip + bill) / split_by)`
///
/// ## Errors
/// - [`TipError::InvalidAmount`] when the bill text does not parse
/// - [`TipError::SplitByZero`] when `split_by` is 0
///
/// ## Example
/// ```rust
/// use tipsplit_core::total_per_person;
///
/// // (20 tip + 100 bill) / 4 people
/// assert_eq!(total_per_person("100", 4, 20).unwrap(), 30.0);
/// ```
pub fn total_per_person(raw_bill: &str, split_by: u32, tip_percent: u32) -> TipResult<f64> {
    if raw_bill.is_empty() {
        return Ok(0.0);
    }

    let bill = parse_amount(raw_bill)?;
    if split_by == 0 {
        return Err(TipError::SplitByZero);
    }

    Ok((tip_for(bill, tip_percent) + bill) / f64::from(split_by))
}

/// Computes everything the calculator screen renders in one call.
///
/// The UI recomputes tip and total-per-person together on every input
/// change; this bundles both (plus the parsed bill and grand total) into a
/// single [`TipBreakdown`] it can serialize across the IPC boundary.
///
/// Empty bill text yields a zero-amount breakdown echoing the inputs.
///
/// ## Errors
/// Same as [`total_per_person`].
pub fn breakdown(raw_bill: &str, split_by: u32, tip_percent: u32) -> TipResult<TipBreakdown> {
    if raw_bill.is_empty() {
        return Ok(TipBreakdown {
            split_by,
            tip_percent,
            ..TipBreakdown::default()
        });
    }

    let bill = parse_amount(raw_bill)?;
    if split_by == 0 {
        return Err(TipError::SplitByZero);
    }

    let tip = tip_for(bill, tip_percent);
    let total = bill + tip;

    Ok(TipBreakdown {
        bill,
        tip,
        total,
        total_per_person: total / f64::from(split_by),
        split_by,
        tip_percent,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
