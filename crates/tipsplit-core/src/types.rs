//! # Data Transfer Types
//!
//! Types shared with the UI frontend.
//!
//! Every type here derives serde + ts-rs so the frontend gets generated
//! TypeScript definitions instead of hand-maintained ones. Amounts are plain
//! `f64` in whatever currency the user is typing; the frontend owns display
//! formatting (fixed two-decimal rendering, currency symbol, localization).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tip Breakdown
// =============================================================================

/// Everything the calculator screen renders, computed in one pass.
///
/// ## Field Relationships
/// ```text
/// bill ──► tip = bill × tip_percent / 100   (zero at or below the threshold)
///   │
///   └────► total = bill + tip ──► total_per_person = total / split_by
/// ```
///
/// A breakdown is a snapshot of one calculation; it holds the inputs it was
/// computed from (`split_by`, `tip_percent`) so the frontend can render a
/// consistent frame even while the user keeps typing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipBreakdown {
    /// Parsed bill amount (0.0 while the bill field is empty).
    pub bill: f64,

    /// Tip amount derived from the bill and percentage.
    pub tip: f64,

    /// Bill plus tip.
    pub total: f64,

    /// Each person's share of the total.
    pub total_per_person: f64,

    /// Head count the total was divided by.
    pub split_by: u32,

    /// Tip percentage the tip was derived from.
    pub tip_percent: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
