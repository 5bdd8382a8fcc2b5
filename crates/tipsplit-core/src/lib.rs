//! # tipsplit-core: Pure Business Logic for TipSplit
//!
//! This crate is the **heart** of TipSplit. It contains the entire
//! computational surface of the app as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TipSplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     UI Frontend (bill form)                     │   │
//! │  │    Bill field ──► Split buttons ──► Tip slider ──► Totals      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC (raw text + integers in,           │
//! │                                │      computed numbers out)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ normalize │  │    tip    │  │   types   │  │ validation│  │   │
//! │  │   │  amount   │  │  amounts  │  │ Breakdown │  │   rules   │  │   │
//! │  │   │  parsing  │  │ per-person│  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] - Decimal-separator normalization and amount parsing
//! - [`tip`] - Tip amount, total-per-person, and the combined breakdown
//! - [`types`] - Data transfer types shared with the frontend
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation the UI gates its form with
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **State Lives in the Caller**: the UI owns the form state (bill text,
//!    split count, slider position) and re-invokes these functions on every
//!    change; nothing in this crate is mutable or remembered between calls
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::{tip_amount, total_per_person};
//!
//! // Comma decimal separators are tolerated and normalized before parsing
//! let tip = tip_amount("100,50", 10).unwrap();
//! assert_eq!(tip, 10.05);
//!
//! // Bill plus tip, split four ways
//! let per_person = total_per_person("100", 4, 20).unwrap();
//! assert_eq!(per_person, 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod normalize;
pub mod tip;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tipsplit_core::TipError` instead of
// `use tipsplit_core::error::TipError`

pub use error::{TipError, ValidationError};
pub use normalize::{normalize_amount, parse_amount};
pub use tip::{breakdown, tip_amount, total_per_person};
pub use types::TipBreakdown;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Bills at or below this value yield a zero tip.
///
/// ## Business Reason
/// Tipping on a trivial or zero bill is meaningless; the threshold also
/// absorbs placeholder entries like "0" or "1" typed while the user is still
/// filling in the field. The comparison is strict: a bill of exactly 1.00
/// still yields no tip.
pub const MIN_TIPPABLE_BILL: f64 = 1.0;

/// Maximum tip percentage the UI offers.
///
/// ## Business Reason
/// The tip slider runs 0-100%. The arithmetic itself accepts any percentage;
/// this constant is the bound the caller is expected to clamp to.
pub const MAX_TIP_PERCENT: u32 = 100;

/// Minimum number of people a bill can be split between.
///
/// ## Business Reason
/// A bill is always shared by at least one person; the UI's decrement button
/// stops here. Zero is rejected by the arithmetic as a hard error.
pub const MIN_SPLIT_COUNT: u32 = 1;
