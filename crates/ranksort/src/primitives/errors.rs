//! Error types for sorting and selection operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when driving the
//! sorting/selection engine, including selection-rank validation, builder
//! configuration problems, and unsupported algorithm/operation pairings.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the rank and
//!   the sequence length).
//! * **Deferred**: Builder errors are often recorded during configuration and
//!   surfaced at `build()`.
//! * **No-std**: All variants are `no_std`-compatible; `std::error::Error`
//!   is implemented when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Rank validation**: A selection rank is 1-based and must lie in
//!    `[1, len]`. Out-of-range ranks are reported, never mapped to a
//!    sentinel value.
//! 2. **Operation support**: Median-of-medians is a pure selection
//!    algorithm and has no full-sort form.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting and selection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RanksortError {
    /// Selection was requested on an empty sequence; no valid rank exists.
    EmptyInput,

    /// Selection rank is outside the valid range `[1, len]`.
    RankOutOfRange {
        /// The 1-based rank that was requested.
        rank: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Selected algorithm does not support the requested operation
    /// (e.g., median-of-medians has no full-sort form).
    UnsupportedOperation {
        /// Name of the algorithm (e.g., "MedianOfMedians").
        algorithm: &'static str,
        /// Name of the unsupported operation (e.g., "sort").
        operation: &'static str,
    },

    /// At least one trial is required when averaging statistics.
    InvalidTrials(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RanksortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty; no rank can be selected"),
            Self::RankOutOfRange { rank, len } => {
                write!(f, "Rank out of range: {rank} (must be in [1, {len}])")
            }
            Self::UnsupportedOperation {
                algorithm,
                operation,
            } => {
                write!(
                    f,
                    "Algorithm '{algorithm}' does not support operation: {operation}"
                )
            }
            Self::InvalidTrials(trials) => {
                write!(f, "Invalid trials: {trials} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RanksortError {}
