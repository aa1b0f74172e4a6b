//! Execution engine for sorting and selection operations.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates one algorithm
//! invocation: it creates a fresh statistics tracker, starts the timer,
//! dispatches to the selected algorithm, stops the timer, and freezes the
//! counters into a snapshot. It is the single place where the
//! algorithm/operation pairing is resolved.
//!
//! ## Design notes
//!
//! * **Fresh instrumentation**: Every invocation gets its own
//!   `StatsTracker`; nothing is shared across calls.
//! * **Borrowed sequences**: The executor mutates the caller's slice in
//!   place and never allocates a full-size copy itself (individual
//!   algorithms may use scratch storage).
//! * **Extension hook**: The merge strategy can be replaced through
//!   [`MergePassFn`], which is how the parallel companion crate injects its
//!   fork-join merge pass.
//!
//! ## Invariants
//!
//! * Empty and single-element sequences are sorted as no-ops (timer still
//!   runs, counters stay zero).
//! * Selection validates the rank before touching the sequence, so a
//!   failed call never partially reorders the input.
//!
//! ## Non-goals
//!
//! * This module does not implement any algorithm (see `algorithms`).
//! * This module does not average across trials (see `evaluation::trials`).

// Internal dependencies
use crate::algorithms::bubble::{bubble_sort, bubble_sort_k};
use crate::algorithms::heap::{heap_sort, heap_sort_k};
use crate::algorithms::insertion::{insertion_sort, insertion_sort_k};
use crate::algorithms::median::median_of_medians_select;
use crate::algorithms::merge::{merge_sort, merge_sort_k};
use crate::algorithms::quick::{quick_select, quick_sort};
use crate::algorithms::selection::{selection_sort, selection_sort_k};
use crate::algorithms::Algorithm;
use crate::engine::validator::Validator;
use crate::primitives::errors::RanksortError;
use crate::primitives::stats::{RunStats, StatsTracker};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a replacement merge pass.
///
/// The function must leave the slice fully sorted when the limit is `None`,
/// or with its first `k` positions holding the k smallest elements in order
/// when the limit is `Some(k)`, and must update the tracker according to
/// the recording contract.
#[doc(hidden)]
pub type MergePassFn<T> = fn(
    &mut [T],          // sequence
    Option<usize>,     // truncation limit (Some(k) for selection)
    &mut StatsTracker, // statistics context
);

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for sorting and selection operations.
#[derive(Debug, Clone)]
pub struct SortExecutor<T> {
    /// Algorithm to dispatch to.
    pub algorithm: Algorithm,

    /// Custom merge pass function (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_merge_pass: Option<MergePassFn<T>>,
}

impl<T: Ord + Clone> SortExecutor<T> {
    /// Create an executor for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            custom_merge_pass: None,
        }
    }

    /// Set a custom merge pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_merge_pass(mut self, merge_pass_fn: Option<MergePassFn<T>>) -> Self {
        self.custom_merge_pass = merge_pass_fn;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Sort the sequence ascending in place.
    ///
    /// Returns the frozen instrumentation snapshot of the run.
    pub fn run_sort(&self, data: &mut [T]) -> Result<RunStats, RanksortError> {
        if !self.algorithm.supports_full_sort() {
            return Err(RanksortError::UnsupportedOperation {
                algorithm: self.algorithm.name(),
                operation: "sort",
            });
        }

        let mut stats = StatsTracker::new();
        stats.start_timer();

        match self.algorithm {
            Algorithm::Insertion => insertion_sort(data, &mut stats),
            Algorithm::Selection => selection_sort(data, &mut stats),
            Algorithm::Bubble => bubble_sort(data, &mut stats),
            Algorithm::Quick => quick_sort(data, &mut stats),
            Algorithm::Merge => match self.custom_merge_pass {
                Some(merge_pass) => merge_pass(data, None, &mut stats),
                None => merge_sort(data, &mut stats),
            },
            Algorithm::Heap => heap_sort(data, &mut stats),
            Algorithm::MedianOfMedians => unreachable!("rejected above"),
        }

        stats.stop_timer();
        Ok(stats.snapshot())
    }

    /// Select the element of 1-based rank `rank` (1 = minimum).
    ///
    /// The sequence may be left partially reordered as a side effect. A
    /// failed validation returns before any mutation.
    pub fn run_select(&self, data: &mut [T], rank: usize) -> Result<(T, RunStats), RanksortError> {
        Validator::validate_rank(rank, data.len())?;

        let mut stats = StatsTracker::new();
        stats.start_timer();

        let value = match self.algorithm {
            Algorithm::Insertion => insertion_sort_k(data, rank, &mut stats),
            Algorithm::Selection => selection_sort_k(data, rank, &mut stats),
            Algorithm::Bubble => bubble_sort_k(data, rank, &mut stats),
            Algorithm::Quick => quick_select(data, rank, &mut stats),
            Algorithm::Merge => match self.custom_merge_pass {
                Some(merge_pass) => {
                    merge_pass(data, Some(rank), &mut stats);
                    stats.record_reads(1);
                    data[rank - 1].clone()
                }
                None => merge_sort_k(data, rank, &mut stats),
            },
            Algorithm::Heap => heap_sort_k(data, rank, &mut stats),
            Algorithm::MedianOfMedians => median_of_medians_select(data, rank, &mut stats),
        };

        stats.stop_timer();
        Ok((value, stats.snapshot()))
    }
}
