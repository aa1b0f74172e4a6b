//! Output types and result structures for sorting and selection runs.
//!
//! ## Purpose
//!
//! This module defines the report structs returned by the high-level API:
//! the sorted sequence or selected element together with the
//! instrumentation snapshot and, when trials were requested, the per-trial
//! snapshots behind the averaged figures.
//!
//! ## Design notes
//!
//! * **Memory efficiency**: Optional outputs use `Option<Vec<_>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `stats` is the mean of `trial_stats` when trials were run, otherwise
//!   the single run's snapshot.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::primitives::stats::RunStats;

// ============================================================================
// Result Structures
// ============================================================================

/// Output of a full sort, including the instrumentation snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport<T> {
    /// The sorted sequence (ascending).
    pub sorted: Vec<T>,

    /// Algorithm that produced the result.
    pub algorithm: Algorithm,

    /// Instrumentation for the run (mean across trials if trials were run).
    pub stats: RunStats,

    /// Per-trial snapshots, present when more than one trial was requested.
    pub trial_stats: Option<Vec<RunStats>>,
}

/// Output of a rank selection, including the instrumentation snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectReport<T> {
    /// The selected element: the value at position `rank - 1` of the fully
    /// sorted sequence.
    pub value: T,

    /// The 1-based rank that was requested.
    pub rank: usize,

    /// Algorithm that produced the result.
    pub algorithm: Algorithm,

    /// Instrumentation for the run (mean across trials if trials were run).
    pub stats: RunStats,

    /// Per-trial snapshots, present when more than one trial was requested.
    pub trial_stats: Option<Vec<RunStats>>,
}

impl<T> SortReport<T> {
    /// Number of trials behind the reported statistics.
    pub fn trials(&self) -> usize {
        self.trial_stats.as_ref().map_or(1, Vec::len)
    }
}

impl<T> SelectReport<T> {
    /// Number of trials behind the reported statistics.
    pub fn trials(&self) -> usize {
        self.trial_stats.as_ref().map_or(1, Vec::len)
    }
}

// ============================================================================
// Display Implementations
// ============================================================================

fn write_stats_block(f: &mut Formatter<'_>, stats: &RunStats, trials: usize) -> FmtResult {
    if trials > 1 {
        writeln!(f, "  Trials:         {trials} (averaged)")?;
    }
    writeln!(f, "  Array accesses: {}", stats.array_accesses)?;
    writeln!(f, "  Swaps:          {}", stats.swaps)?;
    writeln!(f, "  Comparisons:    {}", stats.comparisons)?;
    writeln!(f, "  Elapsed time:   {}", stats.format_elapsed())
}

impl<T: Display> Display for SortReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:      {}", self.algorithm.name())?;
        writeln!(f, "  Elements:       {}", self.sorted.len())?;
        write_stats_block(f, &self.stats, self.trials())?;
        writeln!(f)?;
        writeln!(f, "Sorted Data:")?;

        // Show first 10 and last 10 if more than 20 elements.
        let n = self.sorted.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "  ...")?;
            }
            prev_idx = idx;
            writeln!(f, "  [{idx}] {}", self.sorted[idx])?;
        }

        Ok(())
    }
}

impl<T: Display> Display for SelectReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:      {}", self.algorithm.name())?;
        writeln!(f, "  Rank:           {}", self.rank)?;
        write_stats_block(f, &self.stats, self.trials())?;
        writeln!(f)?;
        writeln!(f, "Selected: {}", self.value)
    }
}
