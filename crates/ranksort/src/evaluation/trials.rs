//! Trial loops with reshuffled inputs and averaged statistics.
//!
//! ## Purpose
//!
//! This module reruns an algorithm over several permutations of the same
//! multiset and collects one statistics snapshot per trial, so that
//! averaged counters reflect typical rather than single-permutation
//! behavior.
//!
//! ## Design notes
//!
//! * **Reshuffling**: The working copy is reshuffled between trials with a
//!   deterministic Fisher-Yates pass; the seed advances per trial so every
//!   trial sees a different permutation.
//! * **Determinism**: A fixed seed reproduces the exact trial sequence.
//!   There is no ambient entropy source.
//! * **Invariant results**: Sorting any permutation of the same multiset
//!   yields the same sorted sequence, and selection the same value, so the
//!   reported result is independent of the shuffling.
//!
//! ## Invariants
//!
//! * Exactly `trials` snapshots are produced per run.
//! * The caller's input slice is never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::primitives::errors::RanksortError;
use crate::primitives::shuffle::shuffle;
use crate::primitives::stats::RunStats;

/// Default seed for trial reshuffling (golden-ratio constant).
pub const DEFAULT_TRIAL_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// Trial Runner
// ============================================================================

/// Repeated-run driver for an executor.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    /// Number of trials to run (at least 1).
    pub trials: usize,

    /// Base seed for the per-trial reshuffle.
    pub seed: u64,
}

impl TrialRunner {
    /// Create a runner for `trials` runs with the given base seed.
    pub fn new(trials: usize, seed: u64) -> Self {
        Self { trials, seed }
    }

    /// Run a full sort `trials` times, reshuffling between runs.
    ///
    /// Returns the sorted sequence and the per-trial snapshots.
    pub fn run_sort<T: Ord + Clone>(
        &self,
        executor: &SortExecutor<T>,
        input: &[T],
    ) -> Result<(Vec<T>, Vec<RunStats>), RanksortError> {
        let mut scratch = input.to_vec();
        let mut runs = Vec::with_capacity(self.trials);
        let mut sorted = Vec::new();

        for trial in 0..self.trials {
            let mut working = scratch.clone();
            let stats = executor.run_sort(&mut working)?;
            runs.push(stats);
            sorted = working;
            shuffle(&mut scratch, self.seed.wrapping_add(trial as u64));
        }

        Ok((sorted, runs))
    }

    /// Run a rank selection `trials` times, reshuffling between runs.
    ///
    /// Returns the selected value and the per-trial snapshots.
    pub fn run_select<T: Ord + Clone>(
        &self,
        executor: &SortExecutor<T>,
        input: &[T],
        rank: usize,
    ) -> Result<(T, Vec<RunStats>), RanksortError> {
        let mut scratch = input.to_vec();
        let mut runs = Vec::with_capacity(self.trials);
        let mut value = None;

        for trial in 0..self.trials {
            let mut working = scratch.clone();
            let (selected, stats) = executor.run_select(&mut working, rank)?;
            runs.push(stats);
            value = Some(selected);
            shuffle(&mut scratch, self.seed.wrapping_add(trial as u64));
        }

        // trials >= 1 is validated by the builder, so a value exists.
        Ok((value.expect("at least one trial"), runs))
    }
}
