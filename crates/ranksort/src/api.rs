//! High-level API for instrumented sorting and selection.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the algorithm and trial behavior, and a
//! model type whose methods run the engine and package reports.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `build()` is called;
//!   duplicate configuration is detected and reported.
//! * **Borrow or own**: `sort`/`select` take `&[T]` and return owned
//!   reports; the `_in_place` forms borrow the caller's slice mutably and
//!   return only statistics, allocating no full-size copy.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RanksortBuilder`] via `Ranksort::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.trials()`, `.seed()`).
//! 3. Call `.build()` to obtain a [`RanksortModel`].

// Internal dependencies
use crate::engine::executor::{MergePassFn, SortExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::trials::{TrialRunner, DEFAULT_TRIAL_SEED};

// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::engine::output::{SelectReport, SortReport};
pub use crate::primitives::errors::RanksortError;
pub use crate::primitives::stats::RunStats;

/// The 1-based rank of the lower median of a sequence of length `len`.
///
/// `median_rank(5) == 3`, `median_rank(6) == 3`, `median_rank(1) == 1`.
pub fn median_rank(len: usize) -> usize {
    (len + 1) >> 1
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring sorting/selection runs.
#[derive(Debug, Clone)]
pub struct RanksortBuilder<T> {
    /// Algorithm to run.
    pub algorithm: Option<Algorithm>,

    /// Number of trials for averaged statistics.
    pub trials: Option<usize>,

    /// Base seed for trial reshuffling.
    pub seed: Option<u64>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom merge pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_merge_pass: Option<MergePassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Ord + Clone> Default for RanksortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> RanksortBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            trials: None,
            seed: None,
            custom_merge_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the algorithm to run.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param.get_or_insert("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the number of trials; statistics are averaged across them.
    pub fn trials(mut self, trials: usize) -> Self {
        if self.trials.is_some() {
            self.duplicate_param.get_or_insert("trials");
        }
        self.trials = Some(trials);
        self
    }

    /// Set the base seed for the deterministic reshuffle between trials.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param.get_or_insert("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set a custom merge pass function (e.g., for parallelization).
    #[doc(hidden)]
    pub fn custom_merge_pass(mut self, merge_pass_fn: Option<MergePassFn<T>>) -> Self {
        self.custom_merge_pass = merge_pass_fn;
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<RanksortModel<T>, RanksortError> {
        // Check for duplicate parameter configuration.
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate trials.
        let trials = self.trials.unwrap_or(1);
        Validator::validate_trials(trials)?;

        Ok(RanksortModel {
            algorithm: self.algorithm.unwrap_or_default(),
            trials,
            seed: self.seed.unwrap_or(DEFAULT_TRIAL_SEED),
            custom_merge_pass: self.custom_merge_pass,
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured sorting/selection model.
#[derive(Debug, Clone)]
pub struct RanksortModel<T> {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Number of trials behind averaged statistics.
    pub trials: usize,

    /// Base seed for trial reshuffling.
    pub seed: u64,

    /// Custom merge pass function, if any.
    #[doc(hidden)]
    pub custom_merge_pass: Option<MergePassFn<T>>,
}

impl<T: Ord + Clone> RanksortModel<T> {
    fn executor(&self) -> SortExecutor<T> {
        SortExecutor::new(self.algorithm).custom_merge_pass(self.custom_merge_pass)
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sort a copy of `data` ascending and report the result.
    pub fn sort(&self, data: &[T]) -> Result<SortReport<T>, RanksortError> {
        let executor = self.executor();

        if self.trials == 1 {
            let mut sorted = data.to_vec();
            let stats = executor.run_sort(&mut sorted)?;
            return Ok(SortReport {
                sorted,
                algorithm: self.algorithm,
                stats,
                trial_stats: None,
            });
        }

        let runner = TrialRunner::new(self.trials, self.seed);
        let (sorted, runs) = runner.run_sort(&executor, data)?;
        Ok(SortReport {
            sorted,
            algorithm: self.algorithm,
            stats: RunStats::mean_of(&runs),
            trial_stats: Some(runs),
        })
    }

    /// Sort the caller's slice in place and return only the statistics.
    pub fn sort_in_place(&self, data: &mut [T]) -> Result<RunStats, RanksortError> {
        self.executor().run_sort(data)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select the element of 1-based rank `rank` from a copy of `data`.
    ///
    /// `rank` = 1 selects the minimum, `rank` = `data.len()` the maximum.
    pub fn select(&self, data: &[T], rank: usize) -> Result<SelectReport<T>, RanksortError> {
        let executor = self.executor();

        if self.trials == 1 {
            let mut working = data.to_vec();
            let (value, stats) = executor.run_select(&mut working, rank)?;
            return Ok(SelectReport {
                value,
                rank,
                algorithm: self.algorithm,
                stats,
                trial_stats: None,
            });
        }

        let runner = TrialRunner::new(self.trials, self.seed);
        let (value, runs) = runner.run_select(&executor, data, rank)?;
        Ok(SelectReport {
            value,
            rank,
            algorithm: self.algorithm,
            stats: RunStats::mean_of(&runs),
            trial_stats: Some(runs),
        })
    }

    /// Select from the caller's slice in place, leaving it partially
    /// reordered, and return the value with its statistics.
    pub fn select_in_place(&self, data: &mut [T], rank: usize) -> Result<(T, RunStats), RanksortError> {
        self.executor().run_select(data, rank)
    }

    /// Select the lower median (rank `(len + 1) / 2`).
    pub fn select_median(&self, data: &[T]) -> Result<SelectReport<T>, RanksortError> {
        if data.is_empty() {
            return Err(RanksortError::EmptyInput);
        }
        self.select(data, median_rank(data.len()))
    }
}
