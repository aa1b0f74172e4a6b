//! High-level API for sorting and selection with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for parallel merge
//! sorting and selection. It wraps the base `ranksort` builder and wires
//! the fork-join merge pass into the engine at build time.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `ranksort` builder pattern.
//! * **Parallel-First**: Defaults to the merge algorithm with parallel
//!   execution enabled.
//! * **Transparent**: `.parallel(false)` yields a model identical to the
//!   sequential crate's.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelRanksortBuilder`] via `Ranksort::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.trials()`, `.seed()`,
//!    `.parallel()`).
//! 3. Call `.build()` to obtain a [`RanksortModel`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::merge_pass_parallel;

// Publicly re-exported types
pub use ranksort::internals::api::{
    median_rank, RanksortBuilder, RanksortModel, SelectReport, SortReport,
};
pub use ranksort::internals::algorithms::Algorithm;
pub use ranksort::internals::primitives::errors::RanksortError;
pub use ranksort::internals::primitives::stats::RunStats;

// ============================================================================
// Parallel Builder
// ============================================================================

/// Fluent builder for parallel sorting/selection runs.
#[derive(Debug, Clone)]
pub struct ParallelRanksortBuilder<T> {
    /// Base builder from the ranksort crate.
    pub base: RanksortBuilder<T>,

    /// Whether to inject the parallel merge pass at build time.
    parallel: bool,
}

impl<T: Ord + Clone + Send + Sync> Default for ParallelRanksortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone + Send + Sync> ParallelRanksortBuilder<T> {
    /// Create a new builder with parallel defaults.
    ///
    /// # Defaults
    ///
    /// * algorithm: `Merge` (the only parallel strategy)
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            base: RanksortBuilder::new().algorithm(Algorithm::Merge),
            parallel: true,
        }
    }

    /// Set the algorithm to run.
    ///
    /// Only `Merge` has a parallel form; other algorithms run
    /// single-threaded exactly as in the base crate.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        // Replace the default rather than tripping duplicate detection.
        self.base.algorithm = Some(algorithm);
        self
    }

    /// Set the number of trials; statistics are averaged across them.
    pub fn trials(mut self, trials: usize) -> Self {
        self.base = self.base.trials(trials);
        self
    }

    /// Set the base seed for the deterministic reshuffle between trials.
    pub fn seed(mut self, seed: u64) -> Self {
        self.base = self.base.seed(seed);
        self
    }

    /// Enable or disable parallel merge execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<RanksortModel<T>, RanksortError> {
        #[cfg(feature = "cpu")]
        let base = if self.parallel {
            self.base.custom_merge_pass(Some(merge_pass_parallel::<T>))
        } else {
            self.base
        };

        #[cfg(not(feature = "cpu"))]
        let base = self.base;

        base.build()
    }
}
