//! # Fast Ranksort - Parallel Fork-Join Merge Sorting and Selection
//!
//! Parallel companion to the `ranksort` crate: the same instrumented
//! sorting/selection engine, with the merge strategy decomposed into a
//! fork-join task tree over a shared worker pool.
//!
//! ## How it works
//!
//! A task covering a range splits it at the midpoint into two child tasks
//! over disjoint sub-slices, submits both to the pool, blocks until they
//! complete, and merges their results into its own backing range. Ranges
//! of length <= 1 are immediately terminal, and small ranges fall back to
//! the sequential engine. For a given input, the result -- and the
//! instrumentation counters, which are kept task-local and folded on join
//! -- are identical to the sequential merge sort's.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastRanksort::prelude::*;
//!
//! let data: Vec<i64> = (0..10_000).rev().collect();
//!
//! // Build the model with parallel execution (default)
//! let model = Ranksort::new().build()?;
//!
//! // Sort a copy of the data
//! let report = model.sort(&data)?;
//! assert!(report.sorted.windows(2).all(|w| w[0] <= w[1]));
//!
//! // Rank selection: only the root task's merge truncates at k
//! let third = model.select(&data, 3)?;
//! assert_eq!(third.value, 2);
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ### Sequential fallback
//!
//! ```rust
//! use fastRanksort::prelude::*;
//!
//! let data = vec![5, 3, 8, 1, 9];
//!
//! // Identical to the base crate's merge model
//! let model = Ranksort::new().parallel(false).build()?;
//! assert_eq!(model.sort(&data)?.sorted, vec![1, 3, 5, 8, 9]);
//! # Result::<(), RanksortError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 3: Engine - parallel merge coordinator.
mod engine;

// High-level fluent API with parallel defaults.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        median_rank,
        Algorithm::{Bubble, Heap, Insertion, MedianOfMedians, Merge, Quick, Selection},
        Algorithm, ParallelRanksortBuilder as Ranksort, RanksortError, RanksortModel, RunStats,
        SelectReport, SortReport,
    };
}

// Internal modules for development and testing.
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
