//! # Ranksort - Instrumented Sorting and Order-Statistic Selection
//!
//! A generic, instrumented library of comparison-based sorting algorithms
//! and k-th smallest (order-statistic) selection over arbitrary totally
//! ordered element types.
//!
//! ## What does it provide?
//!
//! Six full sorting strategies (insertion with binary-search placement,
//! selection, bubble with early exit, iterative quicksort, top-down merge
//! sort, heapsort), a k-truncated selection counterpart for each of them,
//! quickselect, and the deterministic worst-case-linear median-of-medians
//! selector. Every run reports element accesses, swaps, comparisons, and
//! elapsed time through a uniform instrumentation contract, and runs can be
//! repeated over reshuffled permutations with averaged statistics.
//!
//! For parallel fork-join merge sorting, see the companion `fastRanksort`
//! crate.
//!
//! ## Quick Start
//!
//! ### Sorting
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let data = vec![5, 3, 8, 1, 9];
//!
//! // Build the model
//! let model = Ranksort::new()
//!     .algorithm(Quick)   // Iterative quicksort
//!     .build()?;
//!
//! // Sort a copy of the data
//! let report = model.sort(&data)?;
//!
//! assert_eq!(report.sorted, vec![1, 3, 5, 8, 9]);
//! println!("{}", report);
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:      Quick
//!   Elements:       5
//!   Array accesses: 20
//!   Swaps:          2
//!   Comparisons:    9
//!   Elapsed time:   0.000000417s
//!
//! Sorted Data:
//!   [0] 1
//!   [1] 3
//!   [2] 5
//!   [3] 8
//!   [4] 9
//! ```
//!
//! ### Selection
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let data = vec![7, 2, 9, 4, 1, 6, 3, 8, 5, 0, 10];
//!
//! // Deterministic worst-case-linear selection
//! let model = Ranksort::new()
//!     .algorithm(MedianOfMedians)
//!     .build()?;
//!
//! // 1-based rank: 1 is the minimum
//! let report = model.select(&data, 1)?;
//! assert_eq!(report.value, 0);
//!
//! // The lower median
//! let median = model.select_median(&data)?;
//! assert_eq!(median.value, 5);
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ### Averaged trials
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let data = vec![4, 2, 7, 1, 9, 3, 8, 5, 6, 0];
//!
//! // Average counters over 10 reshuffled trials
//! let model = Ranksort::new()
//!     .algorithm(Heap)
//!     .trials(10)
//!     .seed(42)       // Reproducible reshuffling
//!     .build()?;
//!
//! let report = model.sort(&data)?;
//! assert_eq!(report.trial_stats.as_ref().map(Vec::len), Some(10));
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `sort` and `select` return `Result<_, RanksortError>`. Out-of-range
//! ranks are reported, never mapped to sentinel values:
//!
//! ```rust
//! use ranksort::prelude::*;
//!
//! let model = Ranksort::new().algorithm(Quick).build()?;
//!
//! let err = model.select(&[4], 2).unwrap_err();
//! assert_eq!(err, RanksortError::RankOutOfRange { rank: 2, len: 1 });
//!
//! let err = model.select(&Vec::<i32>::new(), 1).unwrap_err();
//! assert_eq!(err, RanksortError::EmptyInput);
//! # Result::<(), RanksortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency; counters stay exact while
//! elapsed times read as zero (no monotonic clock without `std`):
//!
//! ```toml
//! [dependencies]
//! ranksort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, statistics, shuffling.
mod primitives;

// Layer 2: Algorithms - sorting and selection strategies.
mod algorithms;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// Layer 4: Evaluation - trial loops and averaging.
mod evaluation;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        median_rank,
        Algorithm::{Bubble, Heap, Insertion, MedianOfMedians, Merge, Quick, Selection},
        RanksortBuilder as Ranksort, RanksortError, RanksortModel, RunStats, SelectReport,
        SortReport,
    };
    pub use crate::algorithms::Algorithm;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for extension crates (the
// parallel companion) and integration tests. It is only available with the
// `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
