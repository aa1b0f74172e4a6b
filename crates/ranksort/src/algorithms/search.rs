//! Instrumented binary search over a sorted range.
//!
//! ## Purpose
//!
//! This module provides the binary search used by the insertion sorter to
//! locate placement positions in the already-sorted prefix.
//!
//! ## Design notes
//!
//! * **Result convention**: `Ok(pos)` is the index of an exact match;
//!   `Err(pos)` is the insertion point that keeps the range sorted (the
//!   idiomatic rendition of the classic negated-insertion-point encoding).
//! * **Instrumentation**: Each probe records one comparison and one element
//!   read (the probed element; the key is a held value).
//!
//! ## Invariants
//!
//! * `data` must be sorted ascending; the result is unspecified otherwise.
//! * `Err(pos)` satisfies `0 <= pos <= data.len()`.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::stats::StatsTracker;

/// Binary search for `key` in a sorted slice.
///
/// Returns `Ok(index)` of an arbitrary exact match, or `Err(insertion_point)`
/// when `key` is absent.
pub fn binary_search<T: Ord>(data: &[T], key: &T, stats: &mut StatsTracker) -> Result<usize, usize> {
    let mut lo = 0;
    let mut hi = data.len();

    while lo < hi {
        let mid = (lo + hi) >> 1;
        stats.record_compare(1);
        match data[mid].cmp(key) {
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
            Ordering::Equal => return Ok(mid),
        }
    }

    Err(lo)
}
