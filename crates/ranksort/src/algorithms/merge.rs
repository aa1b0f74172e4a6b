//! Top-down merge sort and the shared truncatable merge.
//!
//! ## Purpose
//!
//! This module implements the classic recursive merge sort plus the
//! rank-truncated variant, both built on one merge primitive that the
//! parallel coordinator reuses as well.
//!
//! ## Design notes
//!
//! * **Shared primitive**: [`merge_into`] merges two sorted runs into an
//!   output slice and stops early when an optional limit of output
//!   positions has been filled. Full merge and k-truncated merge are the
//!   `None`/`Some(k)` instantiations of the same code.
//! * **Tie handling**: Ties favor the left run, making the merge stable
//!   between its two inputs (not promised to callers).
//! * **Truncated sort**: `merge_sort_k` fully sorts both halves and
//!   truncates only the final merge; after it returns, the first `k`
//!   positions of the slice are the k smallest elements in order.
//!
//! ## Invariants
//!
//! * `merge_into` writes `min(limit, left.len() + right.len())` positions.
//! * Scratch copies record one move per element.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::stats::StatsTracker;

/// Sort a slice ascending with top-down recursive merge sort.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T], stats: &mut StatsTracker) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let (mut left, mut right) = split_to_scratch(data, stats);
    merge_sort(&mut left, stats);
    merge_sort(&mut right, stats);
    merge_into(&left, &right, data, None, stats);
}

/// Select the k-th smallest element (1-based) with a merge sort whose final
/// merge halts once `k` output positions are filled.
pub fn merge_sort_k<T: Ord + Clone>(data: &mut [T], k: usize, stats: &mut StatsTracker) -> T {
    let n = data.len();
    if n >= 2 {
        let (mut left, mut right) = split_to_scratch(data, stats);
        merge_sort(&mut left, stats);
        merge_sort(&mut right, stats);
        merge_into(&left, &right, data, Some(k), stats);
    }
    stats.record_reads(1);
    data[k - 1].clone()
}

/// Merge two sorted runs into `out`, stopping after `limit` outputs.
///
/// `out` must be at least `left.len() + right.len()` long over the region
/// being written. With `limit: None` the merge is exhaustive.
pub fn merge_into<T: Ord + Clone>(
    left: &[T],
    right: &[T],
    out: &mut [T],
    limit: Option<usize>,
    stats: &mut StatsTracker,
) {
    let total = left.len() + right.len();
    let cap = limit.unwrap_or(total).min(total);

    let mut li = 0;
    let mut ri = 0;
    let mut oi = 0;

    while oi < cap && li < left.len() && ri < right.len() {
        stats.record_compare(2);
        // Ties favor the left run.
        if left[li] <= right[ri] {
            out[oi] = left[li].clone();
            li += 1;
        } else {
            out[oi] = right[ri].clone();
            ri += 1;
        }
        stats.record_move();
        oi += 1;
    }

    while oi < cap && li < left.len() {
        out[oi] = left[li].clone();
        stats.record_move();
        li += 1;
        oi += 1;
    }

    while oi < cap && ri < right.len() {
        out[oi] = right[ri].clone();
        stats.record_move();
        ri += 1;
        oi += 1;
    }
}

/// Copy the two halves of `data` into owned scratch runs, recording one
/// move per copied element.
///
/// Shared with the parallel coordinator, which performs the same copy per
/// task before merging.
pub fn split_to_scratch<T: Clone>(
    data: &[T],
    stats: &mut StatsTracker,
) -> (Vec<T>, Vec<T>) {
    let mid = data.len() >> 1;
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    stats.record_moves(data.len() as u64);
    (left, right)
}
