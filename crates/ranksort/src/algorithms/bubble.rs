//! Bubble sort with zero-swap early exit.
//!
//! ## Purpose
//!
//! This module implements bubble sort as repeated adjacent-swap passes that
//! shrink the unsorted region by one from the right each pass, terminating
//! early the first time a pass performs no swap.
//!
//! ## Design notes
//!
//! * **Early exit**: A swap-free pass proves the remaining prefix is
//!   sorted; on already-sorted input the full sort costs exactly `n - 1`
//!   comparisons and zero swaps.
//! * **Selection**: Each pass settles the largest remaining element at the
//!   right edge, so the k-variant only needs passes until the settled
//!   suffix reaches position `k - 1`.
//!
//! ## Invariants
//!
//! * After `p` passes, the last `p` positions hold their final values.

// Internal dependencies
use crate::primitives::stats::StatsTracker;

/// Sort a slice ascending with bubble sort.
pub fn bubble_sort<T: Ord>(data: &mut [T], stats: &mut StatsTracker) {
    bubble_passes(data, 1, stats);
}

/// Select the k-th smallest element (1-based) by bubbling only until the
/// suffix `k-1..n` has settled.
pub fn bubble_sort_k<T: Ord + Clone>(data: &mut [T], k: usize, stats: &mut StatsTracker) -> T {
    bubble_passes(data, k, stats);
    stats.record_reads(1);
    data[k - 1].clone()
}

/// Run adjacent-swap passes until the unsorted region has shrunk to end at
/// `stop` (exclusive), or until a pass performs no swap.
fn bubble_passes<T: Ord>(data: &mut [T], stop: usize, stats: &mut StatsTracker) {
    let mut end = data.len();
    while end >= stop && end > 1 {
        let mut swapped = false;
        for i in 0..end - 1 {
            stats.record_compare(2);
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                stats.record_swap();
                swapped = true;
            }
        }
        end -= 1;
        if !swapped {
            return;
        }
    }
}
