//! Selection sort and its rank-truncated sweep.
//!
//! ## Purpose
//!
//! This module implements selection sort as a single minimum-scan sweep
//! parameterized by how many leading positions must settle. The full sort
//! settles `n - 1` positions (the last falls out for free); the k-variant
//! stops as soon as the first `k` positions hold their final values.
//!
//! ## Invariants
//!
//! * After `settle_prefix(data, k)`, positions `0..k` hold the k smallest
//!   elements in ascending order.
//! * A position is swapped at most once per sweep step, so the sweep
//!   performs at most `k` swaps.

// Internal dependencies
use crate::primitives::stats::StatsTracker;

/// Sort a slice ascending by repeated minimum selection.
pub fn selection_sort<T: Ord>(data: &mut [T], stats: &mut StatsTracker) {
    let n = data.len();
    if n < 2 {
        return;
    }
    settle_prefix(data, n - 1, stats);
}

/// Select the k-th smallest element (1-based) by settling only the first
/// `k` positions.
pub fn selection_sort_k<T: Ord + Clone>(data: &mut [T], k: usize, stats: &mut StatsTracker) -> T {
    settle_prefix(data, k, stats);
    stats.record_reads(1);
    data[k - 1].clone()
}

/// Settle the first `k` positions to their final sorted values.
fn settle_prefix<T: Ord>(data: &mut [T], k: usize, stats: &mut StatsTracker) {
    let n = data.len();
    for i in 0..k.min(n) {
        let mut min_idx = i;
        stats.record_reads(1);
        for j in (i + 1)..n {
            stats.record_compare(2);
            if data[j] < data[min_idx] {
                min_idx = j;
                stats.record_reads(1);
            }
        }
        // Swap only when the minimum is not already in place.
        if min_idx != i {
            data.swap(i, min_idx);
            stats.record_swap();
        }
    }
}
