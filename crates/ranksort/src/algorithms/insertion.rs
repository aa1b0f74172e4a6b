//! Insertion sort with binary-search placement.
//!
//! ## Purpose
//!
//! This module implements insertion sort where the placement position in the
//! sorted prefix is found by binary search rather than a linear scan, plus
//! the rank-selection form.
//!
//! ## Design notes
//!
//! * **Tie-break policy**: Equal keys insert AFTER the matched equal
//!   element (`Ok(pos)` maps to `pos + 1`), so runs of equal keys grow at
//!   their right edge.
//! * **Block shift**: The shift of the intervening block is a single
//!   `rotate_right(1)` over `[pos, i]`; each displaced element counts as one
//!   move.
//! * **Selection**: Binary-search insertion cannot cheaply truncate at rank
//!   k, so the k-variant sorts fully and indexes.
//!
//! ## Invariants
//!
//! * After iteration `i`, the prefix `[0, i]` is sorted.
//! * The sequence is always a permutation of the input.

// Internal dependencies
use crate::algorithms::search::binary_search;
use crate::primitives::stats::StatsTracker;

/// Sort a slice ascending with binary-search insertion sort.
pub fn insertion_sort<T: Ord + Clone>(data: &mut [T], stats: &mut StatsTracker) {
    for i in 1..data.len() {
        stats.record_reads(1);
        let key = data[i].clone();

        // Equal keys insert after the matched element.
        let pos = match binary_search(&data[..i], &key, stats) {
            Ok(p) => p + 1,
            Err(p) => p,
        };

        if pos < i {
            data[pos..=i].rotate_right(1);
            stats.record_moves((i - pos) as u64 + 1);
        }
    }
}

/// Select the k-th smallest element (1-based) by fully sorting, then indexing.
pub fn insertion_sort_k<T: Ord + Clone>(data: &mut [T], k: usize, stats: &mut StatsTracker) -> T {
    insertion_sort(data, stats);
    stats.record_reads(1);
    data[k - 1].clone()
}
