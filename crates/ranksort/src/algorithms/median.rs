//! Deterministic median-of-medians selection.
//!
//! ## Purpose
//!
//! This module implements worst-case-linear rank selection. The pivot is
//! the recursively selected median of the groups-of-5 medians, which
//! guarantees that each three-way partition discards a constant fraction of
//! the range, giving Θ(n) in the worst case where quickselect degrades to
//! Θ(n²).
//!
//! ## Design notes
//!
//! * **Group medians**: Each group of at most 5 elements is sorted in place
//!   with the instrumented insertion sorter; its median is the middle of
//!   the sorted group.
//! * **Three-way partition**: The range is partitioned into `< pivot`,
//!   `= pivot`, and `> pivot` regions (Dutch national flag), so
//!   duplicate-heavy inputs cannot defeat the recursion: every element
//!   equal to the pivot is settled at once.
//! * **Rank adjustment**: Recursion continues into the one region that
//!   contains rank `k`, with `k` shifted by the sizes of the regions to its
//!   left.
//!
//! ## Invariants
//!
//! * The returned value equals `sort(data)[k - 1]`.
//! * Each recursion level processes a range at most `7n/10 + 6` long.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::insertion::insertion_sort;
use crate::primitives::stats::StatsTracker;

/// Select the k-th smallest element (1-based) in deterministic linear time.
pub fn median_of_medians_select<T: Ord + Clone>(
    data: &mut [T],
    k: usize,
    stats: &mut StatsTracker,
) -> T {
    select_in(data, k, stats)
}

/// Recursive selection within a sub-range; `k` is a 1-based rank local to
/// `data`.
fn select_in<T: Ord + Clone>(data: &mut [T], k: usize, stats: &mut StatsTracker) -> T {
    if data.len() == 1 {
        stats.record_reads(1);
        return data[0].clone();
    }

    let pivot = median_of_medians_pivot(data, stats);
    let (below, equal) = partition_three_way(data, &pivot, stats);

    if k <= below {
        select_in(&mut data[..below], k, stats)
    } else if k <= below + equal {
        pivot
    } else {
        let skip = below + equal;
        select_in(&mut data[skip..], k - skip, stats)
    }
}

/// Compute the guaranteed-good pivot: the median of the groups-of-5 medians.
fn median_of_medians_pivot<T: Ord + Clone>(data: &mut [T], stats: &mut StatsTracker) -> T {
    let mut medians: Vec<T> = data
        .chunks_mut(5)
        .map(|group| {
            insertion_sort(group, stats);
            stats.record_reads(1);
            group[(group.len() - 1) >> 1].clone()
        })
        .collect();

    if medians.len() == 1 {
        medians.pop().unwrap()
    } else {
        let mid = (medians.len() + 1) >> 1;
        select_in(&mut medians, mid, stats)
    }
}

/// Three-way partition of `data` around `pivot`.
///
/// Returns `(below, equal)`: the number of elements strictly less than and
/// equal to the pivot. After the call the layout is `[< pivot | = pivot |
/// > pivot]`.
fn partition_three_way<T: Ord>(
    data: &mut [T],
    pivot: &T,
    stats: &mut StatsTracker,
) -> (usize, usize) {
    let mut lt = 0;
    let mut i = 0;
    let mut gt = data.len();

    while i < gt {
        stats.record_compare(1);
        match data[i].cmp(pivot) {
            Ordering::Less => {
                data.swap(lt, i);
                stats.record_swap();
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
                stats.record_swap();
            }
        }
    }

    (lt, gt - lt)
}
