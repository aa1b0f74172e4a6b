//! Parallel fork-join merge pass.
//!
//! ## Purpose
//!
//! This module provides the parallel merge pass that is injected into the
//! `ranksort` execution engine. It decomposes a merge sort into a fork-join
//! task tree over a shared worker pool, speeding up large sorts while
//! producing results and instrumentation counters identical to the
//! sequential engine.
//!
//! ## Design notes
//!
//! * **Implementation**: A drop-in replacement for the sequential merge
//!   pass, wired through the engine's `MergePassFn` hook.
//! * **Parallelism**: `rayon::join` forks the two halves of each range;
//!   each task covers a disjoint sub-slice (`split_at_mut`), so no two
//!   tasks ever touch the same indices.
//! * **Instrumentation**: Each task records into its own local tracker;
//!   parents fold child counters on join. No counter state is shared
//!   between concurrent tasks.
//! * **Truncation**: For rank selection, only the root task performs the
//!   truncated merge; every other merge in the tree is full. The owner of
//!   the truncated merge is therefore fixed structurally, independent of
//!   task completion order.
//! * **Cutoff**: Ranges at or below [`SEQUENTIAL_CUTOFF`] run the
//!   sequential merge sort directly; spawning has overhead and small
//!   ranges do not amortize it.
//!
//! ## Invariants
//!
//! * Output and counters equal the sequential merge sort's for any input:
//!   the task tree performs the same splits, copies, and merges, only in a
//!   different order. (The indexing read of a selected element is recorded
//!   by the engine, not by this pass.)
//! * A parent blocks in `join` until both children complete before
//!   merging; this is the only blocking point.
//!
//! ## Non-goals
//!
//! * This module does not time runs or validate ranks (engine concerns).
//! * This module does not parallelize any other algorithm; all non-merge
//!   strategies are single-threaded by design.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::join;

// Export dependencies from ranksort crate
#[cfg(feature = "cpu")]
use ranksort::internals::algorithms::merge::{merge_into, merge_sort, split_to_scratch};
#[cfg(feature = "cpu")]
use ranksort::internals::primitives::stats::StatsTracker;

// ============================================================================
// Tuning
// ============================================================================

/// Ranges at or below this length are sorted sequentially in one task.
pub const SEQUENTIAL_CUTOFF: usize = 4096;

// ============================================================================
// Parallel Merge Pass
// ============================================================================

/// Sort a slice with a fork-join merge sort, optionally truncating the
/// root merge at `limit` outputs.
///
/// Matches the `MergePassFn` hook contract of the `ranksort` engine: with
/// `limit: None` the slice ends fully sorted; with `limit: Some(k)` the
/// first `k` positions end as the k smallest elements in ascending order.
#[cfg(feature = "cpu")]
pub fn merge_pass_parallel<T>(data: &mut [T], limit: Option<usize>, stats: &mut StatsTracker)
where
    T: Ord + Clone + Send + Sync,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    // Sort both halves: sequentially below the cutoff, otherwise as a
    // forked task pair whose local counters are folded here.
    if n <= SEQUENTIAL_CUTOFF {
        let (mut left, mut right) = split_to_scratch(data, stats);
        merge_sort(&mut left, stats);
        merge_sort(&mut right, stats);
        merge_into(&left, &right, data, limit, stats);
        return;
    }

    let mid = n >> 1;
    let (left_half, right_half) = data.split_at_mut(mid);
    let (left_stats, right_stats) = join(|| sort_task(left_half), || sort_task(right_half));
    stats.absorb(&left_stats.snapshot());
    stats.absorb(&right_stats.snapshot());

    // Root merge: the only place the truncation limit applies.
    let (left, right) = split_to_scratch(data, stats);
    merge_into(&left, &right, data, limit, stats);
}

/// One fork-join task: sort a disjoint sub-range and return its local
/// counters.
#[cfg(feature = "cpu")]
fn sort_task<T>(data: &mut [T]) -> StatsTracker
where
    T: Ord + Clone + Send + Sync,
{
    let mut local = StatsTracker::new();
    let n = data.len();

    // Length <= 1 is immediately terminal.
    if n < 2 {
        return local;
    }

    if n <= SEQUENTIAL_CUTOFF {
        merge_sort(data, &mut local);
        return local;
    }

    let mid = n >> 1;
    let (left_half, right_half) = data.split_at_mut(mid);
    let (left_stats, right_stats) = join(|| sort_task(left_half), || sort_task(right_half));
    local.absorb(&left_stats.snapshot());
    local.absorb(&right_stats.snapshot());

    // Both children are complete and sorted; merge them into this task's
    // backing range. Internal merges are always full.
    let (left, right) = split_to_scratch(data, &mut local);
    merge_into(&left, &right, data, None, &mut local);

    local
}
