#![cfg(feature = "dev")]
//! Tests for the trial runner and the deterministic shuffle.
//!
//! These tests verify the repeated-run machinery:
//! - Exactly N snapshots per run, identical results across trials
//! - Deterministic reshuffling under a fixed seed
//! - Averaged statistics wired through the public builder
//!
//! ## Test Organization
//!
//! 1. **Shuffle** - permutation property, determinism
//! 2. **Trial Runner** - snapshot counts, result invariance
//! 3. **Builder Integration** - trials through the public API

use ranksort::internals::algorithms::Algorithm;
use ranksort::internals::engine::executor::SortExecutor;
use ranksort::internals::evaluation::trials::TrialRunner;
use ranksort::internals::primitives::shuffle::shuffle;
use ranksort::prelude::*;

// ============================================================================
// Shuffle Tests
// ============================================================================

/// A shuffle permutes; it never loses or invents elements.
#[test]
fn test_shuffle_is_permutation() {
    let mut data: Vec<u32> = (0..500).collect();
    shuffle(&mut data, 123);

    let mut sorted = data.clone();
    sorted.sort();
    assert_eq!(sorted, (0..500).collect::<Vec<u32>>());
}

/// The same seed reproduces the same permutation; different seeds differ.
#[test]
fn test_shuffle_determinism() {
    let base: Vec<u32> = (0..256).collect();

    let mut a = base.clone();
    let mut b = base.clone();
    shuffle(&mut a, 9);
    shuffle(&mut b, 9);
    assert_eq!(a, b);

    let mut c = base.clone();
    shuffle(&mut c, 10);
    assert_ne!(a, c);
}

/// Degenerate lengths are untouched.
#[test]
fn test_shuffle_degenerate() {
    let mut empty: Vec<u8> = vec![];
    shuffle(&mut empty, 1);
    assert!(empty.is_empty());

    let mut single = vec![5u8];
    shuffle(&mut single, 1);
    assert_eq!(single, vec![5]);
}

// ============================================================================
// Trial Runner Tests
// ============================================================================

/// N trials produce N snapshots and a sorted result invariant to the
/// reshuffling.
#[test]
fn test_run_sort_trials() {
    let data: Vec<i32> = (0..80).rev().collect();
    let executor = SortExecutor::new(Algorithm::Merge);
    let runner = TrialRunner::new(7, 42);

    let (sorted, runs) = runner.run_sort(&executor, &data).unwrap();
    assert_eq!(runs.len(), 7);
    assert_eq!(sorted, (0..80).collect::<Vec<i32>>());

    // Merge sort's comparison count varies across permutations, but moves
    // are shape-independent.
    for run in &runs {
        assert_eq!(run.swaps, runs[0].swaps);
    }
}

/// Selection across trials returns the same value every time.
#[test]
fn test_run_select_trials() {
    let data: Vec<i32> = (0..63).collect();
    let executor = SortExecutor::new(Algorithm::Quick);
    let runner = TrialRunner::new(5, 7);

    let (value, runs) = runner.run_select(&executor, &data, 32).unwrap();
    assert_eq!(value, 31);
    assert_eq!(runs.len(), 5);
}

/// The same runner configuration reproduces identical trial statistics.
#[test]
fn test_trials_deterministic_under_seed() {
    let data: Vec<i32> = (0..100).collect();
    let executor = SortExecutor::new(Algorithm::Quick);

    let (_, runs_a) = TrialRunner::new(4, 99).run_sort(&executor, &data).unwrap();
    let (_, runs_b) = TrialRunner::new(4, 99).run_sort(&executor, &data).unwrap();

    let counters =
        |runs: &[RunStats]| -> Vec<(u64, u64, u64)> {
            runs.iter()
                .map(|r| (r.array_accesses, r.swaps, r.comparisons))
                .collect()
        };
    assert_eq!(counters(&runs_a), counters(&runs_b));
}

// ============================================================================
// Builder Integration Tests
// ============================================================================

/// Trials requested through the public builder surface mean stats and
/// per-trial snapshots.
#[test]
fn test_builder_trials_report() {
    let data: Vec<i32> = (0..40).rev().collect();

    let report = Ranksort::new()
        .algorithm(Insertion)
        .trials(6)
        .seed(2024)
        .build()
        .unwrap()
        .sort(&data)
        .unwrap();

    assert_eq!(report.trials(), 6);
    let runs = report.trial_stats.as_ref().unwrap();
    assert_eq!(runs.len(), 6);
    assert_eq!(report.stats, RunStats::mean_of(runs));
    assert_eq!(report.sorted, (0..40).collect::<Vec<i32>>());
}

/// Selection with trials reports the value and averaged stats.
#[test]
fn test_builder_trials_select() {
    let data: Vec<i32> = (0..30).collect();

    let report = Ranksort::new()
        .algorithm(MedianOfMedians)
        .trials(3)
        .build()
        .unwrap()
        .select(&data, 10)
        .unwrap();

    assert_eq!(report.value, 9);
    assert_eq!(report.trials(), 3);
}
