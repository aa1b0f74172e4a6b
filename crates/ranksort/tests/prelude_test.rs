//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the API. The prelude should provide a one-stop
//! import for common sorting/selection functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Enum variants usable without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use ranksort::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Basic sort workflow works with prelude imports alone.
#[test]
fn test_prelude_imports() {
    let data = vec![5, 3, 8, 1, 9];

    let result = Ranksort::new().algorithm(Quick).build().unwrap().sort(&data);
    assert!(result.is_ok(), "Basic sort should work with prelude imports");
}

/// All algorithm variants are exported unqualified.
#[test]
fn test_prelude_algorithm_variants() {
    let _ = Ranksort::<i32>::new().algorithm(Insertion);
    let _ = Ranksort::<i32>::new().algorithm(Selection);
    let _ = Ranksort::<i32>::new().algorithm(Bubble);
    let _ = Ranksort::<i32>::new().algorithm(Quick);
    let _ = Ranksort::<i32>::new().algorithm(Merge);
    let _ = Ranksort::<i32>::new().algorithm(Heap);
    let _ = Ranksort::<i32>::new().algorithm(MedianOfMedians);
}

/// Report, stats, and error types are nameable from the prelude.
#[test]
fn test_prelude_types() {
    let model: RanksortModel<i32> = Ranksort::new().build().unwrap();

    let report: SortReport<i32> = model.sort(&[2, 1]).unwrap();
    let stats: RunStats = report.stats;
    assert!(stats.comparisons > 0);

    let selected: SelectReport<i32> = model.select(&[2, 1], 1).unwrap();
    assert_eq!(selected.value, 1);

    let err: RanksortError = model.select(&[2, 1], 3).unwrap_err();
    assert_eq!(err, RanksortError::RankOutOfRange { rank: 3, len: 2 });
}

/// The median rank helper is exported.
#[test]
fn test_prelude_median_rank() {
    assert_eq!(median_rank(9), 5);
}
