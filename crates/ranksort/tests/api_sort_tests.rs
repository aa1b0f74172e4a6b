//! Tests for the public sorting API.
//!
//! These tests exercise every algorithm through the fluent builder and
//! verify the sorting contract:
//! - Ordering: output is non-decreasing
//! - Permutation invariance: output is the same multiset as the input
//! - Idempotence: sorting a sorted sequence changes nothing
//! - Cross-algorithm agreement: all algorithms produce identical output
//! - Degenerate inputs: empty and singleton sequences are no-ops
//!
//! ## Test Organization
//!
//! 1. **Worked Examples** - small fixed vectors
//! 2. **Sorting Properties** - ordering, permutation, idempotence, agreement
//! 3. **Input Shapes** - sorted, reverse, duplicates, strings
//! 4. **Operation Support** - median-of-medians has no full sort
//! 5. **Report Contents** - statistics and display

use ranksort::prelude::*;

/// The six full-sort algorithms.
const SORTS: [Algorithm; 6] = [Insertion, Selection, Bubble, Quick, Merge, Heap];

fn sort_with(algorithm: Algorithm, data: &[i32]) -> SortReport<i32> {
    Ranksort::new()
        .algorithm(algorithm)
        .build()
        .unwrap()
        .sort(data)
        .unwrap()
}

// ============================================================================
// Worked Examples
// ============================================================================

/// `sort([5,3,8,1,9])` yields `[1,3,5,8,9]` for every algorithm.
#[test]
fn test_sort_worked_example() {
    for algorithm in SORTS {
        let report = sort_with(algorithm, &[5, 3, 8, 1, 9]);
        assert_eq!(
            report.sorted,
            vec![1, 3, 5, 8, 9],
            "algorithm = {}",
            algorithm.name()
        );
    }
}

/// Empty and singleton sequences pass through unchanged.
#[test]
fn test_sort_degenerate_inputs() {
    for algorithm in SORTS {
        assert!(sort_with(algorithm, &[]).sorted.is_empty());
        assert_eq!(sort_with(algorithm, &[4]).sorted, vec![4]);
    }
}

// ============================================================================
// Sorting Properties
// ============================================================================

/// Output is non-decreasing and a permutation of the input.
#[test]
fn test_sort_ordering_and_permutation() {
    // Fixed pseudo-random input with repeats.
    let data: Vec<i32> = (0..200).map(|i| (i * 31 + 7) % 83).collect();

    let mut expected = data.clone();
    expected.sort();

    for algorithm in SORTS {
        let report = sort_with(algorithm, &data);
        assert!(
            report.sorted.windows(2).all(|w| w[0] <= w[1]),
            "not ordered for {}",
            algorithm.name()
        );
        // Value-wise equality against the std baseline doubles as the
        // multiset check.
        assert_eq!(report.sorted, expected, "algorithm = {}", algorithm.name());
    }
}

/// Sorting twice equals sorting once.
#[test]
fn test_sort_idempotence() {
    let data = vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 5];

    for algorithm in SORTS {
        let once = sort_with(algorithm, &data).sorted;
        let twice = sort_with(algorithm, &once).sorted;
        assert_eq!(once, twice, "algorithm = {}", algorithm.name());
    }
}

/// All algorithms agree pairwise (checked against one baseline).
#[test]
fn test_sort_cross_algorithm_agreement() {
    let data: Vec<i32> = (0..500).map(|i| ((i * 131) ^ (i >> 2)) % 997 - 400).collect();
    let baseline = sort_with(Quick, &data).sorted;

    for algorithm in SORTS {
        assert_eq!(
            sort_with(algorithm, &data).sorted,
            baseline,
            "algorithm = {}",
            algorithm.name()
        );
    }
}

// ============================================================================
// Input Shapes
// ============================================================================

/// Already-sorted and reverse-sorted inputs.
#[test]
fn test_sort_sorted_and_reversed_inputs() {
    let sorted: Vec<i32> = (0..100).collect();
    let reversed: Vec<i32> = (0..100).rev().collect();

    for algorithm in SORTS {
        assert_eq!(sort_with(algorithm, &sorted).sorted, sorted);
        assert_eq!(sort_with(algorithm, &reversed).sorted, sorted);
    }
}

/// Duplicate-heavy and all-equal inputs.
#[test]
fn test_sort_duplicates() {
    let duplicates: Vec<i32> = (0..120).map(|i| i % 3).collect();
    let mut expected = duplicates.clone();
    expected.sort();

    let all_equal = vec![7; 40];

    for algorithm in SORTS {
        assert_eq!(sort_with(algorithm, &duplicates).sorted, expected);
        assert_eq!(sort_with(algorithm, &all_equal).sorted, all_equal);
    }
}

/// Arbitrary ordered element types work; strings are the canonical case.
#[test]
fn test_sort_strings() {
    let data = vec![
        "pear".to_string(),
        "apple".to_string(),
        "orange".to_string(),
        "banana".to_string(),
        "apple".to_string(),
    ];
    let mut expected = data.clone();
    expected.sort();

    for algorithm in SORTS {
        let report = Ranksort::new()
            .algorithm(algorithm)
            .build()
            .unwrap()
            .sort(&data)
            .unwrap();
        assert_eq!(report.sorted, expected, "algorithm = {}", algorithm.name());
    }
}

// ============================================================================
// Operation Support
// ============================================================================

/// Median-of-medians is selection-only.
#[test]
fn test_sort_median_of_medians_unsupported() {
    let model = Ranksort::new().algorithm(MedianOfMedians).build().unwrap();
    let err = model.sort(&[3, 1, 2]).unwrap_err();
    assert_eq!(
        err,
        RanksortError::UnsupportedOperation {
            algorithm: "MedianOfMedians",
            operation: "sort",
        }
    );
}

// ============================================================================
// Report Contents
// ============================================================================

/// A non-trivial sort records work in every counter it should.
#[test]
fn test_sort_report_statistics() {
    let data: Vec<i32> = (0..64).rev().collect();
    let report = sort_with(Quick, &data);

    assert!(report.stats.comparisons > 0);
    assert!(report.stats.swaps > 0);
    assert!(report.stats.array_accesses > 0);
    assert!(report.trial_stats.is_none());
    assert_eq!(report.trials(), 1);
    assert_eq!(report.algorithm, Quick);
}

/// The display form mentions the algorithm and the counters.
#[test]
fn test_sort_report_display() {
    let report = sort_with(Heap, &[3, 1, 2]);
    let text = format!("{report}");

    assert!(text.contains("Algorithm:      Heap"));
    assert!(text.contains("Comparisons:"));
    assert!(text.contains("Sorted Data:"));
}

/// Long outputs elide the middle rows.
#[test]
fn test_sort_report_display_elision() {
    let data: Vec<i32> = (0..50).rev().collect();
    let text = format!("{}", sort_with(Merge, &data));
    assert!(text.contains("..."));
    assert!(text.contains("[49] 49"));
}
