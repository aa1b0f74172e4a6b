#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the fail-fast checks that guard the engine:
//! - Rank bounds against the sequence length
//! - Trial counts
//! - Duplicate builder parameters
//!
//! ## Test Organization
//!
//! 1. **Rank Validation** - empty input, bounds, valid ranks
//! 2. **Trials Validation**
//! 3. **Duplicate Detection** - validator and builder behavior

use ranksort::internals::engine::validator::Validator;
use ranksort::internals::primitives::errors::RanksortError;
use ranksort::prelude::*;

// ============================================================================
// Rank Validation Tests
// ============================================================================

/// An empty sequence has no valid rank at all.
#[test]
fn test_validate_rank_empty() {
    assert_eq!(
        Validator::validate_rank(1, 0),
        Err(RanksortError::EmptyInput)
    );
    assert_eq!(
        Validator::validate_rank(0, 0),
        Err(RanksortError::EmptyInput)
    );
}

/// Ranks are 1-based and bounded by the length.
#[test]
fn test_validate_rank_bounds() {
    assert_eq!(
        Validator::validate_rank(0, 5),
        Err(RanksortError::RankOutOfRange { rank: 0, len: 5 })
    );
    assert_eq!(
        Validator::validate_rank(6, 5),
        Err(RanksortError::RankOutOfRange { rank: 6, len: 5 })
    );

    assert_eq!(Validator::validate_rank(1, 5), Ok(()));
    assert_eq!(Validator::validate_rank(5, 5), Ok(()));
    assert_eq!(Validator::validate_rank(1, 1), Ok(()));
}

// ============================================================================
// Trials Validation Tests
// ============================================================================

/// Zero trials is rejected; anything else passes.
#[test]
fn test_validate_trials() {
    assert_eq!(
        Validator::validate_trials(0),
        Err(RanksortError::InvalidTrials(0))
    );
    assert_eq!(Validator::validate_trials(1), Ok(()));
    assert_eq!(Validator::validate_trials(100), Ok(()));
}

/// The builder surfaces a zero trial count at build time.
#[test]
fn test_builder_rejects_zero_trials() {
    let err = Ranksort::<i32>::new().trials(0).build().unwrap_err();
    assert_eq!(err, RanksortError::InvalidTrials(0));
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// The validator reports the offending parameter name.
#[test]
fn test_validate_no_duplicates() {
    assert_eq!(Validator::validate_no_duplicates(None), Ok(()));
    assert_eq!(
        Validator::validate_no_duplicates(Some("algorithm")),
        Err(RanksortError::DuplicateParameter {
            parameter: "algorithm"
        })
    );
}

/// Setting the same builder parameter twice fails at build.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Ranksort::<i32>::new()
        .algorithm(Quick)
        .algorithm(Heap)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RanksortError::DuplicateParameter {
            parameter: "algorithm"
        }
    );

    let err = Ranksort::<i32>::new().seed(1).seed(2).build().unwrap_err();
    assert_eq!(err, RanksortError::DuplicateParameter { parameter: "seed" });
}

/// Error messages are human-readable.
#[test]
fn test_error_display() {
    let text = RanksortError::RankOutOfRange { rank: 7, len: 5 }.to_string();
    assert!(text.contains('7'));
    assert!(text.contains("[1, 5]"));

    let text = RanksortError::UnsupportedOperation {
        algorithm: "MedianOfMedians",
        operation: "sort",
    }
    .to_string();
    assert!(text.contains("MedianOfMedians"));
    assert!(text.contains("sort"));
}
