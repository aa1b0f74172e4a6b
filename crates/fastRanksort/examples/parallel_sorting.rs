//! Parallel merge sorting with instrumentation.
//!
//! Run with: `cargo run --example parallel_sorting`

use fastRanksort::prelude::*;

fn main() -> Result<(), RanksortError> {
    // A large descending sequence: worst case for naive strategies, easy
    // work for a fork-join merge sort.
    let data: Vec<i64> = (0..100_000).rev().collect();

    let model = Ranksort::new().build()?;

    let report = model.sort(&data)?;
    println!("{report}");

    // Rank selection reuses the same task tree with a truncated root merge.
    let median = model.select_median(&data)?;
    println!("{median}");

    Ok(())
}
