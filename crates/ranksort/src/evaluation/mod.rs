//! Layer 4: Evaluation
//!
//! This layer provides the trial runner: repeated instrumented runs over
//! reshuffled permutations of the same input, with averaged statistics.
//! It drives the engine layer below it.

// Trial loops and statistics averaging.
pub mod trials;
