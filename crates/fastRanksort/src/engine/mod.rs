//! Layer 3: Engine
//!
//! This layer provides the parallel merge coordinator. It distributes the
//! recursive halves of a merge sort across a pool of worker threads.

// Parallel fork-join merge pass using CPU threads.
pub mod executor;
