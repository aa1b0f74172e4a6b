//! Instrumentation counters for sorting and selection runs.
//!
//! ## Purpose
//!
//! This module provides the statistics context that every algorithm in the
//! crate updates while it runs: element accesses, swaps (element
//! relocations), three-way comparisons, and elapsed wall-clock time. The
//! engine creates a fresh tracker per invocation and freezes it into an
//! immutable [`RunStats`] snapshot on completion.
//!
//! ## Design notes
//!
//! * **Explicit context**: The tracker is passed `&mut` into each algorithm
//!   call; there is no global mutable state.
//! * **Parallel folding**: Fork-join tasks keep task-local trackers and fold
//!   them into their parent via [`StatsTracker::absorb`], so concurrent
//!   tasks never share a counter.
//! * **Timing**: Wall-clock timing requires the `std` feature; under
//!   `no_std` the elapsed time stays zero while counters remain exact.
//!
//! ## Key concepts
//!
//! ### Recording contract
//!
//! Every algorithm records its work through the same four primitives:
//!
//! | Event | `comparisons` | `swaps` | `array_accesses` |
//! |---|---|---|---|
//! | `record_reads(n)`: n element reads | | | +n |
//! | `record_compare(reads)`: one comparison | +1 | | +reads |
//! | `record_swap()`: two-element exchange | | +1 | +4 |
//! | `record_move()`: one-element relocation | | +1 | +2 |
//!
//! "Swaps" therefore counts element relocations: a two-element exchange and
//! a single-element move (insertion shift, merge placement, scratch copy)
//! each count once.
//!
//! ## Invariants
//!
//! * Counters only increase during a run; `reset` is the sole way down.
//! * A snapshot taken after `stop_timer` is stable for the lifetime of the
//!   caller.
//!
//! ## Non-goals
//!
//! * This module does not aggregate statistics across invocations (see
//!   `evaluation::trials` for the averaging convenience).
//! * This module does not format or report statistics (see `engine::output`).

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::time::Duration;

// Feature-gated imports
#[cfg(feature = "std")]
use std::time::Instant;

// ============================================================================
// Run Statistics Snapshot
// ============================================================================

/// Immutable statistics snapshot for one algorithm invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Number of element reads and writes.
    pub array_accesses: u64,

    /// Number of element relocations (exchanges and single-element moves).
    pub swaps: u64,

    /// Number of three-way comparisons.
    pub comparisons: u64,

    /// Wall-clock time of the run (zero under `no_std`).
    pub elapsed: Duration,
}

impl RunStats {
    /// Arithmetic mean of a set of runs.
    ///
    /// Counters are averaged with integer rounding to nearest; elapsed time
    /// is averaged in nanoseconds. An empty slice yields all-zero stats.
    pub fn mean_of(runs: &[RunStats]) -> RunStats {
        let n = runs.len() as u64;
        if n == 0 {
            return RunStats::default();
        }

        let mean = |total: u64| (total + n / 2) / n;
        let accesses = runs.iter().map(|r| r.array_accesses).sum::<u64>();
        let swaps = runs.iter().map(|r| r.swaps).sum::<u64>();
        let comparisons = runs.iter().map(|r| r.comparisons).sum::<u64>();
        let nanos = runs.iter().map(|r| r.elapsed.as_nanos()).sum::<u128>() / n as u128;

        RunStats {
            array_accesses: mean(accesses),
            swaps: mean(swaps),
            comparisons: mean(comparisons),
            elapsed: Duration::from_nanos(nanos as u64),
        }
    }

    /// Render the elapsed time as `seconds.nanoseconds` with nanosecond
    /// padding, e.g. `0.000013250s`.
    pub fn format_elapsed(&self) -> ElapsedDisplay {
        ElapsedDisplay(self.elapsed)
    }
}

/// Display adapter for an elapsed duration.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedDisplay(Duration);

impl Display for ElapsedDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:09}s", self.0.as_secs(), self.0.subsec_nanos())
    }
}

// ============================================================================
// Statistics Tracker
// ============================================================================

/// Mutable statistics context for one algorithm invocation.
///
/// Created fresh by the executor per call, threaded `&mut` through the
/// algorithm, and frozen with [`StatsTracker::snapshot`] at the end.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    array_accesses: u64,
    swaps: u64,
    comparisons: u64,
    elapsed: Duration,

    #[cfg(feature = "std")]
    started: Option<Instant>,
}

impl StatsTracker {
    /// Create a tracker with all counters at zero and no timer running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters and the timer.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record `n` element reads or writes.
    #[inline]
    pub fn record_reads(&mut self, n: u64) {
        self.array_accesses += n;
    }

    /// Record one three-way comparison that touched `reads` elements.
    ///
    /// `reads` is 2 when both operands live in the sequence and 1 when one
    /// operand is a held key or pivot value.
    #[inline]
    pub fn record_compare(&mut self, reads: u64) {
        self.comparisons += 1;
        self.array_accesses += reads;
    }

    /// Record a two-element exchange (two reads, two writes).
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
        self.array_accesses += 4;
    }

    /// Record a single-element relocation (one read, one write).
    #[inline]
    pub fn record_move(&mut self) {
        self.swaps += 1;
        self.array_accesses += 2;
    }

    /// Record `n` single-element relocations.
    #[inline]
    pub fn record_moves(&mut self, n: u64) {
        self.swaps += n;
        self.array_accesses += 2 * n;
    }

    /// Fold another run's counters into this tracker.
    ///
    /// Used by the parallel coordinator to combine task-local counters on
    /// join. Elapsed time is not folded: child tasks run inside the
    /// parent's measured interval.
    pub fn absorb(&mut self, other: &RunStats) {
        self.array_accesses += other.array_accesses;
        self.swaps += other.swaps;
        self.comparisons += other.comparisons;
    }

    // ========================================================================
    // Timing
    // ========================================================================

    /// Start the wall-clock timer. No-op without the `std` feature.
    pub fn start_timer(&mut self) {
        #[cfg(feature = "std")]
        {
            self.started = Some(Instant::now());
        }
    }

    /// Stop the wall-clock timer and latch the elapsed duration.
    ///
    /// Stopping a timer that was never started leaves elapsed unchanged.
    pub fn stop_timer(&mut self) {
        #[cfg(feature = "std")]
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    /// Freeze the current counters into an immutable snapshot.
    pub fn snapshot(&self) -> RunStats {
        RunStats {
            array_accesses: self.array_accesses,
            swaps: self.swaps,
            comparisons: self.comparisons,
            elapsed: self.elapsed,
        }
    }
}
