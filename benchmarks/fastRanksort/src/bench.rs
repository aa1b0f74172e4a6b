//! Sorting and selection benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the parallel merge sort (1K to 1M elements)
//! - Parallel vs sequential merge execution
//! - Algorithm comparison at a fixed size
//! - Selection strategies (quickselect, heap, median-of-medians)
//! - Pathological cases (sorted, reversed, few distinct values)
//!
//! For sequential execution, use `RANKSORT_MODE=serial cargo bench`.
//! For parallel execution (default), use `RANKSORT_MODE=parallel cargo bench`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastRanksort::prelude::*;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("RANKSORT_MODE").ok().as_deref() {
        Some("serial") | Some("sequential") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

fn model(parallel: bool, algorithm: Algorithm) -> RanksortModel<i64> {
    Ranksort::new()
        .algorithm(algorithm)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random values.
fn generate_uniform(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<i64>()).collect()
}

/// Normally distributed values (heavy midrange collisions after rounding).
fn generate_normal(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1_000.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) as i64).collect()
}

/// Few distinct values: the duplicate-heavy regime.
fn generate_few_distinct(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..16)).collect()
}

// ============================================================================
// Scalability Benchmarks
// ============================================================================

fn bench_merge_scalability(c: &mut Criterion) {
    let (parallel, mode) = get_config();
    let model = model(parallel, Algorithm::Merge);

    let mut group = c.benchmark_group(format!("merge_scalability/{mode}"));
    for size in [1_000usize, 10_000, 100_000, 1_000_000] {
        let data = generate_uniform(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(model.sort(black_box(data)).unwrap()));
        });
    }
    group.finish();
}

fn bench_parallel_vs_serial(c: &mut Criterion) {
    let size = 200_000;
    let data = generate_uniform(size, 7);

    let mut group = c.benchmark_group("merge_parallel_vs_serial");
    group.throughput(Throughput::Elements(size as u64));

    let par = model(true, Algorithm::Merge);
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(par.sort(black_box(&data)).unwrap()));
    });

    let seq = model(false, Algorithm::Merge);
    group.bench_function("serial", |b| {
        b.iter(|| black_box(seq.sort(black_box(&data)).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Algorithm Comparison Benchmarks
// ============================================================================

fn bench_algorithms(c: &mut Criterion) {
    // Quadratic algorithms keep the size modest.
    let size = 4_000;
    let data = generate_normal(size, 11);

    let mut group = c.benchmark_group("algorithms");
    group.throughput(Throughput::Elements(size as u64));

    for algorithm in [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
    ] {
        let m = model(false, algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(m.sort(black_box(&data)).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Selection Benchmarks
// ============================================================================

fn bench_selection(c: &mut Criterion) {
    let size = 100_000;
    let data = generate_uniform(size, 13);
    let rank = median_rank(size);

    let mut group = c.benchmark_group("selection_median");
    group.throughput(Throughput::Elements(size as u64));

    for algorithm in [
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::MedianOfMedians,
    ] {
        let m = model(false, algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(m.select(black_box(&data), rank).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Pathological Input Benchmarks
// ============================================================================

fn bench_pathological(c: &mut Criterion) {
    // Quickselect degrades quadratically on ordered input; keep the size
    // small enough for the worst case to finish.
    let size = 5_000;
    let sorted: Vec<i64> = (0..size as i64).collect();
    let reversed: Vec<i64> = (0..size as i64).rev().collect();
    let few_distinct = generate_few_distinct(size, 17);

    let mut group = c.benchmark_group("pathological");
    group.throughput(Throughput::Elements(size as u64));

    // Heap and merge are insensitive to input order; quickselect's pivot
    // luck vs median-of-medians' determinism shows up here.
    for (label, data) in [
        ("sorted", &sorted),
        ("reversed", &reversed),
        ("few_distinct", &few_distinct),
    ] {
        let heap = model(false, Algorithm::Heap);
        group.bench_with_input(BenchmarkId::new("heap_sort", label), data, |b, data| {
            b.iter(|| black_box(heap.sort(black_box(data)).unwrap()));
        });

        let quick = model(false, Algorithm::Quick);
        group.bench_with_input(
            BenchmarkId::new("quickselect_median", label),
            data,
            |b, data| {
                b.iter(|| black_box(quick.select(black_box(data), median_rank(data.len())).unwrap()));
            },
        );

        let mom = model(false, Algorithm::MedianOfMedians);
        group.bench_with_input(
            BenchmarkId::new("median_of_medians", label),
            data,
            |b, data| {
                b.iter(|| black_box(mom.select(black_box(data), median_rank(data.len())).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_scalability,
    bench_parallel_vs_serial,
    bench_algorithms,
    bench_selection,
    bench_pathological
);
criterion_main!(benches);
