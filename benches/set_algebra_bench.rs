//! Benchmark for set algebra over sequence and set inputs.
//!
//! Compares each operation on `Vec` inputs, which must be normalized into
//! fresh sets, against `Set` inputs, which are borrowed as-is.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setops::{Set, are_equal, difference, fold, intersection, symmetric_difference, union};
use std::hint::black_box;

fn inputs(size: i64) -> (Vec<i64>, Vec<i64>) {
    let left = (0..size).collect();
    let right = (size / 2..size + size / 2).collect();
    (left, right)
}

// =============================================================================
// Binary Set Operations
// =============================================================================

fn benchmark_binary_operations(criterion: &mut Criterion) {
    let operations: [(&str, fn(&Set<i64>, &Set<i64>) -> usize); 4] = [
        ("union", |left, right| union(left, right).map_or(0, |set| set.len())),
        ("intersection", |left, right| {
            intersection(left, right).map_or(0, |set| set.len())
        }),
        ("difference", |left, right| {
            difference(left, right).map_or(0, |set| set.len())
        }),
        ("symmetric_difference", |left, right| {
            symmetric_difference(left, right).map_or(0, |set| set.len())
        }),
    ];

    for (name, operation) in operations {
        let mut group = criterion.benchmark_group(name);

        for size in [100, 1_000, 10_000] {
            let (left, right) = inputs(size);
            let left_set: Set<i64> = left.iter().copied().collect();
            let right_set: Set<i64> = right.iter().copied().collect();

            group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
                bencher.iter(|| operation(black_box(&left_set), black_box(&right_set)));
            });
        }

        group.finish();
    }
}

// =============================================================================
// Normalization Cost
// =============================================================================

fn benchmark_normalization(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union_normalization");

    for size in [100, 1_000, 10_000] {
        let (left, right) = inputs(size);
        let left_set: Set<i64> = left.iter().copied().collect();
        let right_set: Set<i64> = right.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| union(black_box(&left), black_box(&right)));
        });

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
            bencher.iter(|| union(black_box(&left_set), black_box(&right_set)));
        });
    }

    group.finish();
}

// =============================================================================
// Comparisons and Traversals
// =============================================================================

fn benchmark_are_equal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("are_equal");

    for size in [100, 1_000, 10_000] {
        let (left, _) = inputs(size);
        let reversed: Vec<i64> = left.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| are_equal(black_box(&left), black_box(&reversed)));
        });
    }

    group.finish();
}

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [1_000, 10_000] {
        let (sequence, _) = inputs(size);
        let set: Set<i64> = sequence.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| fold(black_box(&sequence), 0_i64, |acc, n| acc + n));
        });

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, _| {
            bencher.iter(|| fold(black_box(&set), 0_i64, |acc, n| acc + n));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_binary_operations,
    benchmark_normalization,
    benchmark_are_equal,
    benchmark_fold
);
criterion_main!(benches);
