//! Benchmark for quantifier classification.
//!
//! Compares `Found::classify` with a hand-written filter count and, with the
//! `rayon` feature, with `Found::classify_par`.

use casematch::found::Found;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_classify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("classify");

    for size in [100_u64, 10_000, 1_000_000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("found", size), &values, |bencher, values| {
            bencher.iter(|| black_box(Found::classify(values, |value| value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("filter_count", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().filter(|value| *value % 3 == 0).count()));
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("found_par", size), &values, |bencher, values| {
            bencher.iter(|| black_box(Found::classify_par(values, |value| value % 3 == 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classify);
criterion_main!(benches);
