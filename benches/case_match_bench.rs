//! Benchmark for case resolution.
//!
//! Measures matcher construction plus resolution against a native `match`
//! and against a plain `if` chain.

use casematch::matching::{match_int_value, match_on, match_value};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::any::Any;
use std::cell::Cell;
use std::hint::black_box;

// =============================================================================
// Resolution Depth
// =============================================================================

fn benchmark_resolution_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resolution_depth");

    for depth in [1_i32, 4, 16] {
        group.bench_with_input(BenchmarkId::new("value_matcher", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut matcher = match_value::<i32, _>(black_box(depth - 1));
                for position in 0..depth {
                    matcher = matcher.case_of(move |n: &i32| *n == position, move |_| position);
                }
                black_box(matcher.or_else(-1))
            });
        });

        group.bench_with_input(BenchmarkId::new("if_chain", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let input = black_box(depth - 1);
                let mut result = -1;
                for position in 0..depth {
                    if input == position {
                        result = position;
                        break;
                    }
                }
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Primitive and Dispatch Matchers
// =============================================================================

fn benchmark_primitive_matcher(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("primitive_matcher");

    group.bench_function("case_eq", |bencher| {
        bencher.iter(|| {
            black_box(
                match_int_value::<&str>(black_box(3))
                    .case_eq(1, |_| "one")
                    .case_eq(2, |_| "two")
                    .case_eq(3, |_| "three")
                    .or_else("other"),
            )
        });
    });

    group.bench_function("native_match", |bencher| {
        bencher.iter(|| {
            black_box(match black_box(3) {
                1 => "one",
                2 => "two",
                3 => "three",
                _ => "other",
            })
        });
    });

    group.finish();
}

fn benchmark_type_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("type_dispatch");

    group.bench_function("case_type", |bencher| {
        bencher.iter(|| {
            let input: Box<dyn Any> = Box::new(black_box(7_u64));
            let total = Cell::new(0_u64);
            match_on(input)
                .case_type::<String, _>(|text| total.set(text.len() as u64))
                .case_type::<u32, _>(|number| total.set(u64::from(number)))
                .case_type::<u64, _>(|number| total.set(number))
                .otherwise(|_| {});
            black_box(total.get())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_resolution_depth,
    benchmark_primitive_matcher,
    benchmark_type_dispatch
);
criterion_main!(benches);
