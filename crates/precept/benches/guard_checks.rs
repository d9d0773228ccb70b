//! Micro-benchmarks for the guard checks.
//!
//! The interesting cases are the happy paths (a guard at the top of a hot
//! function must cost a comparison, not an allocation) and the failure
//! paths (message formatting cost).

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use precept::prelude::*;

fn bench_happy_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("happy_path");

    group.bench_function("not_null", |b| {
        b.iter(|| not_null(black_box(Some(42_u64)), black_box(Some("n"))));
    });
    group.bench_function("not_empty/str", |b| {
        b.iter(|| not_empty(black_box("payload"), black_box(Some("payload"))));
    });
    group.bench_function("greater_than", |b| {
        b.iter(|| greater_than(black_box(10_i64), black_box(3), black_box(Some("n"))));
    });
    group.bench_function("in_range", |b| {
        b.iter(|| in_range(black_box(5_i64), black_box(1), black_box(9), black_box(Some("n"))));
    });

    group.finish();
}

fn bench_failure_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_path");

    group.bench_function("greater_than", |b| {
        b.iter(|| greater_than(black_box(1_i64), black_box(3), black_box(Some("n"))));
    });
    group.bench_function("not_in_range", |b| {
        b.iter(|| not_in_range(black_box(5_i64), black_box(1), black_box(9), black_box(Some("n"))));
    });

    group.finish();
}

fn bench_fluent_chain(c: &mut Criterion) {
    c.bench_function("fluent/two_links", |b| {
        b.iter(|| {
            Guard::new(black_box(8080_u16), Some("port"))
                .requires(|v| v.is_some_and(|&p| p >= 1024), Some("'{0}' must be unprivileged"))
                .and_then(|g| {
                    g.requires(|v| v.is_some_and(|&p| p < 49152), Some("'{0}' must not be ephemeral"))
                })
        });
    });
}

criterion_group!(benches, bench_happy_paths, bench_failure_paths, bench_fluent_chain);
criterion_main!(benches);
