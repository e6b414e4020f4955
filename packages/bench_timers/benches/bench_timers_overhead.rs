//! Benchmarks to measure the overhead of the timer registry itself.
//!
//! The timed code is empty, so the results show only what the bookkeeping costs.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use bench_timers::{Bench, Interval, IntervalFormat, SortMode};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_timers_overhead");

    let bench = Bench::new();

    group.bench_function("start_stop", |b| {
        b.iter(|| {
            bench.start("empty");
            black_box(bench.stop("empty").unwrap());
        });
    });

    group.bench_function("get_running", |b| {
        bench.start("running");
        b.iter(|| black_box(bench.get("running").unwrap()));
    });

    group.bench_function("measure_empty", |b| {
        b.iter(|| black_box(bench.measure(|| black_box(()))));
    });

    for index in 0..100 {
        let name = format!("timer_{index}");
        bench.start(&name);
        bench.stop(&name).unwrap();
    }

    group.bench_function("get_all_sorted_100", |b| {
        b.iter(|| black_box(bench.get_all(SortMode::Descending)));
    });

    group.bench_function("format_micro", |b| {
        b.iter(|| black_box(Interval::new(black_box(1.101_234)).format(&IntervalFormat::MICRO)));
    });

    group.finish();
}
