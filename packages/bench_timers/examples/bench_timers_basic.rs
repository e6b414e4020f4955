//! Brackets a few pieces of work with named timers and prints the results.
//!
//! Run with: `cargo run --example bench_timers_basic`.

use std::hint::black_box;
use std::thread;
use std::time::Duration;

use bench_timers::{Bench, IntervalFormat, SortMode};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let bench = Bench::new();

    bench.start("allocate");
    let data: Vec<u64> = (0..1_000_000).collect();
    bench.stop("allocate").expect("timer was started above");

    bench.start("sum");
    let total: u64 = data.iter().sum();
    black_box(total);
    bench.stop("sum").expect("timer was started above");

    bench.start("sleep");
    thread::sleep(Duration::from_millis(50));
    bench.stop("sleep").expect("timer was started above");

    let (sorted, interval) = bench.measure(|| {
        let mut copy = data.clone();
        copy.sort_unstable_by(|a, b| b.cmp(a));
        copy
    });
    println!(
        "Sorting {} values took {}",
        sorted.len(),
        interval.format(&IntervalFormat::MICRO)
    );

    println!();
    println!("Slowest first:");
    bench.get_all(SortMode::Descending).print_to_stdout();

    println!();
    println!(
        "Since start: {}",
        bench.since_request().format(&IntervalFormat::HOURS)
    );
    println!("Memory usage: {} KB", bench.process_memory_usage());
}
