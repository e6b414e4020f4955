//! Renders one interval with the built-in formats and a few custom templates.
//!
//! Run with: `cargo run --example bench_timers_custom_format`.

use bench_timers::{Interval, IntervalFormat};

fn main() {
    let interval = Interval::new(3_725.101_234);

    println!("SIMPLE: {}", interval.format(&IntervalFormat::SIMPLE));
    println!("MICRO:  {}", interval.format(&IntervalFormat::MICRO));
    println!("HOURS:  {}", interval.format(&IntervalFormat::HOURS));

    for template in [
        "{hours}:{minutes:02}:{seconds:02}.{ms:03}",
        "{1}m {2}s",
        "[{3:4} ms]",
        "{5}",
    ] {
        match IntervalFormat::parse(template) {
            Ok(format) => println!("{template:<45} -> {}", interval.format(&format)),
            Err(e) => println!("{template:<45} -> error: {e}"),
        }
    }
}
