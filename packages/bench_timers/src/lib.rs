#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named, stoppable wall-clock timers for ad-hoc profiling.
//!
//! Bracket the code you are interested in with [`Bench::start()`] and [`Bench::stop()`] calls,
//! then read the resulting [`Interval`] or list all measurements with [`Bench::get_all()`].
//! Intervals decompose into hours, minutes, seconds, milliseconds and microseconds and render
//! via an [`IntervalFormat`].
//!
//! This package is not a statistical profiler or a tracer. It does not sample, persist or
//! aggregate anything - it only measures the intervals you explicitly mark.
//!
//! The core types are:
//! - [`Bench`] - Registry of named timers
//! - [`Interval`] - Immutable elapsed duration with clock field decomposition
//! - [`IntervalFormat`] - Template for rendering intervals
//! - [`Timings`] - Stopped timers as returned by [`Bench::get_all()`]
//!
//! # Simple usage
//!
//! ```
//! use bench_timers::{Bench, IntervalFormat, SortMode};
//!
//! let bench = Bench::new();
//!
//! bench.start("load");
//! let data: Vec<u64> = (0..10_000).collect();
//! bench.stop("load").unwrap();
//!
//! bench.start("sum");
//! let total: u64 = data.iter().sum();
//! bench.stop("sum").unwrap();
//!
//! // Slowest first.
//! for (name, interval) in &bench.get_all(SortMode::Descending) {
//!     println!("{name}: {}", interval.format(&IntervalFormat::MICRO));
//! }
//! # assert_eq!(total, 49_995_000);
//! ```
//!
//! # Measuring a closure
//!
//! ```
//! use bench_timers::Bench;
//!
//! let bench = Bench::new();
//!
//! let (result, interval) = bench.measure(|| "hello".repeat(1000));
//!
//! assert_eq!(result.len(), 5000);
//! println!("took {interval}");
//! ```
//!
//! # Errors
//!
//! Stopping or reading a timer that does not exist fails with [`Error::NotFound`]. Stopping a
//! timer twice without restarting it fails with [`Error::AlreadyStopped`].
//!
//! ```
//! use bench_timers::{Bench, Error};
//!
//! let bench = Bench::new();
//!
//! assert!(matches!(bench.stop("nope"), Err(Error::NotFound { .. })));
//!
//! bench.start("once");
//! bench.stop("once").unwrap();
//! assert!(matches!(bench.stop("once"), Err(Error::AlreadyStopped { .. })));
//! ```
//!
//! # Logging
//!
//! Timer lifecycle events are emitted via [`tracing`](https://docs.rs/tracing) at the `trace`
//! and `debug` levels. Nothing is printed unless the application installs a subscriber.
//!
//! # Threading
//!
//! A [`Bench`] can be shared between threads; every operation is serialized by one lock.
//! Timer names are shared across threads, so concurrent users should pick distinct names.
//! A process-wide instance is available via [`global()`].

mod bench;
mod bench_builder;
mod error;
mod interval;
mod interval_format;
mod pal;
mod sort_mode;
mod timings;

pub use bench::{Bench, DEFAULT_TIMER_NAME, global};
pub use bench_builder::BenchBuilder;
pub use error::{Error, Result};
pub use interval::{Interval, IntervalDetail};
pub use interval_format::IntervalFormat;
pub use sort_mode::SortMode;
pub use timings::{Timings, TimingsIter};
