use std::sync::LazyLock;

use foldhash::{HashMap, HashMapExt};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::interval::round_to_micros;
use crate::pal::{Platform, PlatformFacade};
use crate::{BenchBuilder, Error, Interval, Result, SortMode, Timings};

/// Name of the timer used when the caller passes an empty name.
pub const DEFAULT_TIMER_NAME: &str = "_default";

/// Timers started by [`Bench::measure()`] carry this prefix followed by a random token.
const MEASURE_TIMER_PREFIX: &str = "__bench_timers_measure_";

static GLOBAL: LazyLock<Bench> = LazyLock::new(Bench::new);

/// The process-wide timer registry.
///
/// Created on first use. Its request start is the moment of creation, so touch it early in
/// `main()` if you intend to use [`Bench::since_request()`] on it.
///
/// # Examples
///
/// ```
/// let bench = bench_timers::global();
///
/// bench.start("startup");
/// // ...
/// let interval = bench.stop("startup").unwrap();
/// println!("startup took {interval}");
/// ```
#[must_use]
pub fn global() -> &'static Bench {
    &GLOBAL
}

/// A registry of named wall-clock timers.
///
/// Each timer is either running (started, not yet stopped) or stopped (its interval is frozen).
/// Starting a timer again resets it, whatever state it was in. Timer names are arbitrary
/// strings; the empty string refers to the default timer, [`DEFAULT_TIMER_NAME`].
///
/// All operations take `&self` and are serialized by an internal lock, so a single instance can
/// be shared between threads.
///
/// # Examples
///
/// ```
/// use bench_timers::{Bench, IntervalFormat, SortMode};
///
/// let bench = Bench::new();
///
/// bench.start("query");
/// // ... code under measurement ...
/// let interval = bench.stop("query").unwrap();
///
/// println!("query: {}", interval.format(&IntervalFormat::MICRO));
///
/// // Measure a closure without naming a timer.
/// let (sum, interval) = bench.measure(|| (1..=100).sum::<u32>());
/// assert_eq!(sum, 5050);
///
/// // Only "query" shows up, the closure timer is never visible.
/// assert_eq!(bench.get_all(SortMode::None).len(), 1);
/// ```
#[derive(Debug)]
pub struct Bench {
    timers: Mutex<Timers>,
    platform: PlatformFacade,
    request_start: f64,
}

impl Bench {
    /// Creates an empty registry whose request start is the current moment.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the process-wide registry returned by global()"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for a registry with non-default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_timers::Bench;
    ///
    /// let launched_at = 1_700_000_000.0;
    /// let bench = Bench::builder().request_start(launched_at).build();
    ///
    /// assert!(bench.since_request().seconds() > 0.0);
    /// ```
    pub fn builder() -> BenchBuilder {
        BenchBuilder::new()
    }

    pub(crate) fn from_parts(platform: PlatformFacade, request_start: Option<f64>) -> Self {
        let request_start = request_start.unwrap_or_else(|| platform.now());

        Self {
            timers: Mutex::new(Timers::new()),
            platform,
            request_start,
        }
    }

    /// Starts (or restarts) the named timer and returns the start timestamp in seconds since the
    /// Unix epoch.
    ///
    /// Any previous state of the timer is discarded, including a frozen interval.
    pub fn start(&self, name: &str) -> f64 {
        let name = resolve_name(name);

        let mut timers = self.timers.lock();
        let now = self.platform.now();
        timers.start(name, now);
        drop(timers);

        trace!(name, started_at = now, "timer started");

        now
    }

    /// Stops the named timer and returns its frozen interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the timer was never started or has been deleted, and
    /// [`Error::AlreadyStopped`] if it has been stopped since it was last started.
    pub fn stop(&self, name: &str) -> Result<Interval> {
        let name = resolve_name(name);

        let mut timers = self.timers.lock();
        let now = self.platform.now();
        let interval = timers.stop(name, now)?;
        drop(timers);

        debug!(name, seconds = interval.seconds(), "timer stopped");

        Ok(interval)
    }

    /// Returns the interval of the named timer.
    ///
    /// For a stopped timer this is the frozen interval. For a running timer this is the time
    /// elapsed so far, computed anew on every call without affecting the timer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the timer was never started or has been deleted.
    pub fn get(&self, name: &str) -> Result<Interval> {
        let name = resolve_name(name);

        let timers = self.timers.lock();
        let now = self.platform.now();
        timers.get(name, now)
    }

    /// Whether the named timer exists and is running.
    #[must_use]
    pub fn is_running(&self, name: &str) -> bool {
        self.timers.lock().is_running(resolve_name(name))
    }

    /// Removes the named timer. Does nothing if there is no such timer.
    pub fn delete(&self, name: &str) {
        let name = resolve_name(name);

        if self.timers.lock().remove(name) {
            debug!(name, "timer deleted");
        }
    }

    /// Removes all timers.
    pub fn clear(&self) {
        let removed = self.timers.lock().clear();

        debug!(removed, "timers cleared");
    }

    /// Returns the intervals of all stopped timers. Running timers are not included.
    ///
    /// With [`SortMode::None`] the timers are in the order they were first started; restarting
    /// a timer does not move it, deleting and starting it again does.
    #[must_use]
    pub fn get_all(&self, sort: SortMode) -> Timings {
        let mut entries = self.timers.lock().stopped();
        sort.apply(&mut entries);

        Timings::new(entries)
    }

    /// Calls `f` and measures how long it takes, returning its result together with the
    /// interval.
    ///
    /// The measurement uses a registry timer with a unique random name. That timer is removed
    /// before this method returns, also when `f` panics, so it never shows up in
    /// [`get_all()`](Self::get_all). Panics from `f` propagate to the caller.
    pub fn measure<F, R>(&self, f: F) -> (R, Interval)
    where
        F: FnOnce() -> R,
    {
        let (name, started_at) = self.start_measure_timer();

        let name = scopeguard::guard(name, |name| {
            self.timers.lock().remove(&name);
        });

        let result = f();

        let interval = elapsed(started_at, self.platform.now());
        debug!(name = name.as_str(), seconds = interval.seconds(), "closure measured");

        (result, interval)
    }

    /// Time elapsed since the request start.
    ///
    /// The request start is configured via [`BenchBuilder::request_start()`] and defaults to the
    /// moment the registry was created.
    #[must_use]
    pub fn since_request(&self) -> Interval {
        elapsed(self.request_start, self.platform.now())
    }

    /// The request start timestamp in seconds since the Unix epoch.
    #[must_use]
    pub fn request_start(&self) -> f64 {
        self.request_start
    }

    /// The resident memory of the current process in kilobytes.
    ///
    /// This is a best-effort probe: it returns 0 if the platform does not support it or the
    /// information cannot be obtained.
    #[must_use]
    pub fn process_memory_usage(&self) -> u64 {
        self.platform.process_memory_usage_kb()
    }

    fn start_measure_timer(&self) -> (String, f64) {
        let mut timers = self.timers.lock();

        let name = loop {
            let candidate = format!("{MEASURE_TIMER_PREFIX}{:016x}", rand::random::<u64>());

            if !timers.contains(&candidate) {
                break candidate;
            }
        };

        let now = self.platform.now();
        timers.start(&name, now);

        (name, now)
    }
}

fn resolve_name(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_TIMER_NAME
    } else {
        name
    }
}

fn elapsed(started_at: f64, now: f64) -> Interval {
    Interval::new(round_to_micros(now - started_at))
}

#[derive(Debug)]
struct TimerEntry {
    // Position in creation order. Kept when the timer is restarted.
    sequence: u64,
    started_at: f64,
    stopped: Option<Interval>,
}

#[derive(Debug)]
struct Timers {
    entries: HashMap<String, TimerEntry>,
    next_sequence: u64,
}

impl Timers {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_sequence: 0,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn start(&mut self, name: &str, now: f64) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.started_at = now;
            entry.stopped = None;
            return;
        }

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);

        self.entries.insert(
            name.to_string(),
            TimerEntry {
                sequence,
                started_at: now,
                stopped: None,
            },
        );
    }

    fn stop(&mut self, name: &str, now: f64) -> Result<Interval> {
        let entry = self.entries.get_mut(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })?;

        if entry.stopped.is_some() {
            return Err(Error::AlreadyStopped {
                name: name.to_string(),
            });
        }

        let interval = elapsed(entry.started_at, now);
        entry.stopped = Some(interval.clone());

        Ok(interval)
    }

    fn get(&self, name: &str, now: f64) -> Result<Interval> {
        let entry = self.entries.get(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })?;

        Ok(entry
            .stopped
            .clone()
            .unwrap_or_else(|| elapsed(entry.started_at, now)))
    }

    fn is_running(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.stopped.is_none())
    }

    fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    fn stopped(&self) -> Vec<(String, Interval)> {
        let mut stopped: Vec<_> = self
            .entries
            .iter()
            .filter_map(|(name, entry)| {
                entry
                    .stopped
                    .as_ref()
                    .map(|interval| (entry.sequence, name.clone(), interval.clone()))
            })
            .collect();

        stopped.sort_unstable_by_key(|(sequence, _, _)| *sequence);

        stopped
            .into_iter()
            .map(|(_, name, interval)| (name, interval))
            .collect()
    }
}
