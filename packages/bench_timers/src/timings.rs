use std::iter::FusedIterator;
use std::{fmt, slice, vec};

use crate::{Interval, IntervalFormat};

/// Stopped timers and their intervals, as returned by [`Bench::get_all()`](crate::Bench::get_all).
///
/// The order is either creation order or the order requested via [`SortMode`](crate::SortMode).
///
/// # Examples
///
/// ```
/// use bench_timers::{Bench, SortMode};
///
/// let bench = Bench::new();
///
/// bench.start("parse");
/// bench.stop("parse").unwrap();
///
/// let timings = bench.get_all(SortMode::Descending);
///
/// for (name, interval) in &timings {
///     println!("{name} took {} seconds", interval.seconds());
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Timings {
    entries: Vec<(String, Interval)>,
}

impl Timings {
    pub(crate) fn new(entries: Vec<(String, Interval)>) -> Self {
        Self { entries }
    }

    /// Number of timers in the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result contains no timers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The interval of the timer with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Interval> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, interval)| interval)
    }

    /// Iterates over the timer names and intervals in result order.
    pub fn iter(&self) -> TimingsIter<'_> {
        TimingsIter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the timer names in result order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Prints one line per timer to stdout, with every field from hours down to microseconds.
    ///
    /// Prints nothing if there are no timers, not even an empty line.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }

        println!("{self}");
    }
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, interval)) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "{name}: {}", interval.format(&IntervalFormat::FULL))?;
        }

        Ok(())
    }
}

impl IntoIterator for Timings {
    type Item = (String, Interval);
    type IntoIter = vec::IntoIter<(String, Interval)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timings {
    type Item = (&'a str, &'a Interval);
    type IntoIter = TimingsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the names and intervals in a [`Timings`], created by [`Timings::iter()`].
#[derive(Clone, Debug)]
pub struct TimingsIter<'a> {
    inner: slice::Iter<'a, (String, Interval)>,
}

impl<'a> Iterator for TimingsIter<'a> {
    type Item = (&'a str, &'a Interval);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, interval)| (name.as_str(), interval))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for TimingsIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, interval)| (name.as_str(), interval))
    }
}

impl ExactSizeIterator for TimingsIter<'_> {}

impl FusedIterator for TimingsIter<'_> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "values are passed through unchanged")]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Timings: Send, Sync, Clone);
    assert_impl_all!(TimingsIter<'static>: Send, Sync, Clone, ExactSizeIterator);

    fn sample() -> Timings {
        Timings::new(vec![
            ("load".to_string(), Interval::new(1.101_234)),
            ("save".to_string(), Interval::new(0.000_5)),
        ])
    }

    #[test]
    fn empty_by_default() {
        let timings = Timings::default();

        assert!(timings.is_empty());
        assert_eq!(timings.len(), 0);
        assert_eq!(timings.to_string(), "");
    }

    #[test]
    fn lookup_by_name() {
        let timings = sample();

        assert_eq!(timings.len(), 2);
        assert_eq!(timings.get("load").unwrap().seconds(), 1.101_234);
        assert!(timings.get("missing").is_none());
    }

    #[test]
    fn iteration_preserves_order() {
        let timings = sample();

        assert_eq!(timings.names().collect::<Vec<_>>(), ["load", "save"]);
        assert_eq!(
            (&timings).into_iter().map(|(name, _)| name).collect::<Vec<_>>(),
            ["load", "save"]
        );
        assert_eq!(
            timings.into_iter().map(|(name, _)| name).collect::<Vec<_>>(),
            ["load", "save"]
        );
    }

    #[test]
    fn display_lists_one_line_per_timer() {
        assert_eq!(
            sample().to_string(),
            "load: 00h 00m 01s 101ms 234us\nsave: 00h 00m 00s 000ms 500us"
        );
    }

    #[test]
    fn display_includes_minutes_and_hours() {
        let timings = Timings::new(vec![
            ("slow".to_string(), Interval::new(75.0)),
            ("slower".to_string(), Interval::new(3725.5)),
        ]);

        assert_eq!(
            timings.to_string(),
            "slow: 00h 01m 15s 000ms 000us\nslower: 01h 02m 05s 500ms 000us"
        );
    }

    #[test]
    fn borrowed_iteration_is_exact_size_and_reversible() {
        let timings = sample();

        let iter = timings.iter();
        assert_eq!(iter.len(), 2);

        let reversed: Vec<_> = (&timings).into_iter().rev().map(|(name, _)| name).collect();
        assert_eq!(reversed, ["save", "load"]);
    }
}
