//! Elapsed durations and their decomposition into clock fields.

use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use crate::IntervalFormat;

const MICROS_PER_SECOND: f64 = 1_000_000.0;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;
const MICROS_PER_MILLI: i64 = 1000;

/// An immutable elapsed duration with sub-second precision.
///
/// The raw value is kept as fractional seconds, accurate to the microsecond. The value can be
/// decomposed into hours, minutes, seconds, milliseconds and microseconds via
/// [`detail()`](Self::detail), which is computed on first use and cached for the lifetime of
/// the instance.
///
/// Negative durations are representable. They are decomposed by the same rules as positive
/// ones: the sub-second part keeps its sign while the whole seconds are floored into
/// hours and minutes, so `-5.25` seconds decomposes into `-1h 59m 55s -250ms`.
///
/// # Examples
///
/// ```
/// use bench_timers::{Interval, IntervalFormat};
///
/// let interval = Interval::new(1.101234);
///
/// assert_eq!(interval.detail().milliseconds(), 101);
/// assert_eq!(interval.detail().microseconds(), 234);
/// assert_eq!(interval.format(&IntervalFormat::MICRO), "01s 101ms 234us");
/// assert_eq!(interval.to_string(), "01:101");
/// ```
#[derive(Clone, Debug)]
pub struct Interval {
    seconds: f64,
    detail: OnceLock<IntervalDetail>,
}

impl Interval {
    /// Creates an interval from a raw number of elapsed seconds.
    #[must_use]
    pub const fn new(seconds: f64) -> Self {
        Self {
            seconds,
            detail: OnceLock::new(),
        }
    }

    /// Creates an interval from a [`Duration`], rounded to the nearest microsecond.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self::new(round_to_micros(duration.as_secs_f64()))
    }

    /// The raw elapsed duration in seconds, exactly as provided at construction.
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Converts the interval to a [`Duration`].
    ///
    /// Returns `None` if the interval is negative or not a finite number.
    #[must_use]
    pub fn as_duration(&self) -> Option<Duration> {
        if self.seconds.is_finite() && self.seconds >= 0.0 {
            Duration::try_from_secs_f64(self.seconds).ok()
        } else {
            None
        }
    }

    /// The interval decomposed into clock fields.
    ///
    /// The decomposition is computed on first access and reused afterwards.
    #[must_use]
    pub fn detail(&self) -> &IntervalDetail {
        self.detail
            .get_or_init(|| IntervalDetail::decompose(self.seconds))
    }

    /// Renders the interval using the provided format.
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_timers::{Interval, IntervalFormat};
    ///
    /// let interval = Interval::new(3725.5);
    ///
    /// assert_eq!(interval.format(&IntervalFormat::HOURS), "01h 02m 05s");
    /// assert_eq!(interval.format(&IntervalFormat::SIMPLE), "05:500");
    /// ```
    #[must_use]
    pub fn format(&self, format: &IntervalFormat) -> String {
        let mut result = String::new();

        format
            .render(self.detail(), &mut result)
            .expect("writing to a String is infallible");

        result
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IntervalFormat::SIMPLE.render(self.detail(), f)
    }
}

impl From<Duration> for Interval {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

/// An [`Interval`] decomposed into hours, minutes, seconds, milliseconds and microseconds.
///
/// The fields are ordered from largest to smallest unit. This is also the order in which
/// positional placeholders in an [`IntervalFormat`] template refer to them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IntervalDetail {
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    microseconds: i64,
}

impl IntervalDetail {
    /// Creates a decomposition from its individual fields.
    #[must_use]
    pub const fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
        milliseconds: i64,
        microseconds: i64,
    ) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        }
    }

    /// Whole hours.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Whole minutes after subtracting the hours.
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whole seconds after subtracting the hours and minutes.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Whole milliseconds of the sub-second part.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Microseconds of the sub-second part after subtracting the milliseconds.
    #[must_use]
    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// The five fields in positional order: hours, minutes, seconds, milliseconds, microseconds.
    #[must_use]
    pub const fn fields(&self) -> [i64; 5] {
        [
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
        ]
    }

    // The whole seconds are truncated toward zero and the sub-second part is rounded to the
    // nearest microsecond (half away from zero). Milliseconds use truncating integer division,
    // hours and minutes use flooring division. Out of range and non-finite inputs saturate in
    // the float to int cast; NaN decomposes to all zeroes.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        reason = "float to int casts saturate and the sub-second part is always below one million in magnitude"
    )]
    fn decompose(seconds: f64) -> Self {
        let whole = seconds.trunc();
        let micro_part = ((seconds - whole) * MICROS_PER_SECOND).round() as i64;

        let milliseconds = micro_part / MICROS_PER_MILLI;
        let microseconds = micro_part - milliseconds * MICROS_PER_MILLI;

        let whole = whole as i64;

        // Euclidean division and remainder cannot overflow for a positive divisor, even at i64::MIN.
        let hours = whole.div_euclid(SECONDS_PER_HOUR);
        let within_hour = whole.rem_euclid(SECONDS_PER_HOUR);

        let minutes = within_hour.div_euclid(SECONDS_PER_MINUTE);
        let seconds = within_hour.rem_euclid(SECONDS_PER_MINUTE);

        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        }
    }
}

/// Rounds fractional seconds to the nearest microsecond.
pub(crate) fn round_to_micros(seconds: f64) -> f64 {
    (seconds * MICROS_PER_SECOND).round() / MICROS_PER_SECOND
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "exact values are the point of these tests")]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Interval: Send, Sync, Clone);
    assert_impl_all!(IntervalDetail: Send, Sync, Copy);

    #[test]
    fn seconds_are_returned_unchanged() {
        for value in [0.0, 0.1, 1.101_234, 59.999_999, 3600.0, 123_456.789_012] {
            assert_eq!(Interval::new(value).seconds(), value);
        }
    }

    #[test]
    fn sub_second_part_rounds_to_microseconds() {
        let interval = Interval::new(1.101_234);

        assert_eq!(*interval.detail(), IntervalDetail::new(0, 0, 1, 101, 234));
    }

    #[test]
    fn sub_microsecond_noise_rounds_to_nearest() {
        assert_eq!(
            *Interval::new(0.000_000_6).detail(),
            IntervalDetail::new(0, 0, 0, 0, 1)
        );
        assert_eq!(
            *Interval::new(0.000_000_4).detail(),
            IntervalDetail::new(0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn whole_seconds_split_into_hours_and_minutes() {
        let interval = Interval::new(2.0 * 3600.0 + 3.0 * 60.0 + 4.5);

        assert_eq!(*interval.detail(), IntervalDetail::new(2, 3, 4, 500, 0));
    }

    #[test]
    fn negative_interval_floors_hours_and_keeps_fraction_sign() {
        let interval = Interval::new(-5.25);

        assert_eq!(*interval.detail(), IntervalDetail::new(-1, 59, 55, -250, 0));
        assert_eq!(interval.seconds(), -5.25);
    }

    #[test]
    fn huge_negative_values_saturate_instead_of_overflowing() {
        // i64::MIN seconds floors to -2562047788015216 hours with 1792 seconds left over.
        let expected = IntervalDetail::new(-2_562_047_788_015_216, 29, 52, 0, 0);

        assert_eq!(*Interval::new(-1.0e19).detail(), expected);
        assert_eq!(*Interval::new(f64::NEG_INFINITY).detail(), expected);
    }

    #[test]
    fn huge_positive_values_saturate() {
        let expected = IntervalDetail::new(2_562_047_788_015_215, 30, 7, 0, 0);

        assert_eq!(*Interval::new(1.0e19).detail(), expected);
        assert_eq!(*Interval::new(f64::INFINITY).detail(), expected);
    }

    #[test]
    fn nan_decomposes_to_zero() {
        let interval = Interval::new(f64::NAN);

        assert_eq!(*interval.detail(), IntervalDetail::default());
        assert_eq!(interval.to_string(), "00:000");
    }

    #[test]
    fn extreme_values_can_be_formatted() {
        assert_eq!(
            Interval::new(f64::NEG_INFINITY).format(&IntervalFormat::HOURS),
            "-2562047788015216h 29m 52s"
        );
        assert_eq!(
            Interval::new(f64::INFINITY).format(&IntervalFormat::FULL),
            "2562047788015215h 30m 07s 000ms 000us"
        );
    }

    #[test]
    fn detail_is_computed_once() {
        let interval = Interval::new(42.5);

        let first: *const IntervalDetail = interval.detail();
        let second: *const IntervalDetail = interval.detail();

        assert_eq!(first, second);
    }

    #[test]
    fn clone_carries_same_value() {
        let interval = Interval::new(7.000_123);
        _ = interval.detail();

        let clone = interval.clone();

        assert_eq!(clone.seconds(), interval.seconds());
        assert_eq!(clone.detail(), interval.detail());
    }

    #[test]
    fn fields_are_in_positional_order() {
        let detail = IntervalDetail::new(1, 2, 3, 4, 5);

        assert_eq!(detail.fields(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn display_uses_simple_format() {
        assert_eq!(Interval::new(0.1).to_string(), "00:100");
        assert_eq!(Interval::new(12.345_678).to_string(), "12:345");
    }

    #[test]
    fn from_duration_rounds_to_microseconds() {
        let interval = Interval::from_duration(Duration::from_nanos(1_500_000_700));

        assert_eq!(interval.seconds(), 1.500_001);
    }

    #[test]
    fn as_duration_rejects_negative_and_non_finite() {
        assert_eq!(
            Interval::new(1.5).as_duration(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(Interval::new(-1.0).as_duration(), None);
        assert_eq!(Interval::new(f64::NAN).as_duration(), None);
        assert_eq!(Interval::new(f64::INFINITY).as_duration(), None);
    }

    #[test]
    fn round_to_micros_drops_sub_microsecond_digits() {
        assert_eq!(round_to_micros(1.234_567_89), 1.234_568);
        assert_eq!(round_to_micros(0.0), 0.0);
    }
}
