use std::cmp::Ordering;

use crate::Interval;

/// Ordering applied by [`Bench::get_all()`](crate::Bench::get_all).
///
/// Sorting compares the full-precision [`Interval::seconds()`] values, not the decomposed
/// clock fields. Timers with equal values keep their creation order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SortMode {
    /// Timers are returned in the order they were first started.
    #[default]
    None,

    /// Shortest interval first.
    Ascending,

    /// Longest interval first.
    Descending,
}

impl SortMode {
    pub(crate) fn apply(self, timings: &mut [(String, Interval)]) {
        match self {
            Self::None => {}
            Self::Ascending => timings.sort_by(|(_, a), (_, b)| compare(a, b)),
            Self::Descending => timings.sort_by(|(_, a), (_, b)| compare(b, a)),
        }
    }
}

/// Maps the integer codes `0` (none), `1` (ascending) and `2` (descending). Any other value
/// is treated as [`SortMode::None`].
impl From<i32> for SortMode {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Ascending,
            2 => Self::Descending,
            _ => Self::None,
        }
    }
}

fn compare(a: &Interval, b: &Interval) -> Ordering {
    a.seconds().total_cmp(&b.seconds())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample() -> Vec<(String, Interval)> {
        vec![
            ("b".to_string(), Interval::new(2.0)),
            ("a".to_string(), Interval::new(1.000_001)),
            ("c".to_string(), Interval::new(1.000_002)),
            ("d".to_string(), Interval::new(2.0)),
        ]
    }

    fn names(timings: &[(String, Interval)]) -> Vec<&str> {
        timings.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn from_integer_codes() {
        assert_eq!(SortMode::from(0), SortMode::None);
        assert_eq!(SortMode::from(1), SortMode::Ascending);
        assert_eq!(SortMode::from(2), SortMode::Descending);
        assert_eq!(SortMode::from(3), SortMode::None);
        assert_eq!(SortMode::from(-1), SortMode::None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(SortMode::default(), SortMode::None);
    }

    #[test]
    fn none_keeps_order() {
        let mut timings = sample();
        SortMode::None.apply(&mut timings);

        assert_eq!(names(&timings), ["b", "a", "c", "d"]);
    }

    #[test]
    fn ascending_uses_full_precision() {
        let mut timings = sample();
        SortMode::Ascending.apply(&mut timings);

        assert_eq!(names(&timings), ["a", "c", "b", "d"]);
    }

    #[test]
    fn descending_uses_full_precision() {
        let mut timings = sample();
        SortMode::Descending.apply(&mut timings);

        assert_eq!(names(&timings), ["b", "d", "c", "a"]);
    }
}
