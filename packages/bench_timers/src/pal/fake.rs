//! Fake platform implementation for testing.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::interval::round_to_micros;
use crate::pal::abstractions::Platform;

#[derive(Debug)]
struct FakePlatformState {
    now: f64,
    memory_usage_kb: u64,
}

/// Fake implementation of the platform abstraction for testing.
///
/// The clock stands still until a test moves it. Clones share the same state, so a test can
/// keep a handle to the platform after handing a clone to the code under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a fake platform whose clock reads the given epoch timestamp.
    pub(crate) fn new(now: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                now,
                memory_usage_kb: 0,
            })),
        }
    }

    /// Moves the clock forward (or backward, for a negative value).
    pub(crate) fn advance(&self, seconds: f64) {
        let mut state = self.state.lock();
        state.now = round_to_micros(state.now + seconds);
    }

    pub(crate) fn set_memory_usage_kb(&self, value: u64) {
        self.state.lock().memory_usage_kb = value;
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> f64 {
        self.state.lock().now
    }

    fn process_memory_usage_kb(&self) -> u64 {
        self.state.lock().memory_usage_kb
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "fake clock values are exact")]
mod tests {
    use super::*;

    #[test]
    fn clock_stands_still_until_advanced() {
        let platform = FakePlatform::new(100.0);

        assert_eq!(platform.now(), 100.0);
        assert_eq!(platform.now(), 100.0);

        platform.advance(0.5);
        assert_eq!(platform.now(), 100.5);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new(0.0);
        let platform2 = platform1.clone();

        platform1.advance(2.0);
        assert_eq!(platform2.now(), 2.0);

        platform2.set_memory_usage_kb(4096);
        assert_eq!(platform1.process_memory_usage_kb(), 4096);
    }
}
