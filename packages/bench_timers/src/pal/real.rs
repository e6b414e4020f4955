use std::sync::LazyLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::interval::round_to_micros;
use crate::pal::Platform;

pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Pairs a monotonic instant with the wall-clock time observed at the same moment. All later
/// timestamps are derived from the monotonic clock, so they keep moving forward even if the
/// system clock is stepped backwards.
static CLOCK_ANCHOR: LazyLock<ClockAnchor> = LazyLock::new(ClockAnchor::capture);

/// The platform that the build is targeting.
///
/// You would only use a different platform in unit tests that need a controllable clock.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn now(&self) -> f64 {
        CLOCK_ANCHOR.now()
    }

    #[cfg_attr(test, mutants::skip)] // Real memory usage is not predictable - tested via PAL unit tests.
    fn process_memory_usage_kb(&self) -> u64 {
        #[cfg(target_os = "linux")]
        {
            crate::pal::process_memory_usage_kb(&crate::pal::BuildTargetFilesystem)
        }

        #[cfg(windows)]
        {
            crate::pal::process_memory_usage_kb()
        }

        #[cfg(not(any(target_os = "linux", windows)))]
        {
            tracing::debug!("memory usage probe is not supported on this platform");
            0
        }
    }
}

#[derive(Debug)]
struct ClockAnchor {
    instant: Instant,
    since_epoch: Duration,
}

impl ClockAnchor {
    fn capture() -> Self {
        // A system clock set before 1970 is treated as being at the epoch.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        Self {
            instant: Instant::now(),
            since_epoch,
        }
    }

    fn now(&self) -> f64 {
        round_to_micros(
            self.since_epoch
                .saturating_add(self.instant.elapsed())
                .as_secs_f64(),
        )
    }
}
