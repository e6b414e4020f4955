//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides the operating system services the timer registry depends on.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// The current wall-clock time as seconds since the Unix epoch, rounded to the microsecond.
    ///
    /// Successive calls within one process never go backwards, even if the system clock is
    /// adjusted in the meantime.
    fn now(&self) -> f64;

    /// The resident memory of the current process in kilobytes.
    ///
    /// This is a best-effort probe. Returns 0 if the value cannot be determined.
    fn process_memory_usage_kb(&self) -> u64;
}
