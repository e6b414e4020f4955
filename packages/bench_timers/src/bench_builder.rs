use crate::Bench;
use crate::pal::PlatformFacade;

/// Builder for a [`Bench`] with non-default configuration.
///
/// # Examples
///
/// ```
/// use std::time::{SystemTime, UNIX_EPOCH};
///
/// use bench_timers::Bench;
///
/// // The host knows when the request arrived; timers report relative to that moment.
/// let received_at = SystemTime::now()
///     .duration_since(UNIX_EPOCH)
///     .unwrap()
///     .as_secs_f64();
///
/// let bench = Bench::builder().request_start(received_at).build();
///
/// assert!(bench.since_request().seconds() >= 0.0);
/// ```
#[derive(Debug)]
#[must_use]
pub struct BenchBuilder {
    request_start: Option<f64>,
    platform: PlatformFacade,
}

impl BenchBuilder {
    pub(crate) fn new() -> Self {
        Self {
            request_start: None,
            platform: PlatformFacade::real(),
        }
    }

    /// Sets the request start as seconds since the Unix epoch.
    ///
    /// [`Bench::since_request()`] measures from this moment. If not set, the moment the
    /// registry is built is used.
    pub fn request_start(mut self, timestamp: f64) -> Self {
        self.request_start = Some(timestamp);
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> Bench {
        Bench::from_parts(self.platform, self.request_start)
    }
}
