use std::fmt;

use thiserror::Error;

use crate::DEFAULT_TIMER_NAME;

/// Errors that can occur when operating on timers or interval formats.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The timer has never been started or has been deleted since.
    #[error("{} not found", TimerLabel(.name))]
    NotFound {
        /// Name of the timer that was requested.
        name: String,
    },

    /// The timer was already stopped and has not been restarted since.
    #[error("{} is already stopped", TimerLabel(.name))]
    AlreadyStopped {
        /// Name of the timer that was requested.
        name: String,
    },

    /// The caller provided an interval format template that could not be parsed.
    #[error("invalid interval format '{template}': {problem}")]
    InvalidFormat {
        /// The template as provided by the caller.
        template: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

/// A specialized `Result` type for timer operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

/// Renders a timer name the way it is presented in error messages.
struct TimerLabel<'a>(&'a str);

impl fmt::Display for TimerLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() || self.0 == DEFAULT_TIMER_NAME {
            write!(f, "Default timer")
        } else {
            write!(f, "Timer \"{}\"", self.0)
        }
    }
}
