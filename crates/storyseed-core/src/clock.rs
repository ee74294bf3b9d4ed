//! Clock abstraction for determinism.

use tokio::time::Instant;

/// Abstraction over monotonic time so debounce deadlines can be driven
/// deterministically in tests.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Production clock that delegates to the tokio clock.
///
/// Under a paused tokio runtime this follows the runtime's virtual time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
