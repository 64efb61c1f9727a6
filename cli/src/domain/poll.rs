//! Poll cadence and outcome types shared by every convergence loop.

use std::time::Duration;

/// Cadence and deadline for one polling loop.
///
/// Passed into each poller explicitly so tests can shrink both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between two consecutive queries.
    pub interval: Duration,
    /// Overall deadline. Ignored by loops that only end on cancellation.
    pub timeout: Duration,
}

impl PollSettings {
    /// Sandbox status convergence: every 2 s for up to 10 minutes.
    pub const STATUS: Self = Self {
        interval: Duration::from_secs(2),
        timeout: Duration::from_secs(600),
    };

    /// Device authorization: every second for up to 10 minutes.
    pub const DEVICE: Self = Self {
        interval: Duration::from_secs(1),
        timeout: Duration::from_secs(600),
    };

    /// Audit follow mode: every 2 s, no deadline.
    pub const AUDIT: Self = Self {
        interval: Duration::from_secs(2),
        timeout: Duration::MAX,
    };

    /// Replace the deadline, keeping the cadence.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

/// Result of a polling loop that did not fail.
///
/// Cancellation is not an error: the operator asked the loop to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> PollOutcome<T> {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Render a duration the way operators type it: `10m`, `45s`, `1m30s`.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    match (secs / 60, secs % 60) {
        (0, s) => format!("{s}s"),
        (m, 0) => format!("{m}m"),
        (m, s) => format!("{m}m{s}s"),
    }
}
