//! Free-text sandbox status classification.
//!
//! The server's status vocabulary is not fixed, so statuses stay strings and
//! are matched by case-insensitive substring. Every rule lives here so the
//! polling loop only asks one question: failed, converged, or neither.

use std::fmt;

use crate::domain::error::StatusError;

/// Fragments that mark a status as a terminal failure.
pub const FAILURE_SIGNATURES: &[&str] = &["error", "failed"];

/// Non-empty, ordered set of lower-cased target state fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStates(Vec<String>);

impl ExpectedStates {
    /// Build the set, normalizing each fragment and dropping blanks.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::NoExpectedStates`] if nothing usable remains.
    pub fn new<I, S>(states: I) -> Result<Self, StatusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fragments: Vec<String> = Vec::new();
        for state in states {
            let fragment = state.as_ref().trim().to_lowercase();
            if !fragment.is_empty() && !fragments.contains(&fragment) {
                fragments.push(fragment);
            }
        }
        if fragments.is_empty() {
            return Err(StatusError::NoExpectedStates);
        }
        Ok(Self(fragments))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `normalized` must already be lower-cased.
    fn matches(&self, normalized: &str) -> bool {
        self.0.iter().any(|fragment| normalized.contains(fragment.as_str()))
    }
}

impl fmt::Display for ExpectedStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" or "))
    }
}

/// What one observed status means for a convergence wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The status carries a failure signature. Fatal, never retried.
    Failed,
    /// The status matches one of the expected fragments.
    Converged,
    /// Neither; keep polling.
    Pending,
}

/// Classify a raw status against the expected set.
///
/// Failure signatures are checked first, so `"ready (error)"` is a failure
/// even when waiting for `ready`.
#[must_use]
pub fn classify_status(status: &str, expected: &ExpectedStates) -> StatusClass {
    let normalized = status.to_lowercase();
    if FAILURE_SIGNATURES
        .iter()
        .any(|signature| normalized.contains(signature))
    {
        StatusClass::Failed
    } else if expected.matches(&normalized) {
        StatusClass::Converged
    } else {
        StatusClass::Pending
    }
}

/// Coarse health indicator shown by `irons status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Ready,
    Starting,
    Stopped,
    Failing,
    Unknown,
}

impl Health {
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        let s = status.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| s.contains(w));
        if has(FAILURE_SIGNATURES) {
            Self::Failing
        } else if has(&["running", "ready"]) {
            Self::Ready
        } else if has(&["creating", "starting"]) {
            Self::Starting
        } else if has(&["stopped", "stopping"]) {
            Self::Stopped
        } else {
            Self::Unknown
        }
    }
}
