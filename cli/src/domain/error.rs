//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::time::Duration;

use thiserror::Error;

use crate::domain::poll::format_duration;
use crate::domain::status::ExpectedStates;

// ── Status errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("at least one expected state is required")]
    NoExpectedStates,
}

// ── Poll errors ───────────────────────────────────────────────────────────────

/// Fatal outcomes of the polling loops.
///
/// Remote-reported failures and deadline exhaustion are separate variants so
/// callers can tell "server said no" apart from "gave up waiting".
#[derive(Debug, Error)]
pub enum PollError {
    #[error("sandbox '{name}' entered error state: {status}")]
    TerminalStatus { name: String, status: String },

    #[error(
        "timed out after {} waiting for sandbox '{name}' to be {expected}",
        format_duration(.timeout)
    )]
    TimedOut {
        name: String,
        expected: ExpectedStates,
        timeout: Duration,
    },

    #[error("device code expired, please run `irons login` again")]
    DeviceCodeExpired,

    #[error("unexpected poll status {0:?}")]
    UnexpectedPollStatus(String),

    #[error("server reported authorization without a token")]
    MissingToken,

    #[error("timed out waiting for authorization")]
    AuthorizationTimedOut,
}

impl PollError {
    /// `true` when the client gave up on its own deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. } | Self::AuthorizationTimedOut)
    }

    /// `true` when the remote side reported a terminal condition.
    #[must_use]
    pub fn is_terminal_remote(&self) -> bool {
        !self.is_timeout()
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "API key is required. Run `irons login`, set --api-key, or set IRONS_API_KEY."
    )]
    MissingApiKey,

    #[error("invalid secret format '{0}'. Expected KEY=VALUE")]
    InvalidSecret(String),
}
