//! Device-code authorization transitions.

use crate::domain::error::PollError;

/// Status reported by one device poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevicePollStatus {
    Pending,
    Authorized,
    Expired,
    /// Anything else, kept verbatim for the error message.
    Unrecognized(String),
}

impl DevicePollStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "authorized" => Self::Authorized,
            "expired" => Self::Expired,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }
}

/// Decide what a poll response means for the login wait.
///
/// `Ok(None)` keeps polling, `Ok(Some(token))` ends the wait with a credential
/// to persist, and `Err` is terminal.
///
/// # Errors
///
/// Returns a [`PollError`] for expired codes, unknown statuses, or an
/// authorization that carries no token.
pub fn next_device_step(status: &str, token: Option<&str>) -> Result<Option<String>, PollError> {
    match DevicePollStatus::parse(status) {
        DevicePollStatus::Pending => Ok(None),
        DevicePollStatus::Authorized => match token.map(str::trim) {
            Some(t) if !t.is_empty() => Ok(Some(t.to_string())),
            _ => Err(PollError::MissingToken),
        },
        DevicePollStatus::Expired => Err(PollError::DeviceCodeExpired),
        DevicePollStatus::Unrecognized(raw) => Err(PollError::UnexpectedPollStatus(raw)),
    }
}
