//! Audit cursor bookkeeping and verdict classification.

use std::fmt;

use irons_common::AuditEvent;

/// Opaque, server-issued position in the audit log.
///
/// Zero means "from the beginning". Non-zero values come from the server and
/// are sent back verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct AuditCursor(u64);

impl AuditCursor {
    pub const START: Self = Self(0);

    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Adopt the page token from a response.
    ///
    /// A zero token means "nothing new", so the current cursor is kept.
    #[must_use]
    pub fn advance(self, page_token: u64) -> Self {
        if page_token == 0 { self } else { Self(page_token) }
    }
}

impl fmt::Display for AuditCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display verdict for one egress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Warn,
    Blocked,
}

impl Verdict {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Allowed => "ALLOW",
            Self::Warn => "WARN",
            Self::Blocked => "DENY",
        }
    }
}

/// Classify an event from its explicit `verdict`, falling back to `allowed`.
///
/// Unknown verdict strings are treated as blocked.
#[must_use]
pub fn classify_verdict(event: &AuditEvent) -> Verdict {
    let explicit = event
        .verdict
        .as_deref()
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());
    match explicit.as_deref() {
        Some("allowed" | "allow") => Verdict::Allowed,
        Some("warn" | "warning") => Verdict::Warn,
        Some(_) => Verdict::Blocked,
        None if event.allowed => Verdict::Allowed,
        None => Verdict::Blocked,
    }
}
