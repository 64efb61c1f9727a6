use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single egress audit log entry.
///
/// Older API versions only send the boolean `allowed`; newer ones add a
/// `verdict` string (`allowed`, `warn`, `blocked`) and the `protocol`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub sandbox_name: String,
    pub host: String,
    #[serde(default)]
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Page of events returned by `GET /sandboxes/{name}/audit/egress`.
///
/// A zero `page_token` means the server had no new token to hand out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPage {
    #[serde(default)]
    pub events: Vec<AuditEvent>,
    #[serde(default)]
    pub page_token: u64,
}
