use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Payload for `POST /sandboxes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub public_key: String,
    /// Secrets injected into the sandbox environment.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub secrets: HashMap<String, String>,
}

/// Response from `POST /sandboxes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// Status record for a single sandbox.
///
/// `status` is free text owned by the server; the client never maps it onto a
/// closed set of states.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SandboxStatus {
    pub name: String,
    #[serde(default)]
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// Response from `GET /sandboxes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SandboxList {
    #[serde(default)]
    pub sandboxes: Vec<SandboxStatus>,
}

/// SSH connection details for a sandbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshInfo {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Remote command the server wants run on connect, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Payload for `POST /egress/allow` and `POST /egress/deny`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EgressDomainRequest {
    pub domain: String,
}

/// Payload and response for `/egress/mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EgressMode {
    pub mode: String,
}

/// Response from `GET /egress`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EgressRules {
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    #[serde(default)]
    pub denied_domains: Vec<String>,
}

/// Error body returned by the API on 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
