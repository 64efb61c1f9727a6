use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `POST /auth/device/code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCodeResponse {
    pub code: String,
    #[serde(alias = "verificationURI", alias = "verificationUri")]
    pub verification_uri: String,
    #[serde(alias = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

/// Response from `GET /auth/device/poll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicePollResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
