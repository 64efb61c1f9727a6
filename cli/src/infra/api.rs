//! HTTP client for the sandbox service and the console's device-code
//! endpoints.
//!
//! One [`HttpApiClient`] implements every remote port. The sandbox API
//! requires a bearer key; the console client is built without one.

use std::time::Duration;

use anyhow::Result;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use irons_common::{
    AuditPage, CreateRequest, CreateResponse, DeviceCodeResponse, DevicePollResponse,
    EgressDomainRequest, EgressMode, EgressRules, ErrorResponse, SandboxList, SandboxStatus,
    SshInfo,
};

use crate::application::ports::{
    AuditLog, DeviceAuth, EgressPolicy, SandboxInspector, SandboxLifecycle,
};
use crate::domain::AuditCursor;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("irons/", env!("CARGO_PKG_VERSION"));

/// Failures talking to the remote service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to make request: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a JSON `{"error": ...}` body.
    #[error("API error: {message}")]
    Remote { status: u16, message: String },
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map a failed response to an [`ApiError`], preferring the server's own
/// `error` field.
#[must_use]
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.error.is_empty() => ApiError::Remote {
            status,
            message: parsed.error,
        },
        _ => ApiError::Status {
            status,
            body: body.trim().to_string(),
        },
    }
}

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Path of a sandbox resource, with `name` encoded as a single segment.
#[must_use]
pub fn sandbox_path(name: &str, suffix: &str) -> String {
    format!("/sandboxes/{}{suffix}", utf8_percent_encode(name, SEGMENT))
}

/// Path of the egress audit endpoint. The start cursor sends no token.
#[must_use]
pub fn audit_path(name: &str, cursor: AuditCursor) -> String {
    let base = sandbox_path(name, "/audit/egress");
    if cursor.is_start() {
        base
    } else {
        format!("{base}?pageToken={cursor}")
    }
}

/// Builder for [`HttpApiClient`].
#[derive(Debug)]
pub struct HttpApiClientBuilder {
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
}

impl HttpApiClientBuilder {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<HttpApiClient, ApiError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(HttpApiClient {
            client,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}

/// reqwest-backed implementation of the remote ports.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpApiClient {
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> HttpApiClientBuilder {
        HttpApiClientBuilder::new(base_url)
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    /// Send and return the body text. `204 No Content` yields an empty body.
    async fn execute(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let response = req.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "api response");
        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }
        let body = response.text().await.map_err(ApiError::Transport)?;
        if status.is_client_error() || status.is_server_error() {
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = self
            .execute(self.request(method, path).json(payload))
            .await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    async fn send_unit(
        &self,
        method: Method,
        path: &str,
        payload: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<(), ApiError> {
        let mut req = self.request(method, path);
        if let Some(payload) = payload {
            req = req.json(payload);
        }
        self.execute(req).await.map(|_| ())
    }
}

impl SandboxLifecycle for HttpApiClient {
    async fn create(&self, request: &CreateRequest) -> Result<CreateResponse> {
        Ok(self.send_json(Method::POST, "/sandboxes", request).await?)
    }

    async fn start(&self, name: &str) -> Result<()> {
        let path = sandbox_path(name, "/start");
        Ok(self.send_unit(Method::POST, &path, None::<&()>).await?)
    }

    async fn stop(&self, name: &str) -> Result<()> {
        let path = sandbox_path(name, "/stop");
        Ok(self.send_unit(Method::POST, &path, None::<&()>).await?)
    }

    async fn destroy(&self, name: &str) -> Result<()> {
        let path = sandbox_path(name, "");
        Ok(self.send_unit(Method::DELETE, &path, None::<&()>).await?)
    }
}

impl SandboxInspector for HttpApiClient {
    async fn status(&self, name: &str) -> Result<SandboxStatus> {
        Ok(self.get_json(&sandbox_path(name, "")).await?)
    }

    async fn list(&self) -> Result<SandboxList> {
        Ok(self.get_json("/sandboxes").await?)
    }

    async fn ssh_info(&self, name: &str) -> Result<SshInfo> {
        Ok(self.get_json(&sandbox_path(name, "/ssh")).await?)
    }
}

impl AuditLog for HttpApiClient {
    async fn audit_egress(&self, name: &str, cursor: AuditCursor) -> Result<AuditPage> {
        Ok(self.get_json(&audit_path(name, cursor)).await?)
    }
}

impl EgressPolicy for HttpApiClient {
    async fn allow_domain(&self, domain: &str) -> Result<()> {
        let body = EgressDomainRequest {
            domain: domain.to_string(),
        };
        Ok(self
            .send_unit(Method::POST, "/egress/allow", Some(&body))
            .await?)
    }

    async fn deny_domain(&self, domain: &str) -> Result<()> {
        let body = EgressDomainRequest {
            domain: domain.to_string(),
        };
        Ok(self
            .send_unit(Method::POST, "/egress/deny", Some(&body))
            .await?)
    }

    async fn egress_rules(&self) -> Result<EgressRules> {
        Ok(self.get_json("/egress").await?)
    }

    async fn egress_mode(&self) -> Result<String> {
        let mode: EgressMode = self.get_json("/egress/mode").await?;
        Ok(mode.mode)
    }

    async fn set_egress_mode(&self, mode: &str) -> Result<()> {
        let body = EgressMode {
            mode: mode.to_string(),
        };
        Ok(self
            .send_unit(Method::PUT, "/egress/mode", Some(&body))
            .await?)
    }
}

impl DeviceAuth for HttpApiClient {
    async fn request_device_code(&self) -> Result<DeviceCodeResponse> {
        Ok(self
            .send_json(Method::POST, "/auth/device/code", &serde_json::json!({}))
            .await?)
    }

    async fn poll_device(&self, code: &str) -> Result<DevicePollResponse> {
        let body = self
            .execute(
                self.request(Method::GET, "/auth/device/poll")
                    .query(&[("code", code)]),
            )
            .await?;
        Ok(serde_json::from_str(&body).map_err(ApiError::Decode)?)
    }
}
