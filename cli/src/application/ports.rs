//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared wire types.

use std::path::PathBuf;

use anyhow::Result;
use irons_common::{
    AuditEvent, AuditPage, CreateRequest, CreateResponse, DeviceCodeResponse, DevicePollResponse,
    EgressRules, SandboxList, SandboxStatus, SshInfo,
};

use crate::domain::{AuditCursor, IronsConfig};

// ── Remote Sandbox Service ────────────────────────────────────────────────────

/// State-changing sandbox operations.
#[allow(async_fn_in_trait)]
pub trait SandboxLifecycle {
    /// Create a sandbox.
    async fn create(&self, request: &CreateRequest) -> Result<CreateResponse>;
    /// Power on a stopped sandbox.
    async fn start(&self, name: &str) -> Result<()>;
    /// Power off a running sandbox.
    async fn stop(&self, name: &str) -> Result<()>;
    /// Destroy a sandbox.
    async fn destroy(&self, name: &str) -> Result<()>;
}

/// Read-only sandbox queries.
#[allow(async_fn_in_trait)]
pub trait SandboxInspector {
    /// Current status record. Not-found surfaces as an `Err`.
    async fn status(&self, name: &str) -> Result<SandboxStatus>;
    /// Every sandbox on the account.
    async fn list(&self) -> Result<SandboxList>;
    /// SSH connection details.
    async fn ssh_info(&self, name: &str) -> Result<SshInfo>;
}

/// Append-only egress audit log.
#[allow(async_fn_in_trait)]
pub trait AuditLog {
    /// Fetch events strictly after `cursor`. `AuditCursor::START` fetches
    /// from the beginning.
    async fn audit_egress(&self, name: &str, cursor: AuditCursor) -> Result<AuditPage>;
}

/// Account-wide egress rules.
#[allow(async_fn_in_trait)]
pub trait EgressPolicy {
    async fn allow_domain(&self, domain: &str) -> Result<()>;
    async fn deny_domain(&self, domain: &str) -> Result<()>;
    async fn egress_rules(&self) -> Result<EgressRules>;
    async fn egress_mode(&self) -> Result<String>;
    async fn set_egress_mode(&self, mode: &str) -> Result<()>;
}

/// Composite trait: the full Remote Sandbox Service.
pub trait SandboxApi: SandboxLifecycle + SandboxInspector + AuditLog + EgressPolicy {}

/// Blanket implementation: any type implementing all four sub-traits is a `SandboxApi`.
impl<T> SandboxApi for T where T: SandboxLifecycle + SandboxInspector + AuditLog + EgressPolicy {}

/// Device-code authorization endpoints.
#[allow(async_fn_in_trait)]
pub trait DeviceAuth {
    /// Start a device-code session.
    async fn request_device_code(&self) -> Result<DeviceCodeResponse>;
    /// Poll the session identified by `code`.
    async fn poll_device(&self, code: &str) -> Result<DevicePollResponse>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts the persistent configuration file.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    fn load(&self) -> Result<IronsConfig>;
    /// Persist the configuration.
    fn save(&self, config: &IronsConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;

    /// Store a freshly issued API token, keeping the rest of the file.
    fn save_api_key(&self, token: &str) -> Result<()> {
        let mut config = self.load()?;
        config.api_key = Some(token.to_string());
        self.save(&config)
    }
}

// ── Output Ports ──────────────────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message to the diagnostic stream.
    fn warn(&self, message: &str);
    /// Emit one liveness marker while waiting.
    fn tick(&self);
}

/// Receives audit events in arrival order.
pub trait AuditSink {
    fn event(&self, event: &AuditEvent);
}
