//! Shared test doubles for the polling services.
//!
//! Scripted ports replay a fixed sequence of responses (the last entry
//! repeats once the script runs out) and count how often they were called.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use anyhow::Result;
use irons_common::{
    AuditEvent, AuditPage, DeviceCodeResponse, DevicePollResponse, SandboxList, SandboxStatus,
    SshInfo,
};

use crate::application::ports::{
    AuditLog, AuditSink, ConfigStore, DeviceAuth, ProgressReporter, SandboxInspector,
};
use crate::domain::{AuditCursor, IronsConfig};

fn replay<T: Clone>(script: &[T], index: usize) -> T {
    script[index.min(script.len() - 1)].clone()
}

// ── Status ────────────────────────────────────────────────────────────────────

pub struct ScriptedStatus {
    script: Vec<Result<&'static str, &'static str>>,
    calls: Cell<usize>,
}

impl ScriptedStatus {
    pub fn new(script: Vec<Result<&'static str, &'static str>>) -> Self {
        Self {
            script,
            calls: Cell::new(0),
        }
    }

    pub fn repeating(status: &'static str) -> Self {
        Self::new(vec![Ok(status)])
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SandboxInspector for ScriptedStatus {
    async fn status(&self, name: &str) -> Result<SandboxStatus> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        match replay(&self.script, n) {
            Ok(status) => Ok(SandboxStatus {
                name: name.to_string(),
                status: status.to_string(),
                ..SandboxStatus::default()
            }),
            Err(msg) => anyhow::bail!("{msg}"),
        }
    }
    async fn list(&self) -> Result<SandboxList> {
        anyhow::bail!("not expected")
    }
    async fn ssh_info(&self, _: &str) -> Result<SshInfo> {
        anyhow::bail!("not expected")
    }
}

// ── Device auth ───────────────────────────────────────────────────────────────

pub struct ScriptedDevice {
    script: Vec<Result<(&'static str, Option<&'static str>), &'static str>>,
    polls: Cell<usize>,
}

impl ScriptedDevice {
    pub fn new(script: Vec<Result<(&'static str, Option<&'static str>), &'static str>>) -> Self {
        Self {
            script,
            polls: Cell::new(0),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls.get()
    }
}

impl DeviceAuth for ScriptedDevice {
    async fn request_device_code(&self) -> Result<DeviceCodeResponse> {
        anyhow::bail!("not expected")
    }
    async fn poll_device(&self, _: &str) -> Result<DevicePollResponse> {
        let n = self.polls.get();
        self.polls.set(n + 1);
        match replay(&self.script, n) {
            Ok((status, token)) => Ok(DevicePollResponse {
                status: status.to_string(),
                token: token.map(str::to_string),
            }),
            Err(msg) => anyhow::bail!("{msg}"),
        }
    }
}

#[derive(Default)]
pub struct MemoryConfigStore {
    pub config: RefCell<IronsConfig>,
    pub saves: Cell<usize>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<IronsConfig> {
        Ok(self.config.borrow().clone())
    }
    fn save(&self, config: &IronsConfig) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/dev/null"))
    }
}

// ── Audit ─────────────────────────────────────────────────────────────────────

pub struct ScriptedAudit {
    script: Vec<Result<AuditPage, &'static str>>,
    cursors: RefCell<Vec<AuditCursor>>,
}

impl ScriptedAudit {
    pub fn new(script: Vec<Result<AuditPage, &'static str>>) -> Self {
        Self {
            script,
            cursors: RefCell::new(Vec::new()),
        }
    }

    /// Cursors passed to each fetch, in call order.
    pub fn cursors(&self) -> Vec<AuditCursor> {
        self.cursors.borrow().clone()
    }
}

impl AuditLog for ScriptedAudit {
    async fn audit_egress(&self, _: &str, cursor: AuditCursor) -> Result<AuditPage> {
        let n = self.cursors.borrow().len();
        self.cursors.borrow_mut().push(cursor);
        match replay(&self.script, n) {
            Ok(page) => Ok(page),
            Err(msg) => anyhow::bail!("{msg}"),
        }
    }
}

#[derive(Default)]
pub struct RecordingSink(pub RefCell<Vec<AuditEvent>>);

impl RecordingSink {
    pub fn hosts(&self) -> Vec<String> {
        self.0.borrow().iter().map(|e| e.host.clone()).collect()
    }
}

impl AuditSink for RecordingSink {
    fn event(&self, event: &AuditEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    ticks: Cell<usize>,
    pub warnings: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn ticks(&self) -> usize {
        self.ticks.get()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn tick(&self) {
        self.ticks.set(self.ticks.get() + 1);
    }
}
