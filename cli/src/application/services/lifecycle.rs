//! Sandbox lifecycle use-cases: create, start, stop, each followed by an
//! optional convergence wait.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use irons_common::{CreateRequest, CreateResponse, SandboxStatus};

use crate::application::ports::{ProgressReporter, SandboxInspector, SandboxLifecycle};
use crate::application::services::await_status::await_status;
use crate::domain::{ExpectedStates, PollOutcome, PollSettings};

/// States that count as "up" after create or start.
pub const READY_STATES: &[&str] = &["ready", "running"];
/// States that count as "down" after stop.
pub const STOPPED_STATES: &[&str] = &["stopped"];

/// How a lifecycle call ended.
#[derive(Debug, Clone)]
pub enum LifecycleOutcome {
    /// The sandbox reached an expected state.
    Settled(SandboxStatus),
    /// The request was accepted and no wait was requested.
    Submitted,
    /// The operator interrupted the wait.
    Cancelled,
}

/// Wait for `name` to reach one of `expected`, or return immediately when
/// `wait` is `None`.
///
/// # Errors
///
/// Returns an error if the sandbox reports a failure or the wait times out.
pub async fn converge(
    api: &impl SandboxInspector,
    name: &str,
    expected: &[&str],
    wait: Option<PollSettings>,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<LifecycleOutcome> {
    let Some(settings) = wait else {
        return Ok(LifecycleOutcome::Submitted);
    };
    let expected = ExpectedStates::new(expected)?;
    reporter.step(&format!("Waiting for sandbox '{name}' to be {expected}"));
    match await_status(api, name, &expected, settings, cancel, reporter).await? {
        PollOutcome::Completed(record) => Ok(LifecycleOutcome::Settled(record)),
        PollOutcome::Cancelled => Ok(LifecycleOutcome::Cancelled),
    }
}

/// Create a sandbox and wait for it to become ready.
///
/// # Errors
///
/// Returns an error if the create call fails or the wait does not succeed.
pub async fn create(
    api: &(impl SandboxLifecycle + SandboxInspector),
    request: &CreateRequest,
    wait: Option<PollSettings>,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<(CreateResponse, LifecycleOutcome)> {
    reporter.step(&format!("Creating sandbox '{}'...", request.name));
    let created = api.create(request).await.context("creating sandbox")?;
    let outcome = converge(api, &created.name, READY_STATES, wait, cancel, reporter).await?;
    Ok((created, outcome))
}

/// Start a stopped sandbox and wait for it to become ready.
///
/// # Errors
///
/// Returns an error if the start call fails or the wait does not succeed.
pub async fn start(
    api: &(impl SandboxLifecycle + SandboxInspector),
    name: &str,
    wait: Option<PollSettings>,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<LifecycleOutcome> {
    reporter.step(&format!("Starting sandbox '{name}'..."));
    api.start(name).await.context("starting sandbox")?;
    converge(api, name, READY_STATES, wait, cancel, reporter).await
}

/// Stop a running sandbox and wait for it to report stopped.
///
/// # Errors
///
/// Returns an error if the stop call fails or the wait does not succeed.
pub async fn stop(
    api: &(impl SandboxLifecycle + SandboxInspector),
    name: &str,
    wait: Option<PollSettings>,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<LifecycleOutcome> {
    reporter.step(&format!("Stopping sandbox '{name}'..."));
    api.stop(name).await.context("stopping sandbox")?;
    converge(api, name, STOPPED_STATES, wait, cancel, reporter).await
}
