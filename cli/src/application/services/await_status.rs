//! Status convergence: poll a sandbox until it reaches an expected state.

use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;

use irons_common::SandboxStatus;

use crate::application::ports::{ProgressReporter, SandboxInspector};
use crate::domain::{ExpectedStates, PollError, PollOutcome, PollSettings, StatusClass, classify_status};

/// Poll `name` until its status matches `expected`, reports a failure, or the
/// deadline in `settings` elapses.
///
/// Query failures (including not-found) are absorbed and retried at the same
/// cadence. One progress marker is emitted per unsuccessful iteration.
///
/// # Errors
///
/// Returns [`PollError::TerminalStatus`] as soon as a status carries a failure
/// signature, and [`PollError::TimedOut`] when the deadline passes first.
pub async fn await_status(
    api: &impl SandboxInspector,
    name: &str,
    expected: &ExpectedStates,
    settings: PollSettings,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<PollOutcome<SandboxStatus>, PollError> {
    // A timeout past the end of the clock means no deadline.
    let deadline = Instant::now().checked_add(settings.timeout);

    while deadline.is_none_or(|deadline| Instant::now() < deadline) {
        match api.status(name).await {
            Ok(record) => match classify_status(&record.status, expected) {
                StatusClass::Failed => {
                    tracing::debug!(sandbox = name, status = %record.status, "terminal status");
                    return Err(PollError::TerminalStatus {
                        name: name.to_string(),
                        status: record.status,
                    });
                }
                StatusClass::Converged => {
                    tracing::debug!(sandbox = name, status = %record.status, "converged");
                    return Ok(PollOutcome::Completed(record));
                }
                StatusClass::Pending => {
                    tracing::debug!(sandbox = name, status = %record.status, "not converged yet");
                }
            },
            Err(err) => {
                tracing::debug!(sandbox = name, error = %format!("{err:#}"), "status query failed, retrying");
            }
        }

        reporter.tick();
        tokio::select! {
            () = cancel.cancelled() => return Ok(PollOutcome::Cancelled),
            () = sleep(settings.interval) => {}
        }
    }

    Err(PollError::TimedOut {
        name: name.to_string(),
        expected: expected.clone(),
        timeout: settings.timeout,
    })
}
