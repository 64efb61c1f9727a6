//! Command implementations

pub mod audit;
pub mod create;
pub mod destroy;
pub mod egress;
pub mod forward;
pub mod list;
pub mod login;
pub mod scp;
pub mod ssh;
pub mod start;
pub mod status;
pub mod stop;

use std::process::ExitCode;
use std::time::Duration;

use clap::Args;

use crate::app::AppContext;
use crate::application::services::lifecycle::LifecycleOutcome;
use crate::domain::PollSettings;

/// Upper bound accepted by `--timeout`.
pub const MAX_WAIT_SECS: u64 = 86_400;

/// A single sandbox name.
#[derive(Args)]
pub struct NameArg {
    /// Sandbox name
    pub name: String,
}

/// Flags shared by commands that wait for a sandbox to settle.
#[derive(Args)]
pub struct WaitFlags {
    /// Return as soon as the request is accepted
    #[arg(long)]
    pub no_wait: bool,

    /// Give up waiting after this many seconds (at most one day)
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 600,
        value_parser = clap::value_parser!(u64).range(1..=MAX_WAIT_SECS)
    )]
    pub timeout: u64,
}

impl WaitFlags {
    /// Poll settings for the wait, or `None` with `--no-wait`.
    #[must_use]
    pub fn settings(&self) -> Option<PollSettings> {
        (!self.no_wait)
            .then(|| PollSettings::STATUS.with_timeout(Duration::from_secs(self.timeout)))
    }
}

/// Arguments for `start` and `stop`.
#[derive(Args)]
pub struct WaitArgs {
    /// Sandbox name
    pub name: String,

    #[command(flatten)]
    pub wait: WaitFlags,
}

/// Report how a lifecycle wait ended. `done` is printed once the sandbox
/// settles.
fn report_outcome(app: &AppContext, outcome: &LifecycleOutcome, done: &str) -> ExitCode {
    match outcome {
        LifecycleOutcome::Settled(record) => {
            app.output
                .success(&format!("{done} (status: {})", record.status));
        }
        LifecycleOutcome::Submitted => app.output.info("Request accepted; not waiting."),
        LifecycleOutcome::Cancelled => app.output.warn("Wait cancelled."),
    }
    ExitCode::SUCCESS
}
