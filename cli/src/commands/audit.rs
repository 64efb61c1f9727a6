//! `irons audit`: read a sandbox's audit logs.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::services::audit_tail::tail_audit;
use crate::domain::{PollOutcome, PollSettings};
use crate::output::{AuditPrinter, TerminalReporter};

#[derive(Subcommand)]
pub enum AuditCommand {
    /// Show outbound connection attempts and their verdicts
    Egress(AuditEgressArgs),
}

/// Arguments for `irons audit egress`.
#[derive(Args)]
pub struct AuditEgressArgs {
    /// Sandbox name
    pub name: String,

    /// Keep polling for new events (like tail -f)
    #[arg(short, long)]
    pub follow: bool,
}

/// Run `irons audit <subcommand>`.
///
/// # Errors
///
/// Returns an error if the initial fetch fails.
pub async fn run(app: &AppContext, cmd: AuditCommand) -> Result<ExitCode> {
    match cmd {
        AuditCommand::Egress(args) => egress(app, &args).await,
    }
}

async fn egress(app: &AppContext, args: &AuditEgressArgs) -> Result<ExitCode> {
    let api = app.api()?;
    let sink = AuditPrinter::new(&app.output);
    let reporter = TerminalReporter::new(&app.output);
    let outcome = tail_audit(
        &api,
        &sink,
        &args.name,
        args.follow,
        PollSettings::AUDIT,
        &app.cancel,
        &reporter,
    )
    .await?;
    match outcome {
        PollOutcome::Completed(cursor) => tracing::debug!(%cursor, "audit fetch complete"),
        PollOutcome::Cancelled => tracing::debug!("audit follow stopped"),
    }
    Ok(ExitCode::SUCCESS)
}
