//! `irons stop`: power off a sandbox, preserving its disk.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;
use crate::commands::{WaitArgs, report_outcome};
use crate::output::TerminalReporter;

/// Run `irons stop`.
///
/// # Errors
///
/// Returns an error if the sandbox cannot be stopped or never reports stopped.
pub async fn run(app: &AppContext, args: &WaitArgs) -> Result<ExitCode> {
    let api = app.api()?;
    let reporter = TerminalReporter::new(&app.output);
    let outcome =
        lifecycle::stop(&api, &args.name, args.wait.settings(), &app.cancel, &reporter).await?;
    reporter.finish();
    Ok(report_outcome(app, &outcome, "Sandbox stopped"))
}
