//! `irons start`: power on a stopped sandbox.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle;
use crate::commands::{WaitArgs, report_outcome};
use crate::output::TerminalReporter;

/// Run `irons start`.
///
/// # Errors
///
/// Returns an error if the sandbox cannot be started or never becomes ready.
pub async fn run(app: &AppContext, args: &WaitArgs) -> Result<ExitCode> {
    let api = app.api()?;
    let reporter = TerminalReporter::new(&app.output);
    let outcome =
        lifecycle::start(&api, &args.name, args.wait.settings(), &app.cancel, &reporter).await?;
    reporter.finish();
    Ok(report_outcome(app, &outcome, "Sandbox started"))
}
