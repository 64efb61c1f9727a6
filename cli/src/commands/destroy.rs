//! `irons destroy`: delete a sandbox and its disk.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::SandboxLifecycle;
use crate::commands::NameArg;

/// Run `irons destroy`.
///
/// # Errors
///
/// Returns an error if the prompt fails or the API call fails.
pub async fn run(app: &AppContext, args: &NameArg) -> Result<ExitCode> {
    let api = app.api()?;
    let name = &args.name;
    if !app.non_interactive
        && !app.confirm(
            &format!("Destroy sandbox '{name}'? This cannot be undone."),
            false,
        )?
    {
        app.output.info("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    app.output.info(&format!("Destroying sandbox '{name}'..."));
    api.destroy(name).await.context("destroying sandbox")?;
    app.output.success("Sandbox destroyed");
    Ok(ExitCode::SUCCESS)
}
