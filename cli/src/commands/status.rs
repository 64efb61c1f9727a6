//! `irons status`: show one sandbox.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::SandboxInspector;
use crate::commands::NameArg;
use crate::output::HumanRenderer;

/// Run `irons status`.
///
/// # Errors
///
/// Returns an error if the status request fails.
pub async fn run(app: &AppContext, args: &NameArg) -> Result<ExitCode> {
    let api = app.api()?;
    let status = api
        .status(&args.name)
        .await
        .context("getting sandbox status")?;
    HumanRenderer::new(&app.output).render_status(&status);
    Ok(ExitCode::SUCCESS)
}
