//! `irons list`: table of every sandbox on the account.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::SandboxInspector;
use crate::output::HumanRenderer;

/// Run `irons list`.
///
/// # Errors
///
/// Returns an error if the list request fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let api = app.api()?;
    let list = api.list().await.context("listing sandboxes")?;
    HumanRenderer::new(&app.output).render_list(&list.sandboxes);
    Ok(ExitCode::SUCCESS)
}
