//! `irons create`: create a sandbox and wait until it is ready.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use irons_common::CreateRequest;

use crate::app::AppContext;
use crate::application::services::lifecycle;
use crate::commands::{WaitFlags, report_outcome};
use crate::domain::config::parse_secrets;
use crate::output::{HumanRenderer, TerminalReporter};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Name of the sandbox
    #[arg(short, long)]
    pub name: String,

    /// SSH public key path [default: ~/.ssh/id_rsa.pub]
    #[arg(short, long, value_name = "PATH")]
    pub key: Option<PathBuf>,

    /// Inject a secret as KEY=VALUE (repeatable)
    #[arg(short, long = "secret", value_name = "KEY=VALUE")]
    pub secrets: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlags,
}

fn default_key_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".ssh").join("id_rsa.pub"))
}

/// Run `irons create`.
///
/// # Errors
///
/// Returns an error if the key cannot be read, a secret is malformed, or
/// the sandbox fails to come up.
pub async fn run(app: &AppContext, args: &CreateArgs) -> Result<ExitCode> {
    let secrets = parse_secrets(&args.secrets)?;
    let key_path = match &args.key {
        Some(path) => path.clone(),
        None => default_key_path()?,
    };
    let public_key = std::fs::read_to_string(&key_path)
        .with_context(|| format!("reading SSH key file {}", key_path.display()))?;
    let api = app.api()?;

    let request = CreateRequest {
        name: args.name.clone(),
        public_key: public_key.trim_end().to_string(),
        secrets,
    };
    let reporter = TerminalReporter::new(&app.output);
    let (created, outcome) = lifecycle::create(
        &api,
        &request,
        args.wait.settings(),
        &app.cancel,
        &reporter,
    )
    .await?;
    reporter.finish();

    HumanRenderer::new(&app.output).render_created(&created);
    Ok(report_outcome(app, &outcome, "Sandbox is ready"))
}
