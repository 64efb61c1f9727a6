//! `irons scp`: copy files to or from a sandbox.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::SandboxInspector;
use crate::commands::ssh::{ConnectFlags, exec_or_print};
use crate::domain::ssh::CopyPlan;

/// Arguments for the scp command.
#[derive(Args)]
#[command(after_help = "Use SANDBOX:PATH for the remote side, e.g.\n  \
    irons scp ./build.tar my-box:/tmp/\n  irons scp -r my-box:/var/log ./logs")]
pub struct ScpArgs {
    /// Source path (local or SANDBOX:PATH)
    pub src: String,

    /// Destination path (local or SANDBOX:PATH)
    pub dst: String,

    /// Recursively copy entire directories
    #[arg(short, long)]
    pub recursive: bool,

    #[command(flatten)]
    pub connect: ConnectFlags,
}

/// Run `irons scp`.
///
/// # Errors
///
/// Returns an error if neither or both paths name a sandbox, or if the copy
/// cannot be started.
pub async fn run(app: &AppContext, args: &ScpArgs) -> Result<ExitCode> {
    let plan = CopyPlan::new(&args.src, &args.dst)?;
    let api = app.api()?;
    let info = api
        .ssh_info(&plan.sandbox)
        .await
        .context("getting SSH info")?;
    let argv = plan.scp_args(&info, args.recursive, args.connect.strict_hostkeys);
    exec_or_print(app, "scp", &argv, args.connect.command).await
}
