//! `irons ssh`: interactive shell on a sandbox.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::SandboxInspector;
use crate::domain::ssh::{render_command, ssh_args};
use crate::infra::ssh::run_interactive;

/// Flags shared by `ssh`, `scp` and `forward`.
#[derive(Args)]
pub struct ConnectFlags {
    /// Print the command instead of running it
    #[arg(short, long)]
    pub command: bool,

    /// Enable strict host key checking (disabled by default)
    #[arg(long)]
    pub strict_hostkeys: bool,
}

/// Arguments for the ssh command.
#[derive(Args)]
pub struct SshArgs {
    /// Sandbox name
    pub name: String,

    #[command(flatten)]
    pub connect: ConnectFlags,
}

/// Print the command line, or run it and forward its exit code.
pub(crate) async fn exec_or_print(
    app: &AppContext,
    program: &str,
    args: &[String],
    print_only: bool,
) -> Result<ExitCode> {
    if print_only {
        println!("{}", render_command(program, args));
        return Ok(ExitCode::SUCCESS);
    }
    let status = run_interactive(program, args).await?;
    if !status.success() {
        tracing::debug!(program, ?status, "child exited unsuccessfully");
        app.output
            .error(&format!("{program} exited with {status}"));
    }
    let code = crate::infra::ssh::exit_code(status);
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

/// Run `irons ssh`.
///
/// # Errors
///
/// Returns an error if connection details cannot be fetched or `ssh` cannot
/// be spawned.
pub async fn run(app: &AppContext, args: &SshArgs) -> Result<ExitCode> {
    let api = app.api()?;
    let info = api
        .ssh_info(&args.name)
        .await
        .context("getting SSH info")?;
    let argv = ssh_args(&info, args.connect.strict_hostkeys);
    if !args.connect.command {
        app.output.info(&format!(
            "Connecting to {}@{}:{}...",
            info.username, info.host, info.port
        ));
    }
    exec_or_print(app, "ssh", &argv, args.connect.command).await
}
