//! `irons forward`: local port forwarding over SSH.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::SandboxInspector;
use crate::commands::ssh::{ConnectFlags, exec_or_print};
use crate::domain::ssh::forward_args;

/// Arguments for the forward command.
#[derive(Args)]
pub struct ForwardArgs {
    /// Sandbox name
    pub name: String,

    /// Remote port on the sandbox to forward
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub remote_port: u16,

    /// Local port to listen on [default: same as --remote-port]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub local_port: Option<u16>,

    #[command(flatten)]
    pub connect: ConnectFlags,
}

/// Run `irons forward`.
///
/// # Errors
///
/// Returns an error if connection details cannot be fetched or `ssh` cannot
/// be spawned.
pub async fn run(app: &AppContext, args: &ForwardArgs) -> Result<ExitCode> {
    let api = app.api()?;
    let info = api
        .ssh_info(&args.name)
        .await
        .context("getting SSH info")?;
    let local = args.local_port.unwrap_or(args.remote_port);
    let argv = forward_args(&info, local, args.remote_port, args.connect.strict_hostkeys);
    if !args.connect.command {
        app.output.info(&format!(
            "Forwarding localhost:{local} -> {}:{} (Ctrl-C to stop)",
            args.name, args.remote_port
        ));
    }
    exec_or_print(app, "ssh", &argv, args.connect.command).await
}
