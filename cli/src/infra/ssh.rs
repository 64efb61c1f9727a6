//! Runs `ssh` and `scp` with the terminal attached.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

/// Run `program` with inherited stdio and wait for it to exit.
///
/// The child is killed if the returned future is dropped.
///
/// # Errors
///
/// Returns an error if the program cannot be spawned.
pub async fn run_interactive(program: &str, args: &[String]) -> Result<ExitStatus> {
    tracing::debug!(program, ?args, "spawning");
    let mut child = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to spawn {program}; is it installed and on PATH?"))?;
    child
        .wait()
        .await
        .with_context(|| format!("waiting for {program}"))
}

/// Exit code to propagate from a finished child. Signals map to 1.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
