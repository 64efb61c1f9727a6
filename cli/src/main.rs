//! irons - egress-secured cloud sandboxes for AI agents

use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use irons_cli::cli::Cli;
use irons_cli::infra::{logging, signal};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cancel = CancellationToken::new();
    signal::cancel_on_signal(cancel.clone());

    match cli.run(cancel).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
