//! `irons login`: device-code authorization.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;

use irons_common::DeviceCodeResponse;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, ProgressReporter};
use crate::application::services::device_login::{await_authorization, request_device_code};
use crate::domain::{PollOutcome, PollSettings};
use crate::infra::api::HttpApiClient;
use crate::output::TerminalReporter;
use crate::output::progress::SpinnerReporter;

/// Run `irons login`.
///
/// # Errors
///
/// Returns an error if the code cannot be requested, the code expires, the
/// wait times out, or the token cannot be saved.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let ctx = &app.output;
    let console = app.console()?;

    ctx.info("Requesting device code...");
    let session = request_device_code(&console).await?;

    println!();
    println!("  Open the following URL in your browser to authenticate:");
    println!();
    println!("    {}", session.verification_uri);
    println!();
    println!("  Paste in the following device code: {}", session.code);
    println!();
    println!(
        "  This code expires at {}.",
        session.expires_at.with_timezone(&Local).to_rfc2822()
    );
    println!();

    let outcome = if ctx.show_progress() {
        let reporter = SpinnerReporter::new("Waiting for authorization...");
        wait(app, &console, &session, &reporter).await?
    } else {
        let reporter = TerminalReporter::new(ctx);
        reporter.step("Waiting for authorization...");
        wait(app, &console, &session, &reporter).await?
    };

    match outcome {
        PollOutcome::Completed(()) => {
            let path = app.config.path()?;
            ctx.success(&format!(
                "Authorized! Your API token has been saved to {}",
                path.display()
            ));
        }
        PollOutcome::Cancelled => {
            eprintln!();
            ctx.warn("Login cancelled.");
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn wait(
    app: &AppContext,
    console: &HttpApiClient,
    session: &DeviceCodeResponse,
    reporter: &impl ProgressReporter,
) -> Result<PollOutcome<()>> {
    await_authorization(
        console,
        &app.config,
        session,
        PollSettings::DEVICE,
        &app.cancel,
        reporter,
    )
    .await
}
