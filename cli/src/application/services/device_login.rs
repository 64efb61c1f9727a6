//! Device-code login: request a pairing code, then poll until the operator
//! authorizes it in a browser.

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use irons_common::DeviceCodeResponse;

use crate::application::ports::{ConfigStore, DeviceAuth, ProgressReporter};
use crate::domain::{PollError, PollOutcome, PollSettings, next_device_step};

/// Start a device-code session.
///
/// # Errors
///
/// Returns an error if the console cannot issue a code.
pub async fn request_device_code(api: &impl DeviceAuth) -> Result<DeviceCodeResponse> {
    api.request_device_code()
        .await
        .context("requesting device code")
}

/// Poll `session` until it is authorized, expires, or the client deadline
/// passes. On authorization the token is written through `store` and polling
/// stops immediately.
///
/// The first poll happens one interval after the call. Poll request failures
/// are reported as warnings and retried at the same cadence.
///
/// # Errors
///
/// Returns a [`PollError`] (inside `anyhow`) for an expired code, an
/// unrecognized status, a missing token, or the client deadline, and a plain
/// error if the token cannot be saved.
pub async fn await_authorization(
    api: &impl DeviceAuth,
    store: &impl ConfigStore,
    session: &DeviceCodeResponse,
    settings: PollSettings,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<PollOutcome<()>> {
    let start = Instant::now();
    let deadline = start.checked_add(settings.timeout);
    // Server validity window, mapped onto the monotonic clock.
    let server_expiry = start.checked_add(
        (session.expires_at - Utc::now())
            .to_std()
            .unwrap_or_default(),
    );
    let mut expiry_warned = false;

    let mut ticker = interval_at(start + settings.interval, settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!("device authorization cancelled");
                return Ok(PollOutcome::Cancelled);
            }
            _ = ticker.tick() => {}
        }

        let now = Instant::now();
        if deadline.is_some_and(|deadline| now >= deadline) {
            return Err(PollError::AuthorizationTimedOut.into());
        }
        if !expiry_warned && server_expiry.is_some_and(|expiry| now >= expiry) {
            expiry_warned = true;
            reporter.warn("device code is past its expiry time, still waiting for the server");
        }

        let response = match api.poll_device(&session.code).await {
            Ok(response) => response,
            Err(err) => {
                reporter.warn(&format!("poll error (retrying): {err:#}"));
                continue;
            }
        };

        if let Some(token) = next_device_step(&response.status, response.token.as_deref())? {
            store.save_api_key(&token).context("saving token")?;
            tracing::debug!("device authorized, token saved");
            return Ok(PollOutcome::Completed(()));
        }
        tracing::debug!(status = %response.status, "authorization pending");
    }
}
