//! Egress audit tailing with an opaque page cursor.

use anyhow::{Context, Result};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use irons_common::AuditPage;

use crate::application::ports::{AuditLog, AuditSink, ProgressReporter};
use crate::domain::{AuditCursor, PollOutcome, PollSettings};

/// Fetch the events strictly after `cursor`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn fetch_page(api: &impl AuditLog, name: &str, cursor: AuditCursor) -> Result<AuditPage> {
    api.audit_egress(name, cursor)
        .await
        .context("fetching egress audit log")
}

/// Hand every event in `page` to `sink` in order and return the next cursor.
fn emit_page(page: &AuditPage, cursor: AuditCursor, sink: &impl AuditSink) -> AuditCursor {
    for event in &page.events {
        sink.event(event);
    }
    let next = cursor.advance(page.page_token);
    tracing::debug!(events = page.events.len(), %cursor, %next, "audit page applied");
    next
}

/// Print the audit log for `name`, optionally following it.
///
/// Without `follow`, exactly one page is fetched from the beginning. With
/// `follow`, the log is re-fetched every `settings.interval` from the last
/// cursor until `cancel` fires; fetch failures during follow are reported as
/// warnings and do not end the loop.
///
/// # Errors
///
/// Returns an error only if the initial fetch fails.
pub async fn tail_audit(
    api: &impl AuditLog,
    sink: &impl AuditSink,
    name: &str,
    follow: bool,
    settings: PollSettings,
    cancel: &CancellationToken,
    reporter: &impl ProgressReporter,
) -> Result<PollOutcome<AuditCursor>> {
    let page = fetch_page(api, name, AuditCursor::START).await?;
    let mut cursor = emit_page(&page, AuditCursor::START, sink);

    if !follow {
        return Ok(PollOutcome::Completed(cursor));
    }

    let mut ticker = interval_at(Instant::now() + settings.interval, settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => return Ok(PollOutcome::Cancelled),
            _ = ticker.tick() => {}
        }

        match fetch_page(api, name, cursor).await {
            Ok(page) => cursor = emit_page(&page, cursor, sink),
            Err(err) => reporter.warn(&format!("{err:#}")),
        }
    }
}
