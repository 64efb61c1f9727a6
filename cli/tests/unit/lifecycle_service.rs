//! Lifecycle use-cases: mutation followed by a convergence wait.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::time::Duration;

use irons_common::CreateRequest;
use tokio_util::sync::CancellationToken;

use irons_cli::application::services::lifecycle::{self, LifecycleOutcome};
use irons_cli::domain::{PollError, PollSettings};

use crate::mocks::{FakeSandbox, RecordingReporter};

fn request(name: &str) -> CreateRequest {
    CreateRequest {
        name: name.to_string(),
        public_key: "ssh-ed25519 AAAA test".to_string(),
        secrets: HashMap::new(),
    }
}

#[tokio::test(start_paused = true)]
async fn create_waits_until_running() {
    let api = FakeSandbox::new(vec![Ok("creating"), Ok("booting"), Ok("Running")]);
    let reporter = RecordingReporter::default();
    let (created, outcome) = lifecycle::create(
        &api,
        &request("box"),
        Some(PollSettings::STATUS),
        &CancellationToken::new(),
        &reporter,
    )
    .await
    .unwrap();

    assert_eq!(created.name, "box");
    assert!(matches!(outcome, LifecycleOutcome::Settled(ref s) if s.status == "Running"));
    assert_eq!(api.status_calls(), 3);
    assert_eq!(*api.mutations.borrow(), ["create box"]);
    assert!(
        reporter
            .steps
            .borrow()
            .iter()
            .any(|s| s == "Waiting for sandbox 'box' to be ready or running")
    );
}

#[tokio::test(start_paused = true)]
async fn no_wait_skips_polling() {
    let api = FakeSandbox::new(vec![Ok("creating")]);
    let outcome = lifecycle::start(
        &api,
        "box",
        None,
        &CancellationToken::new(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap();

    assert!(matches!(outcome, LifecycleOutcome::Submitted));
    assert_eq!(api.status_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn stop_waits_for_stopped_not_ready() {
    let api = FakeSandbox::new(vec![Ok("running"), Ok("stopping"), Ok("stopped")]);
    let outcome = lifecycle::stop(
        &api,
        "box",
        Some(PollSettings::STATUS),
        &CancellationToken::new(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap();

    assert!(matches!(outcome, LifecycleOutcome::Settled(ref s) if s.status == "stopped"));
    assert_eq!(api.status_calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn failed_status_is_terminal() {
    let api = FakeSandbox::new(vec![Ok("starting"), Ok("boot_failed")]);
    let err = lifecycle::start(
        &api,
        "box",
        Some(PollSettings::STATUS),
        &CancellationToken::new(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap_err();

    let poll = err.downcast_ref::<PollError>().expect("typed poll error");
    assert!(poll.is_terminal_remote());
    assert!(err.to_string().contains("boot_failed"));
    assert_eq!(api.status_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn wait_times_out_with_flag_timeout() {
    let api = FakeSandbox::new(vec![Ok("creating")]);
    let settings = PollSettings::STATUS.with_timeout(Duration::from_secs(6));
    let err = lifecycle::start(
        &api,
        "box",
        Some(settings),
        &CancellationToken::new(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap_err();

    let poll = err.downcast_ref::<PollError>().expect("typed poll error");
    assert!(poll.is_timeout());
    // t = 0, 2, 4
    assert_eq!(api.status_calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn rejected_mutation_skips_wait() {
    let api = FakeSandbox::rejecting();
    let err = lifecycle::create(
        &api,
        &request("box"),
        Some(PollSettings::STATUS),
        &CancellationToken::new(),
        &RecordingReporter::default(),
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("creating sandbox: API error: quota exceeded"));
    assert_eq!(api.status_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_wait_is_not_an_error() {
    let api = FakeSandbox::new(vec![Ok("creating")]);
    let cancel = CancellationToken::new();
    cancel.cancel();
    let outcome = lifecycle::start(
        &api,
        "box",
        Some(PollSettings::STATUS),
        &cancel,
        &RecordingReporter::default(),
    )
    .await
    .unwrap();

    assert!(matches!(outcome, LifecycleOutcome::Cancelled));
}
