//! Property-based tests for the classifiers, the audit cursor and the status
//! convergence loop.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use chrono::{TimeZone, Utc};
use irons_common::AuditEvent;
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

use irons_cli::application::services::await_status::await_status;
use irons_cli::domain::{
    AuditCursor, ExpectedStates, PollError, PollOutcome, PollSettings, StatusClass, Verdict,
    classify_status, classify_verdict,
};

use crate::mocks::{FakeSandbox, RecordingReporter};

fn ready_or_running() -> ExpectedStates {
    ExpectedStates::new(["ready", "running"]).unwrap()
}

fn event(allowed: bool, verdict: Option<String>) -> AuditEvent {
    AuditEvent {
        kind: "egress".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        sandbox_name: "box".to_string(),
        host: "crates.io".to_string(),
        allowed,
        verdict,
        protocol: None,
        mode: None,
    }
}

// ============================================================================
// classify_status() property tests
// ============================================================================

proptest! {
    /// A failure signature anywhere in the text wins over everything else.
    #[test]
    fn prop_failure_signature_always_fails(
        prefix in "[a-zA-Z _]{0,12}",
        signature in prop::sample::select(vec!["error", "ERROR", "failed", "Failed"]),
        suffix in "[a-zA-Z _]{0,12}",
    ) {
        let status = format!("{prefix}{signature}{suffix}");
        prop_assert_eq!(classify_status(&status, &ready_or_running()), StatusClass::Failed);
    }

    /// An expected fragment with no failure signature always converges.
    #[test]
    fn prop_expected_fragment_converges(
        prefix in "[b-df-hj-z ]{0,8}",
        target in prop::sample::select(vec!["ready", "Running", "READY"]),
    ) {
        let status = format!("{prefix}{target}");
        prop_assert_eq!(classify_status(&status, &ready_or_running()), StatusClass::Converged);
    }

    /// Classification is case-insensitive.
    #[test]
    fn prop_classification_ignores_case(status in "[a-zA-Z_]{1,20}") {
        let expected = ready_or_running();
        prop_assert_eq!(
            classify_status(&status, &expected),
            classify_status(&status.to_uppercase(), &expected)
        );
    }
}

// ============================================================================
// classify_verdict() property tests
// ============================================================================

proptest! {
    /// Without an explicit verdict the boolean decides.
    #[test]
    fn prop_allowed_flag_decides_without_verdict(allowed in any::<bool>()) {
        let expected = if allowed { Verdict::Allowed } else { Verdict::Blocked };
        prop_assert_eq!(classify_verdict(&event(allowed, None)), expected);
    }

    /// Unknown verdict strings are never shown as allowed, whatever the flag says.
    #[test]
    fn prop_unknown_verdict_is_blocked(
        verdict in "[a-z]{3,10}",
        allowed in any::<bool>(),
    ) {
        prop_assume!(!matches!(verdict.as_str(), "allowed" | "allow" | "warn" | "warning"));
        prop_assert_eq!(classify_verdict(&event(allowed, Some(verdict))), Verdict::Blocked);
    }
}

// ============================================================================
// AuditCursor property tests
// ============================================================================

proptest! {
    /// A zero token keeps the cursor; any other token replaces it.
    #[test]
    fn prop_cursor_advance(current in any::<u64>(), token in any::<u64>()) {
        let next = AuditCursor::new(current).advance(token);
        if token == 0 {
            prop_assert_eq!(next.value(), current);
        } else {
            prop_assert_eq!(next.value(), token);
        }
    }
}

// ============================================================================
// await_status() property tests
// ============================================================================

/// One scripted status response and how the loop must treat it.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Transient(&'static str),
    Pending(&'static str),
    Converged(&'static str),
    Failed(&'static str),
}

impl Step {
    fn response(self) -> Result<&'static str, &'static str> {
        match self {
            Self::Transient(msg) => Err(msg),
            Self::Pending(s) | Self::Converged(s) | Self::Failed(s) => Ok(s),
        }
    }
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => prop::sample::select(vec!["connection reset", "404 not found", "502 bad gateway"])
            .prop_map(Step::Transient),
        4 => prop::sample::select(vec!["creating", "Starting", "provisioning"])
            .prop_map(Step::Pending),
        1 => prop::sample::select(vec!["ready", "Running"]).prop_map(Step::Converged),
        1 => prop::sample::select(vec!["error", "provision FAILED"]).prop_map(Step::Failed),
    ]
}

const INTERVAL: Duration = Duration::from_secs(2);

/// Drive `await_status` over `script` on a paused clock. The timeout allows
/// exactly one query per scripted step.
fn converge(
    script: &[Step],
) -> (Result<PollOutcome<irons_common::SandboxStatus>, PollError>, usize) {
    let api = FakeSandbox::new(script.iter().map(|s| s.response()).collect());
    let settings = PollSettings {
        interval: INTERVAL,
        timeout: INTERVAL * u32::try_from(script.len()).unwrap(),
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let result = runtime.block_on(await_status(
        &api,
        "box",
        &ready_or_running(),
        settings,
        &CancellationToken::new(),
        &RecordingReporter::default(),
    ));
    (result, api.status_calls())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The first converged or failed status decides the outcome, at exactly
    /// that query. Transient errors and pending statuses before it are
    /// retried; a script with neither times out after the last query.
    #[test]
    fn prop_first_decisive_status_wins(script in prop::collection::vec(step(), 1..12)) {
        let decisive = script
            .iter()
            .position(|s| matches!(s, Step::Converged(_) | Step::Failed(_)));
        let (result, calls) = converge(&script);

        match decisive.map(|i| (i, script[i])) {
            Some((i, Step::Converged(status))) => {
                match result {
                    Ok(PollOutcome::Completed(record)) => prop_assert_eq!(record.status, status),
                    other => return Err(TestCaseError::fail(format!("expected convergence, got {other:?}"))),
                }
                prop_assert_eq!(calls, i + 1);
            }
            Some((i, Step::Failed(status))) => {
                match result {
                    Err(PollError::TerminalStatus { status: got, .. }) => prop_assert_eq!(got, status),
                    other => return Err(TestCaseError::fail(format!("expected terminal status, got {other:?}"))),
                }
                prop_assert_eq!(calls, i + 1);
            }
            _ => {
                let err = result.expect_err("nothing decisive must time out");
                prop_assert!(err.is_timeout());
                prop_assert_eq!(calls, script.len());
            }
        }
    }

    /// Transient query failures alone never end the wait with anything but a
    /// timeout.
    #[test]
    fn prop_transient_failures_only_time_out(
        script in prop::collection::vec(
            prop::sample::select(vec!["connection reset", "404 not found"]).prop_map(Step::Transient),
            1..8,
        )
    ) {
        let (result, calls) = converge(&script);
        let err = result.expect_err("must time out");
        prop_assert!(err.is_timeout());
        prop_assert_eq!(calls, script.len());
    }
}
