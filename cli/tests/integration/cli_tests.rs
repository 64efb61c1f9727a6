//! Integration tests for the irons command surface

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn irons() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("irons"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    irons().assert().code(2).stderr(predicate::str::contains(
        "Spin up egress-secured cloud VMs for AI agents",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    let assert = irons().arg("--help").assert().success();
    for command in [
        "create", "start", "stop", "destroy", "status", "list", "egress", "ssh", "scp",
        "forward", "login", "audit",
    ] {
        assert_cmd_contains(&assert, command);
    }
}

fn assert_cmd_contains(assert: &assert_cmd::assert::Assert, word: &str) {
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(word), "help is missing {word}:\n{stdout}");
}

#[test]
fn test_cli_version_flag_shows_version() {
    irons()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("irons"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    irons()
        .arg("teleport")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Argument validation tests ---

#[test]
fn test_create_requires_name() {
    irons()
        .arg("create")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_forward_requires_remote_port() {
    irons()
        .args(["forward", "box"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--remote-port"));
}

#[test]
fn test_forward_rejects_port_zero() {
    irons()
        .args(["forward", "box", "--remote-port", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_ssh_help_documents_flags() {
    irons()
        .args(["ssh", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--command"))
        .stdout(predicate::str::contains("--strict-hostkeys"));
}

#[test]
fn test_audit_egress_help_documents_follow() {
    irons()
        .args(["audit", "egress", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--follow"));
}

#[test]
fn test_scp_with_two_local_paths_is_rejected_before_any_request() {
    irons()
        .env("IRONS_API_KEY", "test-key")
        .env("IRONS_API_URL", "http://127.0.0.1:9")
        .args(["scp", "./a", "./b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "one of SRC or DST must be a sandbox path",
        ));
}

#[test]
fn test_scp_with_two_remote_paths_is_rejected() {
    irons()
        .env("IRONS_API_KEY", "test-key")
        .args(["scp", "box:/a", "other:/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one of SRC or DST"));
}
