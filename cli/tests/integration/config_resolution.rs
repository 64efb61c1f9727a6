//! API key resolution across flag, environment and config file.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Binary with an isolated config home and no inherited credentials.
fn irons_in(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("irons"));
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("IRONS_API_KEY")
        .env_remove("IRONS_CONFIG")
        // Discard port: any request fails fast without leaving the host.
        .env("IRONS_API_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
#[serial]
fn test_missing_api_key_is_reported() {
    let home = TempDir::new().unwrap();
    irons_in(&home)
        .args(["status", "box"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "API key is required. Run `irons login`, set --api-key, or set IRONS_API_KEY.",
        ));
}

#[test]
#[serial]
fn test_stored_key_is_used_when_no_flag() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("irons");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yml"), "api_key: stored-key\n").unwrap();

    // Gets past key resolution and fails on the unreachable API instead.
    irons_in(&home)
        .args(["status", "box"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required").not())
        .stderr(predicate::str::contains("getting sandbox status"));
}

#[test]
#[serial]
fn test_irons_config_overrides_location() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.yml");
    std::fs::write(&custom, "api_key: custom-key\n").unwrap();

    irons_in(&home)
        .env("IRONS_CONFIG", &custom)
        .args(["list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required").not())
        .stderr(predicate::str::contains("listing sandboxes"));
}

#[test]
#[serial]
fn test_malformed_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("irons");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yml"), "api_key: [unclosed\n").unwrap();

    irons_in(&home)
        .args(["list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
#[serial]
fn test_login_does_not_require_api_key() {
    let home = TempDir::new().unwrap();
    irons_in(&home)
        .env("IRONS_CONSOLE_URL", "http://127.0.0.1:9")
        .arg("login")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required").not())
        .stderr(predicate::str::contains("requesting device code"));
}
