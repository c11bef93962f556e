use crate::support::{folio, setup_test_dir, stdout_json};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_login_attempts_until_rate_limited() {
    let dir = setup_test_dir();

    for remaining in (0..5).rev() {
        let output = folio()
            .current_dir(dir.path())
            .args(["--format", "json", "login", "attempt", "203.0.113.9"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout_json(&output)["remaining"], remaining);
    }

    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "203.0.113.9"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("too many attempts for 203.0.113.9"));

    // Other clients have their own window
    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "198.51.100.1"])
        .assert()
        .success();
}

#[test]
fn test_login_rate_limited_json_envelope() {
    let dir = setup_test_dir();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[rate_limit]\nmax_attempts = 1\nwindow_secs = 600\n",
    )
    .unwrap();

    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "admin"])
        .assert()
        .success();

    folio()
        .current_dir(dir.path())
        .args(["--format", "json", "login", "attempt", "admin"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("\"type\":\"rate_limited\""))
        .stderr(predicate::str::contains("\"retry_after_secs\""));
}

#[test]
fn test_login_reset_clears_window() {
    let dir = setup_test_dir();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[rate_limit]\nmax_attempts = 1\n",
    )
    .unwrap();

    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "admin"])
        .assert()
        .success();
    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "admin"])
        .assert()
        .code(4);

    folio()
        .current_dir(dir.path())
        .args(["login", "reset", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared attempts for admin"));

    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "admin"])
        .assert()
        .success();
}

#[test]
fn test_login_sweep_keeps_live_windows() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["login", "attempt", "admin"])
        .assert()
        .success();

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "login", "sweep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=login.sweep removed=0"));
}
