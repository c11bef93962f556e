use crate::support::folio;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: folio"))
        .stdout(predicate::str::contains("related"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_version_flag() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    folio()
        .assert()
        .success()
        .stdout(predicate::str::contains("folio --help"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    folio()
        .args(["--format", "invalid", "post", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    folio()
        .args(["--format", "json", "post", "list", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_store_exit_code_3() {
    let dir = tempdir().unwrap();
    folio()
        .current_dir(dir.path())
        .args(["post", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_missing_store_json_envelope() {
    let dir = tempdir().unwrap();
    folio()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"store_not_found\""));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    folio()
        .current_dir(dir.path())
        .args(["--quiet", "post", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
