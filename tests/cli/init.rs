use crate::support::folio;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    folio()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized folio store"));

    assert!(dir.path().join(".folio/config.toml").exists());
    assert!(dir.path().join(".folio/folio.db").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    folio().current_dir(dir.path()).arg("init").assert().success();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[related]\ndefault_limit = 2\n",
    )
    .unwrap();
    folio().current_dir(dir.path()).arg("init").assert().success();

    let config = fs::read_to_string(dir.path().join(".folio/config.toml")).unwrap();
    assert!(config.contains("default_limit = 2"));
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();

    folio()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));
}

#[test]
fn test_init_records() {
    let dir = tempdir().unwrap();

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H folio=1 records=1 mode=init"));
}

#[test]
fn test_init_explicit_store_path() {
    let dir = tempdir().unwrap();

    folio()
        .current_dir(dir.path())
        .args(["--store", "content/store", "init"])
        .assert()
        .success();
    assert!(dir.path().join("content/store/folio.db").exists());

    folio()
        .current_dir(dir.path())
        .args(["--store", "content/store", "post", "list"])
        .assert()
        .success();
}

#[test]
fn test_root_flag_discovers_store() {
    let dir = tempdir().unwrap();
    folio().current_dir(dir.path()).arg("init").assert().success();
    let nested = dir.path().join("drafts/2024");
    fs::create_dir_all(&nested).unwrap();

    folio()
        .arg("--root")
        .arg(&nested)
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));
}
