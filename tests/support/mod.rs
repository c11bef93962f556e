use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for folio
pub fn folio() -> Command {
    cargo_bin_cmd!("folio")
}

/// Setup a test store and return the directory
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    folio()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Extract the post id printed by `post add --quiet`
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Add a post and return its id.
///
/// `args` are extra flags such as `["--topic", "web", "--body", "..."]`.
pub fn add_post(dir: &TempDir, title: &str, args: &[&str]) -> String {
    let output = folio()
        .current_dir(dir.path())
        .args(["--quiet", "post", "add", title])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "post add failed: {:?}", output);
    extract_id(&output)
}

/// Parse stdout of a JSON command
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
