use crate::support::{add_post, folio, setup_test_dir, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Source links to `target` and shares a topic with it; `tech` shares a
/// technology; `unrelated` shares nothing.
fn setup_graph() -> (TempDir, String) {
    let dir = setup_test_dir();
    add_post(&dir, "Target", &["--topic", "web"]);
    add_post(&dir, "Tech", &["--tech", "rust"]);
    add_post(&dir, "Unrelated", &["--topic", "cooking"]);
    let source = add_post(
        &dir,
        "Source",
        &[
            "--body",
            "Start with [this](/blog/target)",
            "--topic",
            "web",
            "--tech",
            "rust",
        ],
    );
    (dir, source)
}

#[test]
fn test_related_json_shape_and_order() {
    let (dir, source) = setup_graph();

    let output = folio()
        .current_dir(dir.path())
        .args(["--format", "json", "related", &source])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["total"], 2);
    let related = json["relatedBlogs"].as_array().unwrap();
    assert_eq!(related[0]["blog"]["slug"], "target");
    assert_eq!(related[0]["blog"]["title"], "Target");
    assert_eq!(related[0]["score"], 7);
    assert_eq!(related[0]["sharedTags"][0], "web");
    assert_eq!(related[1]["blog"]["slug"], "tech");
    assert_eq!(related[1]["score"], 2);
}

#[test]
fn test_related_human() {
    let (dir, source) = setup_graph();

    folio()
        .current_dir(dir.path())
        .args(["related", &source])
        .assert()
        .success()
        .stdout(predicate::str::contains("target"))
        .stdout(predicate::str::contains("[web]"))
        .stdout(predicate::str::contains("unrelated").not());
}

#[test]
fn test_related_records() {
    let (dir, source) = setup_graph();

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "related", &source, "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "H folio=1 records=1 mode=related source={} total=1",
            source
        )))
        .stdout(predicate::str::contains("B 1 target score=7 shared=web \"Target\""));
}

#[test]
fn test_related_no_matches_is_empty() {
    let dir = setup_test_dir();
    let lonely = add_post(&dir, "Lonely", &["--topic", "solitude"]);

    let output = folio()
        .current_dir(dir.path())
        .args(["--format", "json", "related", &lonely])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["total"], 0);
    assert!(json["relatedBlogs"].as_array().unwrap().is_empty());
}

#[test]
fn test_related_invalid_id_exit_code_2() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "not-a-number"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"validation_error\""))
        .stderr(predicate::str::contains("\"field\":\"post id\""));
}

#[test]
fn test_related_limit_out_of_range_exit_code_2() {
    let (dir, source) = setup_graph();

    for limit in ["0", "-1", "21"] {
        folio()
            .current_dir(dir.path())
            .args(["related", &source, "--limit", limit])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid limit"));
    }
}

#[test]
fn test_related_unknown_post_exit_code_3() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["related", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("post not found: 99"));
}

#[test]
fn test_related_uses_configured_weights() {
    let (dir, source) = setup_graph();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[related.weights]\nlink = 1\ntopic = 1\ntechnology = 10\nhashtag = 1\n",
    )
    .unwrap();

    let output = folio()
        .current_dir(dir.path())
        .args(["--format", "json", "related", &source])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["relatedBlogs"][0]["blog"]["slug"], "tech");
    assert_eq!(json["relatedBlogs"][0]["score"], 10);
    assert_eq!(json["relatedBlogs"][1]["score"], 2);
}
