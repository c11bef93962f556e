use crate::support::{add_post, folio, setup_test_dir, stdout_json};
use predicates::prelude::*;

#[test]
fn test_tags_list_counts() {
    let dir = setup_test_dir();
    add_post(&dir, "One", &["--topic", "web", "--tech", "rust"]);
    add_post(&dir, "Two", &["--topic", "web"]);

    let output = folio()
        .current_dir(dir.path())
        .args(["--format", "json", "tags", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let tags = json.as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["kind"], "topic");
    assert_eq!(tags[0]["id"], "web");
    assert_eq!(tags[0]["count"], 2);
}

#[test]
fn test_tags_list_by_kind() {
    let dir = setup_test_dir();
    add_post(&dir, "One", &["--topic", "web", "--tech", "rust"]);

    folio()
        .current_dir(dir.path())
        .args(["tags", "list", "--kind", "technology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust"))
        .stdout(predicate::str::contains("web").not());
}

#[test]
fn test_tags_list_records() {
    let dir = setup_test_dir();
    add_post(&dir, "One", &["--hashtag", "#TIL"]);

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "tags", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("T hashtag til count=1 \"TIL\""));
}

#[test]
fn test_tags_list_invalid_kind() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["tags", "list", "--kind", "category"])
        .assert()
        .code(2);
}
