use crate::support::{add_post, folio, setup_test_dir, stdout_json};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_post_add_human() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["post", "add", "Hello World", "--topic", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created post 1 (hello-world)"));
}

#[test]
fn test_post_add_json_normalizes_tags() {
    let dir = setup_test_dir();

    let output = folio()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "post",
            "add",
            "Building With Rust",
            "--tech",
            "Rust",
            "--tech",
            "rust",
            "--hashtag",
            "#WebDev",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["slug"], "building-with-rust");
    let tags = json["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["kind"], "technology");
    assert_eq!(tags[0]["id"], "rust");
    assert_eq!(tags[1]["kind"], "hashtag");
    assert_eq!(tags[1]["id"], "webdev");
}

#[test]
fn test_post_add_duplicate_slug_exit_code_3() {
    let dir = setup_test_dir();
    add_post(&dir, "Same Title", &[]);

    folio()
        .current_dir(dir.path())
        .args(["post", "add", "Same Title"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_post_add_invalid_slug_exit_code_2() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["post", "add", "Title", "--slug", "Not A Slug!"])
        .assert()
        .code(2);
}

#[test]
fn test_post_add_body_from_file() {
    let dir = setup_test_dir();
    let body_path = dir.path().join("body.md");
    fs::write(&body_path, "Follow-up to /blog/intro").unwrap();

    let id = add_post(&dir, "Part Two", &["--body-file", body_path.to_str().unwrap()]);

    folio()
        .current_dir(dir.path())
        .args(["post", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Follow-up to /blog/intro"));
}

#[test]
fn test_post_add_body_from_stdin() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["post", "add", "Piped", "--stdin"])
        .write_stdin("piped body text")
        .assert()
        .success();

    folio()
        .current_dir(dir.path())
        .args(["post", "show", "piped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped body text"));
}

#[test]
fn test_post_list_and_filter() {
    let dir = setup_test_dir();
    add_post(&dir, "Rust Notes", &["--tech", "rust"]);
    add_post(&dir, "Go Notes", &["--tech", "go"]);

    folio()
        .current_dir(dir.path())
        .args(["post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-notes"))
        .stdout(predicate::str::contains("go-notes"));

    folio()
        .current_dir(dir.path())
        .args(["post", "list", "--tech", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-notes"))
        .stdout(predicate::str::contains("go-notes").not());
}

#[test]
fn test_post_list_records() {
    let dir = setup_test_dir();
    add_post(&dir, "Say \"Hi\"", &["--topic", "web"]);

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H folio=1 records=1 mode=post.list total=1"))
        .stdout(predicate::str::contains(
            "B 1 say-hi topics=web tech=- hashtags=- \"Say \\\"Hi\\\"\"",
        ));
}

#[test]
fn test_post_show_missing_exit_code_3() {
    let dir = setup_test_dir();

    folio()
        .current_dir(dir.path())
        .args(["post", "show", "no-such-post"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("post not found"));
}

#[test]
fn test_post_show_links() {
    let dir = setup_test_dir();
    let intro = add_post(&dir, "Intro", &[]);
    let sequel = add_post(
        &dir,
        "Sequel",
        &["--body", "After [the intro](/blog/intro) see /blog/missing-piece"],
    );

    let output = folio()
        .current_dir(dir.path())
        .args(["--format", "json", "post", "show", &sequel, "--links"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["links"]["outgoing"][0]["id"].to_string(), intro);
    assert_eq!(json["links"]["unresolved"][0], "missing-piece");

    folio()
        .current_dir(dir.path())
        .args(["post", "show", "intro", "--links"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("<- {} (sequel)", sequel)));
}

#[test]
fn test_post_tag_and_untag() {
    let dir = setup_test_dir();
    let id = add_post(&dir, "Tagged", &["--topic", "web"]);

    folio()
        .current_dir(dir.path())
        .args(["post", "tag", &id, "--hashtag", "til", "--topic", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 tag(s)"));

    folio()
        .current_dir(dir.path())
        .args(["post", "untag", "tagged", "--topic", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 tag(s)"));

    folio()
        .current_dir(dir.path())
        .args(["--format", "records", "post", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("topics=- tech=- hashtags=til"));
}

#[test]
fn test_post_tag_requires_a_tag() {
    let dir = setup_test_dir();
    let id = add_post(&dir, "Bare", &[]);

    folio()
        .current_dir(dir.path())
        .args(["post", "tag", &id])
        .assert()
        .code(2);
}

#[test]
fn test_post_remove() {
    let dir = setup_test_dir();
    let id = add_post(&dir, "Short Lived", &["--topic", "misc"]);

    folio()
        .current_dir(dir.path())
        .args(["post", "remove", &id])
        .assert()
        .success();

    folio()
        .current_dir(dir.path())
        .args(["post", "show", &id])
        .assert()
        .code(3);

    folio()
        .current_dir(dir.path())
        .args(["tags", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}
