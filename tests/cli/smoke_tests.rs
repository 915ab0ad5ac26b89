use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::SourceTree;

#[test]
fn shows_help() {
    SourceTree::new()
        .census()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword_census"))
        .stdout(predicate::str::contains("--keep-going"));
}

#[test]
fn shows_version() {
    SourceTree::new()
        .census()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_a_root_path() {
    SourceTree::new().census().assert().failure();
}

#[test]
fn missing_root_fails_without_report() {
    SourceTree::new()
        .census()
        .arg("no_such_dir")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no_such_dir"));
}

#[test]
fn file_as_root_is_invalid() {
    let tree = SourceTree::new();
    tree.write_file("Main.java", "public class Main {}");
    tree.census()
        .arg("Main.java")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not an existing directory"));
}

#[test]
fn zero_jobs_is_rejected() {
    SourceTree::new()
        .census()
        .args([".", "--jobs", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--jobs"));
}

#[test]
fn empty_extension_is_rejected() {
    SourceTree::new()
        .census()
        .args([".", "--ext", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--ext"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    SourceTree::new().census().args([".", "--format", "xml"]).assert().code(2).stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let tree = SourceTree::new();
    tree.write_file("A.java", "public");
    tree.census()
        .args([".", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("census complete").not())
        .stderr(predicate::str::contains("census complete"));
}
