// tests/integration/output_formats.rs
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::SourceTree;

fn sample() -> SourceTree {
    let tree = SourceTree::new();
    tree.write_file("Top.java", "public class Top { private int x; }");
    tree.write_file("pkg/Util.java", "try { run(); } catch (Exception e) { }");
    tree.write_file("pkg/deep/Deep.java", "// catch\ncatch");
    tree
}

fn json(tree: &SourceTree, args: &[&str]) -> Value {
    let assert = tree.census().args(args).assert().success();
    serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON")
}

#[test]
fn json_document_shape() {
    let tree = sample();
    let doc = json(&tree, &[".", "--format", "json"]);

    let root = &doc["root"];
    assert_eq!(root["path"], ".");
    assert_eq!(root["report"]["files"], 3);
    assert_eq!(root["report"]["size"], 35 + 38 + 14);
    assert_eq!(root["report"]["tally"]["public"], 1);
    assert_eq!(root["report"]["tally"]["private"], 1);
    assert_eq!(root["report"]["tally"]["try"], 1);
    assert_eq!(root["report"]["tally"]["catch"], 2);

    let pkg = &root["children"][0];
    assert_eq!(pkg["path"], "./pkg");
    assert_eq!(pkg["report"]["files"], 2);
    assert_eq!(pkg["children"][0]["report"]["tally"]["catch"], 1);
    assert_eq!(doc["skipped"].as_array().map(Vec::len), Some(0));
}

#[test]
fn json_depth_prunes_children_but_keeps_totals() {
    let tree = sample();
    let doc = json(&tree, &[".", "--format", "json", "--depth", "0"]);
    assert_eq!(doc["root"]["children"].as_array().map(Vec::len), Some(0));
    assert_eq!(doc["root"]["report"]["files"], 3);
}

#[test]
fn text_depth_limits_printed_directories() {
    let tree = sample();
    let assert = tree.census().args([".", "--depth", "1"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let paths: Vec<_> = stdout.lines().step_by(2).map(str::trim_start).collect();
    assert_eq!(paths, [".", "./pkg"]);
}

#[test]
fn text_is_two_lines_per_directory() {
    let tree = sample();
    let assert = tree.census().arg(".").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.lines().skip(1).step_by(2).all(|line| line.contains(" bytes\t")));
}

#[cfg(unix)]
#[test]
fn json_survives_non_utf8_directory_names() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let tree = SourceTree::new();
    let odd = tree.path().join(OsStr::from_bytes(b"caf\xe9"));
    if std::fs::create_dir(&odd).is_err() {
        // filesystem rejects non-UTF-8 names
        return;
    }
    std::fs::write(odd.join("A.java"), "try").unwrap();

    let doc = json(&tree, &[".", "--format", "json"]);
    assert_eq!(doc["root"]["children"][0]["path"], "./caf\u{FFFD}");
    assert_eq!(doc["root"]["report"]["tally"]["try"], 1);
}
