// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{SourceTree, stats_line};

fn padded(path: &str) -> String {
    format!("{path:>31}")
}

fn report_lines(tree: &SourceTree, args: &[&str]) -> Vec<String> {
    let assert = tree.census().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap().lines().map(str::to_owned).collect()
}

#[test]
fn single_file_scenario() {
    let tree = SourceTree::new();
    tree.write_file("X.java", "public class X {}");

    let lines = report_lines(&tree, &["."]);
    assert_eq!(lines, [padded("."), stats_line(17, 1, 0, 0, 0)]);
}

#[test]
fn comments_and_literals_are_ignored() {
    let tree = SourceTree::new();
    tree.write_file("B.java", "// public private\npublic");
    tree.write_file("C.java", "String s = \"public private\";");
    tree.write_file("D.java", "/* try { */ catch");
    tree.write_file("E.java", "\"a\\\"try\\\"b\" try");

    let lines = report_lines(&tree, &["."]);
    let bytes = 24 + 28 + 17 + 15;
    assert_eq!(lines, [padded("."), stats_line(bytes, 1, 0, 1, 1)]);
}

#[test]
fn nested_directories_print_parents_first_in_sorted_order() {
    let tree = SourceTree::new();
    tree.write_file("Root.java", "public");
    tree.write_file("b/B.java", "private");
    tree.write_file("a/A.java", "try");
    tree.write_file("a/inner/I.java", "catch");
    tree.mkdir("empty");

    let lines = report_lines(&tree, &["."]);
    assert_eq!(
        lines,
        [
            padded("."),
            stats_line(6 + 7 + 3 + 5, 1, 1, 1, 1),
            padded("./a"),
            stats_line(3 + 5, 0, 0, 1, 1),
            padded("./a/inner"),
            stats_line(5, 0, 0, 0, 1),
            padded("./b"),
            stats_line(7, 0, 1, 0, 0),
            padded("./empty"),
            stats_line(0, 0, 0, 0, 0),
        ]
    );
}

#[test]
fn only_matching_extension_is_counted() {
    let tree = SourceTree::new();
    tree.write_file("Main.java", "public");
    tree.write_file("notes.txt", "public private try catch");
    tree.write_file("Main.JAVA", "public");
    tree.write_file("Main.java.bak", "public");

    let lines = report_lines(&tree, &["."]);
    assert_eq!(lines[1], stats_line(6, 1, 0, 0, 0));
}

#[test]
fn custom_extension() {
    let tree = SourceTree::new();
    tree.write_file("Main.java", "public");
    tree.write_file("Program.cs", "private try");

    let lines = report_lines(&tree, &[".", "--ext", ".cs"]);
    assert_eq!(lines[1], stats_line(11, 0, 1, 1, 0));
}

#[test]
fn prefix_matches_are_counted() {
    let tree = SourceTree::new();
    tree.write_file("P.java", "publicly trying");

    let lines = report_lines(&tree, &["."]);
    assert_eq!(lines[1], stats_line(15, 1, 0, 1, 0));
}

#[test]
fn non_utf8_sources_are_scanned() {
    let tree = SourceTree::new();
    let path = tree.path().join("Latin.java");
    std::fs::write(&path, b"/* caf\xe9 */ public").unwrap();

    let lines = report_lines(&tree, &["."]);
    assert_eq!(lines[1], stats_line(17, 1, 0, 0, 0));
}

#[test]
fn sequential_and_parallel_runs_agree() {
    let tree = SourceTree::new();
    for dir in ["a", "b", "c", "a/x", "a/y"] {
        tree.write_file(&format!("{dir}/One.java"), "public try { } catch (E e) { }");
        tree.write_file(&format!("{dir}/Two.java"), "private /* public */ \"try\"");
    }

    let sequential = report_lines(&tree, &[".", "--jobs", "1"]);
    let parallel = report_lines(&tree, &[".", "--jobs", "4"]);
    assert_eq!(sequential, parallel);
}

#[cfg(unix)]
#[test]
fn unreadable_file_aborts_by_default() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.write_file("Ok.java", "public");
    let locked = tree.write_file("Locked.java", "private");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&locked).is_ok() {
        // running as root; permissions are not enforced
        return;
    }

    tree.census()
        .arg(".")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Locked.java"));
}

#[cfg(unix)]
#[test]
fn keep_going_skips_unreadable_files() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.write_file("Ok.java", "public");
    let locked = tree.write_file("Locked.java", "private");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&locked).is_ok() {
        return;
    }

    tree.census()
        .args([".", "--keep-going"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(stats_line(6, 1, 0, 0, 0)))
        .stderr(predicate::str::contains("warning: skipped 1 unreadable path(s)"));
}

#[cfg(unix)]
#[test]
fn keep_going_skips_unlistable_directories() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.write_file("Top.java", "public");
    tree.write_file("a/A.java", "try");
    tree.write_file("locked/L.java", "private catch");
    let locked = tree.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read_dir(&locked).is_ok() {
        return;
    }

    let assert = tree.census().args([".", "--keep-going"]).assert().code(2);
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<_> = stdout.lines().map(str::to_owned).collect();
    assert_eq!(
        lines,
        [
            padded("."),
            stats_line(6 + 3, 1, 0, 1, 0),
            padded("./a"),
            stats_line(3, 0, 0, 1, 0),
            padded("./locked"),
            stats_line(0, 0, 0, 0, 0),
        ]
    );
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("warning: skipped 1 unreadable path(s)"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn unlistable_directory_aborts_by_default() {
    use std::os::unix::fs::PermissionsExt;

    let tree = SourceTree::new();
    tree.write_file("Top.java", "public");
    let locked = tree.mkdir("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read_dir(&locked).is_ok() {
        return;
    }

    let assert = tree.census().arg(".").assert().code(1).stdout(predicate::str::is_empty());
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("locked"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn linked_directories_are_counted() {
    use std::os::unix::fs::symlink;

    let outside = tempfile::tempdir().unwrap();
    std::fs::write(outside.path().join("A.java"), "public").unwrap();

    let tree = SourceTree::new();
    tree.write_file("B.java", "try");
    symlink(outside.path(), tree.path().join("linked")).unwrap();

    let lines = report_lines(&tree, &["."]);
    assert_eq!(
        lines,
        [padded("."), stats_line(3 + 6, 1, 0, 1, 0), padded("./linked"), stats_line(6, 1, 0, 0, 0)]
    );
}

#[cfg(unix)]
#[test]
fn link_cycles_terminate() {
    use std::os::unix::fs::symlink;

    let tree = SourceTree::new();
    tree.write_file("a/A.java", "public");
    tree.write_file("b/B.java", "catch");
    symlink(tree.path().join("b"), tree.path().join("a").join("to_b")).unwrap();
    symlink(tree.path().join("a"), tree.path().join("b").join("to_a")).unwrap();
    symlink(tree.path(), tree.path().join("a").join("home")).unwrap();

    let assert = tree.census().args([".", "--format", "json"]).assert().success();
    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let a = &doc["root"]["children"][0];
    assert_eq!(a["path"], "./a");
    // a itself, then b reached through a/to_b
    assert_eq!(a["report"]["tally"]["public"], 1);
    assert_eq!(a["report"]["tally"]["catch"], 1);
    // ./a/to_b/to_a leads back to ./a and stays empty
    let to_b = a["children"].as_array().unwrap().iter().find(|c| c["path"] == "./a/to_b").unwrap();
    assert_eq!(to_b["children"][0]["report"]["files"], 0);
}
