use predicates::prelude::*;

use std::fs;
use tempfile::TempDir;

/// Running with no arguments prints usage and succeeds
#[test]
fn test_no_arguments_prints_usage() {
    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_command() {
    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show Prettier formatting differences"))
        .stdout(predicate::str::contains("--no-color"));
}

/// Flags without any path are an argument error
#[test]
fn test_flags_without_paths() {
    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .arg("--no-color")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No file paths provided"));
}

#[test]
fn test_unknown_flag() {
    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .args(["--frobnicate", "a.js"])
        .assert()
        .code(1);
}

#[test]
fn test_glob_without_matches() {
    let temp_dir = TempDir::new().unwrap();
    let pattern = format!("{}/**/*.ts", temp_dir.path().display());

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .arg(&pattern)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn test_missing_file() {
    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .args(["--no-color", "/nonexistent/file.js"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error reading file /nonexistent/file.js"));
}

/// Stand-in for node: answers the resolveConfig request with no config and any
/// format request with a fixed text.
#[cfg(unix)]
fn fake_node(dir: &std::path::Path, formatted: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let reply = serde_json::json!({ "ok": true, "value": formatted }).to_string();
    let script = format!(
        "#!/bin/sh\ninput=$(cat)\ncase \"$input\" in\n  *resolveConfig*) printf '%s' '{{\"ok\":true,\"value\":null}}' ;;\n  *) printf '%s' '{reply}' ;;\nesac\n"
    );
    let path = dir.join("fake-node");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_file_needing_formatting() {
    let temp_dir = TempDir::new().unwrap();
    let node = fake_node(temp_dir.path(), "const a = 1;\n");
    let file = temp_dir.path().join("a.js");
    fs::write(&file, "const a=1;\n").unwrap();

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .env("PRETTIER_DIFFCHECK_NODE", &node)
        .args(["--no-color", file.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("needs formatting:"))
        .stdout(predicate::str::contains("-const a=1;"))
        .stdout(predicate::str::contains("+const a = 1;"))
        .stdout(predicate::str::contains("Needs formatting: 1"));
}

#[cfg(unix)]
#[test]
fn test_already_formatted_file() {
    let temp_dir = TempDir::new().unwrap();
    let node = fake_node(temp_dir.path(), "const a = 1;\n");
    let file = temp_dir.path().join("a.js");
    fs::write(&file, "const a = 1;\n").unwrap();

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .env("PRETTIER_DIFFCHECK_NODE", &node)
        .args(["--no-color", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 1"))
        .stdout(predicate::str::contains("Already formatted: 1"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[cfg(unix)]
#[test]
fn test_glob_batch_skips_ignored_directories() {
    let temp_dir = TempDir::new().unwrap();
    let node = fake_node(temp_dir.path(), "x\n");
    let src = temp_dir.path().join("src");
    let deps = temp_dir.path().join("node_modules/pkg");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&deps).unwrap();
    fs::write(src.join("a.js"), "x\n").unwrap();
    fs::write(src.join("b.js"), "x\n").unwrap();
    fs::write(deps.join("index.js"), "y\n").unwrap();

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .env("PRETTIER_DIFFCHECK_NODE", &node)
        .arg("--no-color")
        .arg(format!("{}/**/*.js", temp_dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 2"));
}

#[cfg(unix)]
#[test]
fn test_brace_pattern_matches_each_extension() {
    let temp_dir = TempDir::new().unwrap();
    let node = fake_node(temp_dir.path(), "x\n");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.js"), "x\n").unwrap();
    fs::write(src.join("b.ts"), "x\n").unwrap();
    fs::write(src.join("c.css"), "x\n").unwrap();

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .env("PRETTIER_DIFFCHECK_NODE", &node)
        .arg("--no-color")
        .arg(format!("{}/**/*.{{js,ts}}", temp_dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 2"));
}

/// A broken formatter is reported on stderr and counted as formatted
#[test]
fn test_engine_failure_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.js");
    fs::write(&file, "const a=1;\n").unwrap();

    assert_cmd::cargo_bin_cmd!("prettier-diffcheck")
        .env("PRETTIER_DIFFCHECK_NODE", "/nonexistent/node")
        .args(["--no-color", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already formatted: 1"))
        .stderr(predicate::str::contains("format_failed"));
}
