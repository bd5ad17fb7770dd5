//! CLI end-to-end tests that invoke the compiled `mr` binary.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SOURCE: &str = "int a;\n//!mr {test\nold();\n//!mr }test\nint b;\n";

fn mr() -> Command {
    let mut cmd = Command::cargo_bin("mr").unwrap();
    cmd.env_remove("MR_PREFIX").env_remove("RUST_LOG");
    cmd
}

fn fixture(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("source.c");
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_help_exits_zero() {
    mr().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replace"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_replace_prints_result() {
    let (_temp, path) = fixture(SOURCE);

    mr().arg("replace")
        .arg(&path)
        .args(["--set", "test=int foo(void) { return 42; }"])
        .assert()
        .success()
        .stdout("int a;\n//!mr {test\nint foo(void) { return 42; }\n//!mr }test\nint b;\n");

    // Printing leaves the file alone
    assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
}

#[test]
fn test_replace_write_updates_file() {
    let (_temp, path) = fixture(SOURCE);

    mr().arg("replace")
        .arg(&path)
        .args(["-s", "test=new();", "--write"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Updated 1 marker(s)"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "int a;\n//!mr {test\nnew();\n//!mr }test\nint b;\n"
    );
}

#[test]
fn test_replace_from_file() {
    let (temp, path) = fixture("//!mr {gen\r\n//!mr }gen\r\n");
    let content_path = temp.path().join("content.txt");
    fs::write(&content_path, "a\r\nb").unwrap();

    mr().arg("replace")
        .arg(&path)
        .arg("--set")
        .arg(format!("gen=@{}", content_path.display()))
        .arg("--write")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "//!mr {gen\r\na\r\nb\r\n//!mr }gen\r\n"
    );
}

#[test]
fn test_replace_multiple_markers() {
    let (_temp, path) = fixture("//!mr {a\n//!mr }a\n//!mr {b\nx\n//!mr }b\n");

    mr().arg("replace")
        .arg(&path)
        .args(["-s", "a=1", "-s", "b=2"])
        .assert()
        .success()
        .stdout("//!mr {a\n1\n//!mr }a\n//!mr {b\n2\n//!mr }b\n");
}

#[test]
fn test_failed_replace_keeps_file() {
    let (_temp, path) = fixture(SOURCE);

    mr().arg("replace")
        .arg(&path)
        .args(["-s", "test=x", "-s", "missing=y", "--write"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Marker 'missing' not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), SOURCE);
}

#[test]
fn test_unterminated_marker_error() {
    let (_temp, path) = fixture("//!mr {test\nbody\n");

    mr().arg("replace")
        .arg(&path)
        .args(["-s", "test=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please add '//!mr }'"));
}

#[test]
fn test_custom_prefix_flag_and_env() {
    let (_temp, path) = fixture("# mr {v\nold\n# mr }v\n");

    mr().args(["--prefix", "# mr ", "show"])
        .arg(&path)
        .arg("v")
        .assert()
        .success()
        .stdout("old\n");

    mr().env("MR_PREFIX", "# mr ")
        .arg("show")
        .arg(&path)
        .arg("v")
        .assert()
        .success()
        .stdout("old\n");
}

#[test]
fn test_prefix_from_config_file() {
    let (temp, path) = fixture("-- mr {v\nold\n-- mr }v\n");
    let config = temp.path().join("mr.toml");
    fs::write(&config, "prefix = \"-- mr \"\n").unwrap();

    mr().arg("--config")
        .arg(&config)
        .arg("replace")
        .arg(&path)
        .args(["-s", "v=new"])
        .assert()
        .success()
        .stdout("-- mr {v\nnew\n-- mr }v\n");
}

#[test]
fn test_show_empty_marker_prints_nothing() {
    let (_temp, path) = fixture("//!mr {e\n//!mr }e\n");

    mr().arg("show")
        .arg(&path)
        .arg("e")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_show_single_empty_line_prints_terminator() {
    let (_temp, path) = fixture("//!mr {e\r\n\r\n//!mr }e\r\n");

    mr().arg("show")
        .arg(&path)
        .arg("e")
        .assert()
        .success()
        .stdout("\r\n");
}

#[test]
fn test_missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.c");

    mr().arg("show")
        .arg(&path)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.c"));
}

#[test]
fn test_bad_assignment_is_usage_error() {
    let (_temp, path) = fixture(SOURCE);

    mr().arg("replace")
        .arg(&path)
        .args(["-s", "no-equals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}
