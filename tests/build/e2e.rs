//! End-to-end tests: the `enumtab` binary on a real directory.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

use crate::common::{write_package, DAY_IN, DAY_OUT, NUM_IN};

fn enumtab(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enumtab"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run enumtab")
}

#[test]
fn test_generate_writes_file_and_exits_zero() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", DAY_IN);
    let dir = tmp.path().to_str().unwrap();

    let out = enumtab(&["generate", "--type", "Day", dir]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = fs::read_to_string(tmp.path().join("day_enumslice.go")).unwrap();
    let header = format!(
        "// Code generated by \"enumtab generate --type Day {}\"; DO NOT EDIT.\n\npackage test\n",
        dir
    );
    assert_eq!(written, format!("{}{}", header, DAY_OUT));
}

#[test]
fn test_dry_run_prints_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", DAY_IN);

    let out = enumtab(&["generate", "--type=Day", "--dry-run", tmp.path().to_str().unwrap()]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).ends_with(DAY_OUT));
    assert!(!tmp.path().join("day_enumslice.go").exists());
}

#[test]
fn test_partial_failure_exits_nonzero_but_writes_good_types() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", DAY_IN);

    let out = enumtab(&["generate", "--type", "Day,Missing", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("type Missing"), "{}", stderr);
    assert!(tmp.path().join("day_enumslice.go").exists());
}

#[test]
fn test_all_failing_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", DAY_IN);

    let out = enumtab(&["generate", "--type", "Missing", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!tmp.path().join("missing_enumslice.go").exists());
}

#[test]
fn test_parse_error_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.go"), "package test\nconst ( A = \n").unwrap();

    let out = enumtab(&["generate", "--type", "A", tmp.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad.go"));
}

#[test]
fn test_inspect_json() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", NUM_IN);

    let out = enumtab(&["inspect", "--type", "Num", "--json", tmp.path().to_str().unwrap()]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["blob"], "m_2m_1m0m1m2");
    assert_eq!(json["keys"]["values"][0], -2);
    assert_eq!(json["names"].as_array().unwrap().len(), 5);
}

#[test]
fn test_inspect_layout_lists_every_name() {
    let tmp = TempDir::new().unwrap();
    write_package(tmp.path(), "test", DAY_IN);

    let out = enumtab(&["inspect", "-t", "Day", tmp.path().to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("NAME BLOB (50 bytes)"));
    for name in ["Monday", "Sunday"] {
        assert!(stdout.contains(name));
    }
    assert!(stdout.contains("[44:50]"));
}
