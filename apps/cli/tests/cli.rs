use std::fs::File;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn create_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, len) in [("a", 100usize), ("b", 50), ("c", 200)] {
        File::create(dir.path().join(name)).unwrap().write_all(&vec![7u8; len]).unwrap();
    }
    dir
}

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("dir-analyzer").unwrap();
    cmd.env_remove("DIR_ANALYZER_LIMIT").env("RUST_LOG", "off");
    cmd
}

#[test]
fn json_output_lists_largest_first() {
    let dir = create_test_dir();
    let output = bin()
        .arg(dir.path())
        .args(["--json", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let files: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = files.iter().map(|f| f["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["c", "a"]);
    assert_eq!(files[0]["size"], 200);
}

#[test]
fn pretty_output() {
    let dir = create_test_dir();
    bin()
        .arg(dir.path())
        .args(["--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Number: 1"))
        .stdout(predicate::str::contains("File Name: c"))
        .stdout(predicate::str::contains("File size: 200 B"))
        .stdout(predicate::str::contains("File Name: a").not())
        .stdout(predicate::str::contains("Time elapsed:"));
}

#[test]
fn positional_count_limits_output() {
    let dir = create_test_dir();
    let output = bin().arg(dir.path()).args(["1", "--json"]).output().unwrap();
    assert!(output.status.success());
    let files: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], "c");

    let output = bin().arg(dir.path()).args(["many", "--json"]).output().unwrap();
    assert!(output.status.success());
    let files: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(files.len(), 3);
}

#[test]
fn env_limit_is_used_when_flag_absent() {
    let dir = create_test_dir();
    let output = bin()
        .env("DIR_ANALYZER_LIMIT", "1")
        .arg(dir.path())
        .arg("--json")
        .output()
        .unwrap();
    let files: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn config_file_is_applied() {
    let dir = create_test_dir();
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg = cfg_dir.path().join("config.json");
    std::fs::write(&cfg, r#"{"default_limit": 2, "exclude_names": ["c"]}"#).unwrap();

    let output = bin()
        .arg(dir.path())
        .arg("--json")
        .arg("--config")
        .arg(&cfg)
        .output()
        .unwrap();
    let files: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = files.iter().map(|f| f["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn missing_directory_fails() {
    bin()
        .arg("/nonexistent_xyz_12345_folder")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root not found"));
}

#[test]
fn zero_limit_fails() {
    let dir = create_test_dir();
    bin()
        .arg(dir.path())
        .args(["-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid limit"));
}
