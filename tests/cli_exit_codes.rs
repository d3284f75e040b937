//! Exit status of the stressrun binary.

#![cfg(target_os = "linux")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn stressrun(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stressrun"))
        .args(args)
        .current_dir(dir)
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .output()
        .unwrap()
}

#[test]
fn test_child_failure_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fail.sh"), "echo encoding\nexit 4\n").unwrap();

    let output = stressrun(dir.path(), &["/bin/sh", "--args", "fail.sh"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error in run 1!"));
    assert_eq!(fs::read_to_string(dir.path().join("log.txt")).unwrap(), "encoding\n");
}

#[test]
fn test_bounded_run_exits_zero() {
    let dir = TempDir::new().unwrap();

    let output = stressrun(dir.path(), &["/bin/true", "--max-runs", "3", "--log", "runs.log"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 runs successful."));
    assert!(stdout.contains("3 runs successful."));
    assert!(!stdout.contains("Error in run"));
    assert!(dir.path().join("runs.log").exists());
}

#[test]
fn test_missing_executable_exits_two() {
    let dir = TempDir::new().unwrap();

    let output = stressrun(dir.path(), &["./no-such-encoder"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to launch"));
}

#[test]
fn test_config_file_supplies_command() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ok.sh"), "exit 0\n").unwrap();
    fs::write(
        dir.path().join("stressrun.yml"),
        "executable: /bin/sh\narguments: ok.sh\nmax_runs: 2\nlog_path: from-config.log\n",
    )
    .unwrap();

    let output = stressrun(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("from-config.log").exists());
}

#[test]
fn test_no_executable_exits_two() {
    let dir = TempDir::new().unwrap();

    let output = stressrun(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no executable configured"));
}

#[test]
fn test_missing_config_file_exits_two() {
    let dir = TempDir::new().unwrap();

    let output = stressrun(dir.path(), &["-c", "missing.yml", "/bin/true"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
    assert!(!dir.path().join("log.txt").exists());
}

#[test]
fn test_malformed_config_file_exits_two() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.yml"), "max_runs: lots\n").unwrap();

    let output = stressrun(dir.path(), &["-c", "bad.yml", "/bin/true"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
    assert!(!dir.path().join("log.txt").exists());
}
