// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the gitcp binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gitcp() -> Command {
    Command::cargo_bin("gitcp").unwrap()
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(status.status.success(), "git {:?} failed", args);
}

fn init_repo_with_commit(dir: &Path) {
    run_git(dir, &["init"]);
    run_git(dir, &["config", "user.email", "test@example.com"]);
    run_git(dir, &["config", "user.name", "Test User"]);
    run_git(dir, &["commit", "--allow-empty", "-m", "init"]);
}

#[test]
fn help_describes_the_operation() {
    gitcp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stage, commit and push"));
}

#[test]
fn local_path_is_required() {
    gitcp()
        .assert()
        .failure()
        .stderr(predicate::str::contains("LOCAL_PATH"));
}

#[test]
fn commit_requires_a_comment() {
    let dir = TempDir::new().unwrap();
    gitcp()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("commit message"));
}

#[test]
fn https_requires_credentials() {
    let dir = TempDir::new().unwrap();
    gitcp()
        .arg(dir.path())
        .args(["-m", "backup", "--mode", "https", "--user", "federico"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user and token"));
}

#[test]
fn wildcard_pathspec_is_rejected() {
    let dir = TempDir::new().unwrap();
    gitcp()
        .arg(dir.path())
        .args(["-m", "backup", "-a", "*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn dry_run_prints_the_plan_without_git() {
    let dir = TempDir::new().unwrap();
    gitcp()
        .arg(dir.path())
        .args([
            "-m",
            "backup",
            "--dry-run",
            "--executable",
            "/nonexistent/gitcp-no-such-git",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run:"))
        .stdout(predicate::str::contains("diff-index --cached --name-status HEAD"));
}

#[test]
fn dry_run_json_lists_planned_commands() {
    let dir = TempDir::new().unwrap();
    let output = gitcp()
        .arg(dir.path())
        .args(["-m", "backup", "--dry-run", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["changed"], false);
    let planned = json["planned"].as_array().unwrap();
    assert_eq!(planned.len(), 4);
    assert!(planned[3].as_str().unwrap().contains("push origin master"));
}

#[test]
fn commit_run_reports_added_files() {
    let dir = TempDir::new().unwrap();
    init_repo_with_commit(dir.path());
    fs::write(dir.path().join("test.txt"), "hello").unwrap();

    let output = gitcp()
        .arg(dir.path())
        .args([
            "-m",
            "My amazing backup",
            "-a",
            "test.txt",
            "--no-push",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["changed"], true);
    assert_eq!(json["files"]["added"][0], "test.txt");
    assert!(json["files"]["modified"].as_array().unwrap().is_empty());
}

#[test]
fn clean_tree_reports_unchanged() {
    let dir = TempDir::new().unwrap();
    init_repo_with_commit(dir.path());

    let output = gitcp()
        .arg(dir.path())
        .args(["-m", "backup", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["changed"], false);
    assert!(json["files"]["added"].as_array().unwrap().is_empty());
}

#[test]
fn commit_message_with_quotes_survives() {
    let dir = TempDir::new().unwrap();
    init_repo_with_commit(dir.path());
    fs::write(dir.path().join("test.txt"), "hello").unwrap();

    let message = "say \"hello\" to the remote";
    gitcp()
        .arg(dir.path())
        .args(["-m", message, "-a", "test.txt", "--no-push"])
        .assert()
        .success();

    let log = std::process::Command::new("git")
        .args(["log", "-1", "--pretty=%s"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&log.stdout).trim(), message);
}

#[test]
fn failed_push_reports_the_step() {
    let dir = TempDir::new().unwrap();
    init_repo_with_commit(dir.path());
    run_git(
        dir.path(),
        &["remote", "add", "origin", "/nonexistent/gitcp-no-remote"],
    );
    fs::write(dir.path().join("test.txt"), "hello").unwrap();

    let output = gitcp()
        .arg(dir.path())
        .args(["-m", "backup", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["failed"], "git_push");
    assert!(!json["stderr"].as_str().unwrap().is_empty());
}
