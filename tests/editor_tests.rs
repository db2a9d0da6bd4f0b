//! Edit mode through the binary
//!
//! Uses `true` and `false` as stand-in editors so no terminal is needed.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Helper to create a git repository with an empty hooks directory
fn setup_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();

    std::process::Command::new("git")
        .args(["init"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    let hooks_dir = temp_dir.path().join(".git/hooks");
    let _ = fs::remove_dir_all(&hooks_dir);
    fs::create_dir_all(&hooks_dir).unwrap();

    (temp_dir, hooks_dir)
}

fn git_hooks(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-hooks").unwrap();
    cmd.current_dir(dir).env_remove("GIT_HOOKS_EDITOR");
    cmd
}

#[test]
fn test_editor_success_promotes_sample() {
    let (temp_dir, hooks_dir) = setup_test_repo();
    fs::write(hooks_dir.join("pre-commit.sample"), "#!/bin/sh\n").unwrap();

    git_hooks(temp_dir.path())
        .args(["--text-editor", "true", "pre-commit"])
        .assert()
        .success();

    assert!(hooks_dir.join("pre-commit").exists());
    assert!(!hooks_dir.join("pre-commit.sample").exists());
}

#[test]
fn test_editor_then_output() {
    let (temp_dir, hooks_dir) = setup_test_repo();
    fs::write(hooks_dir.join("update"), "#!/bin/sh\necho update\n").unwrap();

    git_hooks(temp_dir.path())
        .args(["-t", "true", "-o", "update"])
        .assert()
        .success()
        .stdout("#!/bin/sh\necho update\n");
}

#[test]
fn test_editor_from_environment() {
    let (temp_dir, hooks_dir) = setup_test_repo();
    fs::write(hooks_dir.join("pre-push"), "x\n").unwrap();

    Command::cargo_bin("git-hooks")
        .unwrap()
        .current_dir(temp_dir.path())
        .env("GIT_HOOKS_EDITOR", "false")
        .arg("pre-push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("editor 'false' failed"));
}

#[test]
fn test_editor_exit_code_is_propagated() {
    let (temp_dir, _hooks_dir) = setup_test_repo();

    git_hooks(temp_dir.path())
        .args(["-t", "false", "commit-msg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Creating new hook: commit-msg"));
}

#[test]
fn test_missing_editor_reported() {
    let (temp_dir, hooks_dir) = setup_test_repo();

    git_hooks(temp_dir.path())
        .args(["-t", "git-hooks-no-such-editor", "-o", "pre-commit"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("git-hooks-no-such-editor"));

    // An editor that never ran creates nothing
    assert!(!hooks_dir.join("pre-commit").exists());
}

#[test]
fn test_unsaved_new_hook_leaves_no_file() {
    let (temp_dir, hooks_dir) = setup_test_repo();

    git_hooks(temp_dir.path())
        .args(["-t", "true", "brand-new"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Hook not recognized, generating new hook: brand-new",
        ));

    assert!(!hooks_dir.join("brand-new").exists());
}
