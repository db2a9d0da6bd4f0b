//! Input mode through the binary
//!
//! Covers:
//! - Appending from command-line arguments and from a pipe, and which wins
//! - Byte-exact writes of piped input
//! - `--replace` truncation and `--output` echo
//! - Sample promotion before writing
//! - Flag validation

use assert_cmd::{Command, prelude::*};
use git2::Repository as Git2Repository;
use predicates::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command as StdCommand, Stdio},
};
use tempfile::TempDir;

/// Helper to create a repository with an empty hooks directory
fn create_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    Git2Repository::init(temp_dir.path()).unwrap();

    let hooks_dir = temp_dir.path().join(".git/hooks");
    let _ = fs::remove_dir_all(&hooks_dir);
    fs::create_dir_all(&hooks_dir).unwrap();

    (temp_dir, hooks_dir)
}

/// Command with piped standard input (see `write_stdin`)
fn git_hooks(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-hooks").unwrap();
    cmd.current_dir(dir).env_remove("GIT_HOOKS_EDITOR");
    cmd
}

/// Command whose standard input is `/dev/null`, so lines come from arguments
fn git_hooks_without_pipe(dir: &Path) -> StdCommand {
    let mut cmd = StdCommand::cargo_bin("git-hooks").unwrap();
    cmd.current_dir(dir)
        .env_remove("GIT_HOOKS_EDITOR")
        .stdin(Stdio::null());
    cmd
}

#[test]
fn test_append_from_arguments() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::write(hooks_dir.join("pre-commit"), "x\n").unwrap();

    git_hooks_without_pipe(temp_dir.path())
        .args(["--input", "pre-commit", "y"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(hooks_dir.join("pre-commit")).unwrap(),
        "x\ny\n"
    );
}

#[test]
fn test_append_from_pipe() {
    let (temp_dir, hooks_dir) = create_repo();

    git_hooks(temp_dir.path())
        .args(["-i", "pre-push"])
        .write_stdin("#!/bin/sh\ncargo test\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("note: Creating new hook: pre-push"));

    assert_eq!(
        fs::read_to_string(hooks_dir.join("pre-push")).unwrap(),
        "#!/bin/sh\ncargo test\n"
    );
}

#[test]
fn test_piped_input_wins_over_arguments() {
    let (temp_dir, hooks_dir) = create_repo();

    git_hooks(temp_dir.path())
        .args(["-i", "pre-commit", "from-arg"])
        .write_stdin("from-pipe\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(hooks_dir.join("pre-commit")).unwrap(),
        "from-pipe\n"
    );
}

#[test]
fn test_replace_keeps_non_utf8_lines() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::write(hooks_dir.join("pre-commit"), "keep1\nkeep2\n").unwrap();

    git_hooks(temp_dir.path())
        .args(["-i", "-r", "pre-commit"])
        .write_stdin(&b"line1\nbad\xff\nline3\n"[..])
        .assert()
        .success();

    assert_eq!(
        fs::read(hooks_dir.join("pre-commit")).unwrap(),
        b"line1\nbad\xff\nline3\n"
    );
}

#[test]
fn test_replace_existing_content() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::write(hooks_dir.join("commit-msg"), "old line\nanother\n").unwrap();

    git_hooks(temp_dir.path())
        .args(["-i", "-r", "commit-msg"])
        .write_stdin("a\nb\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(hooks_dir.join("commit-msg")).unwrap(),
        "a\nb\n"
    );
}

#[test]
fn test_output_prints_result() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\n").unwrap();

    git_hooks_without_pipe(temp_dir.path())
        .args(["-i", "-o", "pre-commit", "cargo fmt --check"])
        .assert()
        .success()
        .stdout("#!/bin/sh\ncargo fmt --check\n");
}

#[test]
fn test_sample_promoted_before_append() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::write(hooks_dir.join("pre-rebase.sample"), "#!/bin/sh\n").unwrap();

    git_hooks_without_pipe(temp_dir.path())
        .args(["-i", "pre-rebase", "exit 0"])
        .assert()
        .success();

    assert!(!hooks_dir.join("pre-rebase.sample").exists());
    assert_eq!(
        fs::read_to_string(hooks_dir.join("pre-rebase")).unwrap(),
        "#!/bin/sh\nexit 0\n"
    );
}

#[test]
fn test_unrecognized_hook_is_created() {
    let (temp_dir, hooks_dir) = create_repo();

    git_hooks_without_pipe(temp_dir.path())
        .args(["-i", "my-hook", "echo hello"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Hook not recognized, generating new hook: my-hook",
        ));

    assert_eq!(
        fs::read_to_string(hooks_dir.join("my-hook")).unwrap(),
        "echo hello\n"
    );
}

#[cfg(unix)]
#[test]
fn test_written_hook_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let (temp_dir, hooks_dir) = create_repo();

    git_hooks_without_pipe(temp_dir.path())
        .args(["-i", "post-update", "#!/bin/sh"])
        .assert()
        .success();

    let mode = fs::metadata(hooks_dir.join("post-update"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn test_replace_without_input_is_rejected() {
    let (temp_dir, hooks_dir) = create_repo();

    git_hooks(temp_dir.path())
        .args(["--replace", "pre-commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));

    assert!(!hooks_dir.join("pre-commit").exists());
}

#[test]
fn test_write_failure_reported() {
    let (temp_dir, hooks_dir) = create_repo();
    fs::create_dir(hooks_dir.join("pre-commit")).unwrap();

    git_hooks_without_pipe(temp_dir.path())
        .args(["-i", "pre-commit", "echo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write hook file"));
}
