//! Querying git configuration and repository layout through the `git` CLI

use crate::error::{HookError, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// The parts of git the hooks locator needs.
///
/// Production code talks to the real `git` executable through [`GitCli`];
/// tests substitute an in-memory fake.
pub trait GitConfig {
    /// Look up a configuration value.
    ///
    /// Returns `None` when the key is unset, empty, or git could not be
    /// queried at all.
    fn config_value(&self, key: &str) -> Option<String>;

    /// Absolute path of the top of the working tree.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::NotAGitRepository`] when git cannot determine the
    /// root, e.g. outside of any repository.
    fn repo_root(&self) -> Result<PathBuf>;
}

/// Runs `git` in a fixed working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Directory git commands are run from
    work_dir: PathBuf,
}

impl GitCli {
    /// Create a git runner for the given working directory
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        Self {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a git runner for the process's current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn from_current_dir() -> Result<Self> {
        let work_dir = std::env::current_dir().map_err(|e| HookError::NotAGitRepository {
            message: format!("cannot determine current directory: {e}"),
        })?;
        Ok(Self::new(work_dir))
    }

    /// Run a git command and return stdout with trailing NUL and newline
    /// characters removed
    fn run_git_command(&self, args: &[&str]) -> Result<String> {
        tracing::trace!(
            args = %args.join(" "),
            dir = %self.work_dir.display(),
            "running git"
        );

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| HookError::NotAGitRepository {
                message: format!("failed to run git {}: {e}", args.join(" ")),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HookError::NotAGitRepository {
                message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches(['\0', '\n']).to_string())
    }
}

impl GitConfig for GitCli {
    fn config_value(&self, key: &str) -> Option<String> {
        match self.run_git_command(&["config", "--get", "--null", key]) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(key, error = %e, "config lookup returned nothing");
                None
            }
        }
    }

    fn repo_root(&self) -> Result<PathBuf> {
        self.run_git_command(&["rev-parse", "--show-toplevel"])
            .map(PathBuf::from)
    }
}
