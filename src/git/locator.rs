//! Hooks directory resolution
//!
//! Git runs hooks from `core.hooksPath` when it is set and from
//! `<repository root>/.git/hooks` otherwise. This module answers the same
//! question for the rest of the tool.

use super::GitConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Git configuration key that overrides the hooks directory
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Where the hooks directory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HooksSource {
    /// Configured through `core.hooksPath`
    Config,
    /// The repository's default `.git/hooks`
    Default,
}

/// Resolved hooks directory for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksLocation {
    /// Absolute path of the hooks directory
    pub path: PathBuf,
    /// How the path was determined
    pub source: HooksSource,
}

/// Resolve the hooks directory
///
/// A configured `core.hooksPath` wins. A leading `~` in it is expanded, and a
/// relative value is taken relative to the repository root. Without an
/// override the default `<root>/.git/hooks` is used.
///
/// # Errors
///
/// Returns [`crate::HookError::NotAGitRepository`] when the repository root is
/// needed but cannot be determined.
pub fn resolve_hooks_path<G: GitConfig + ?Sized>(git: &G) -> Result<HooksLocation> {
    if let Some(configured) = git
        .config_value(HOOKS_PATH_KEY)
        .filter(|value| !value.trim().is_empty())
    {
        let expanded = PathBuf::from(shellexpand::tilde(&configured).as_ref());
        let path = if expanded.is_absolute() {
            expanded
        } else {
            git.repo_root()?.join(expanded)
        };
        tracing::debug!(path = %path.display(), "hooks directory from {HOOKS_PATH_KEY}");
        return Ok(HooksLocation {
            path,
            source: HooksSource::Config,
        });
    }

    let path = git.repo_root()?.join(".git").join("hooks");
    tracing::debug!(path = %path.display(), "default hooks directory");
    Ok(HooksLocation {
        path,
        source: HooksSource::Default,
    })
}
