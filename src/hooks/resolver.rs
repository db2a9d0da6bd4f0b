//! Resolution mode: turning a hook name into the file to edit
//!
//! A hook is in one of three states on disk: missing, present only as a
//! `.sample` template, or active. Resolving a hook promotes a sample to the
//! active name; the other states are left alone.

use super::recognized::SAMPLE_SUFFIX;
use crate::error::{HookError, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// On-disk state of one hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// Neither the hook nor its sample exists
    Missing,
    /// Only `<name>.sample` exists
    SampleOnly,
    /// `<name>` exists
    Active,
}

/// Outcome of [`resolve_hook_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The hook was already active
    Existing(PathBuf),
    /// The sample was renamed to the active name
    Promoted(PathBuf),
    /// Nothing existed; the caller will create the file at this path
    New(PathBuf),
}

impl Resolution {
    /// Path of the active hook file
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Existing(path) | Self::Promoted(path) | Self::New(path) => path,
        }
    }

    /// Consume the resolution, returning the active hook path
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        match self {
            Self::Existing(path) | Self::Promoted(path) | Self::New(path) => path,
        }
    }
}

/// Path of the active hook file for `hook_name`
#[must_use]
pub fn hook_path(hooks_dir: &Path, hook_name: &str) -> PathBuf {
    hooks_dir.join(hook_name)
}

/// Path of the sample file for `hook_name`
#[must_use]
pub fn sample_path(hooks_dir: &Path, hook_name: &str) -> PathBuf {
    hooks_dir.join(format!("{hook_name}{SAMPLE_SUFFIX}"))
}

/// Inspect a hook's state without modifying the hooks directory
#[must_use]
pub fn hook_state(hooks_dir: &Path, hook_name: &str) -> HookState {
    if hook_path(hooks_dir, hook_name).exists() {
        HookState::Active
    } else if sample_path(hooks_dir, hook_name).exists() {
        HookState::SampleOnly
    } else {
        HookState::Missing
    }
}

/// Resolve the file backing `hook_name`, promoting a sample if needed
///
/// - active hook present: returned unchanged
/// - only the sample present: renamed to the active name
/// - neither present: the active path is returned for the caller to create
///
/// At most one rename happens per call.
///
/// # Errors
///
/// Returns [`HookError::Promotion`] if renaming the sample fails
pub fn resolve_hook_file(hooks_dir: &Path, hook_name: &str) -> Result<Resolution> {
    let target = hook_path(hooks_dir, hook_name);

    match hook_state(hooks_dir, hook_name) {
        HookState::Active => Ok(Resolution::Existing(target)),
        HookState::Missing => {
            tracing::debug!(hook = hook_name, "no hook or sample on disk");
            Ok(Resolution::New(target))
        }
        HookState::SampleOnly => {
            promote_sample(&sample_path(hooks_dir, hook_name), &target)?;
            Ok(Resolution::Promoted(target))
        }
    }
}

fn promote_sample(sample: &Path, target: &Path) -> Result<()> {
    fs::rename(sample, target).map_err(|source| HookError::Promotion {
        sample: sample.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        from = %sample.display(),
        to = %target.display(),
        "promoted sample hook"
    );
    Ok(())
}

/// Add execute permission to an existing hook file so git will run it
///
/// Does nothing when the file does not exist (an editor session that never
/// saved) or already has every execute bit. A no-op on non-Unix platforms.
///
/// # Errors
///
/// Returns [`HookError::FileWrite`] if the permissions cannot be changed
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let Ok(metadata) = fs::metadata(path) else {
            return Ok(());
        };
        let mode = metadata.permissions().mode();
        if mode & 0o111 != 0o111 {
            fs::set_permissions(path, fs::Permissions::from_mode(mode | 0o111)).map_err(
                |source| HookError::FileWrite {
                    path: path.to_path_buf(),
                    source,
                },
            )?;
            tracing::trace!(file = %path.display(), "marked hook executable");
        }
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
