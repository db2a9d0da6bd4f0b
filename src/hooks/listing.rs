//! Listing mode: recognized hooks merged with hooks found on disk

use super::recognized::{RECOGNIZED_HOOKS, strip_sample_suffix};
use crate::error::{HookError, Result};
use std::{collections::HashSet, fs, path::Path};

/// Merge the recognized hook names with names discovered on disk
///
/// The recognized list is copied as-is and drives the initial order. Each
/// discovered name has its `.sample` suffix stripped and is appended, in
/// discovery order, unless an equal name is already in the result. Nothing
/// is ever removed: duplicates already present in `recognized` survive, and
/// comparison is case-sensitive.
#[must_use]
pub fn merge_hook_names<R, D>(recognized: &[R], discovered: &[D]) -> Vec<String>
where
    R: AsRef<str>,
    D: AsRef<str>,
{
    let mut merged: Vec<String> = recognized
        .iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    let mut seen: HashSet<String> = merged.iter().cloned().collect();

    for name in discovered {
        let name = strip_sample_suffix(name.as_ref());
        if seen.insert(name.clone()) {
            merged.push(name);
        }
    }

    merged
}

/// File names of every non-directory entry in the hooks directory
///
/// Names are returned sorted so listing output is stable across platforms.
/// Symlinks are reported as files without being followed.
///
/// # Errors
///
/// Returns [`HookError::DirectoryRead`] if the directory does not exist or
/// cannot be read
pub fn discover_hooks(hooks_dir: &Path) -> Result<Vec<String>> {
    let read_error = |source| HookError::DirectoryRead {
        path: hooks_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(hooks_dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let file_type = entry.file_type().map_err(read_error)?;
        if !file_type.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    tracing::trace!(count = names.len(), dir = %hooks_dir.display(), "discovered hook files");
    Ok(names)
}

/// Recognized hooks plus everything found in `hooks_dir`
///
/// # Errors
///
/// Returns [`HookError::DirectoryRead`] if the directory cannot be listed
pub fn list_hooks(hooks_dir: &Path) -> Result<Vec<String>> {
    let discovered = discover_hooks(hooks_dir)?;
    Ok(merge_hook_names(&RECOGNIZED_HOOKS, &discovered))
}
