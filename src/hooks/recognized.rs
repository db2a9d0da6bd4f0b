//! Hook names git knows about
//!
//! The list drives the order of `git-hooks` listing output and the names
//! offered by shell completion. Hooks outside the list are still accepted
//! everywhere; the list is informational.

/// Hook names recognized out of the box, in display order
pub const RECOGNIZED_HOOKS: [&str; 13] = [
    "applypatch-msg",
    "fsmonitor-watchman",
    "pre-applypatch",
    "pre-merge-commit",
    "pre-push",
    "pre-receive",
    "update",
    "commit-msg",
    "post-update",
    "pre-commit",
    "prepare-commit-msg",
    "pre-rebase",
    "push-to-checkout",
];

/// Suffix git uses for disabled template hooks
pub const SAMPLE_SUFFIX: &str = ".sample";

/// Determine if a hook name is in [`RECOGNIZED_HOOKS`]
///
/// Comparison is exact and case-sensitive, matching how git looks hooks up
/// on disk.
#[must_use]
pub fn is_recognized(hook_name: &str) -> bool {
    RECOGNIZED_HOOKS.contains(&hook_name)
}

/// Strip every `.sample` occurrence from a discovered file name
///
/// `pre-commit.sample` becomes `pre-commit`; names without the suffix are
/// returned unchanged.
#[must_use]
pub fn strip_sample_suffix(file_name: &str) -> String {
    file_name.replace(SAMPLE_SUFFIX, "")
}
