//! Error kinds raised while locating, resolving and writing hook files.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;

/// Everything that can go wrong in a single invocation.
///
/// Each variant is one failure kind; callers switch on the variant to pick
/// the message and exit code shown to the user. I/O causes are exposed via
/// [`std::error::Error::source`] rather than repeated in the message.
#[derive(Debug, Error)]
pub enum HookError {
    /// The repository root (or git itself) could not be queried.
    #[error("not a git repository: {message}")]
    NotAGitRepository {
        /// What git reported.
        message: String,
    },

    /// The hooks directory could not be listed.
    #[error("failed to read hooks directory {}", path.display())]
    DirectoryRead {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A sample hook could not be renamed to its active name.
    #[error("failed to promote {} to {}", sample.display(), target.display())]
    Promotion {
        /// The `.sample` file.
        sample: PathBuf,
        /// The active hook path it was being renamed to.
        target: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Appending to, truncating or marking a hook file executable failed.
    #[error("failed to write hook file {}", path.display())]
    FileWrite {
        /// Hook file being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The editor could not be started or exited unsuccessfully.
    #[error("editor '{editor}' failed: {reason}")]
    EditorLaunch {
        /// Program that was launched.
        editor: String,
        /// Spawn error or exit status description.
        reason: String,
        /// Exit code of the editor, when it ran and returned one.
        code: Option<i32>,
    },

    /// Piped standard input could not be read.
    #[error("failed to read instructions from standard input")]
    InputRead {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The hook file could not be read back for output.
    #[error("unable to read hook file {}", path.display())]
    FileRead {
        /// Hook file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl HookError {
    /// Process exit code for this error.
    ///
    /// A failed editor passes its own exit code through; everything else
    /// exits with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EditorLaunch {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Suggestion printed after the error message, if any.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotAGitRepository { .. } => {
                Some("run inside a git repository, or set core.hooksPath")
            }
            Self::DirectoryRead { .. } => Some("check that the hooks directory exists"),
            Self::Promotion { .. } | Self::FileWrite { .. } => {
                Some("check the permissions of the hooks directory")
            }
            Self::EditorLaunch { .. } => {
                Some("pick another editor with --text-editor, --emacs or --nano")
            }
            Self::InputRead { .. } | Self::FileRead { .. } => None,
        }
    }
}
