//! Text editor selection and launch

use crate::error::{HookError, Result};
use std::{
    fmt,
    path::Path,
    process::{Command, Stdio},
};

/// Editor used when no flag or environment variable picks one
pub const DEFAULT_EDITOR: &str = "vim";

/// Which editor opens the hook file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorChoice {
    /// `--emacs`
    Emacs,
    /// `--nano`
    Nano,
    /// `--text-editor <program>`, or the default
    Program(String),
}

impl EditorChoice {
    /// Pick the editor from command-line flags
    ///
    /// `--emacs` beats `--nano`, and both beat `--text-editor`.
    #[must_use]
    pub fn from_flags(emacs: bool, nano: bool, text_editor: &str) -> Self {
        if emacs {
            Self::Emacs
        } else if nano {
            Self::Nano
        } else {
            Self::Program(text_editor.to_string())
        }
    }

    /// Executable to launch
    #[must_use]
    pub fn program(&self) -> &str {
        match self {
            Self::Emacs => "emacs",
            Self::Nano => "nano",
            Self::Program(program) => program,
        }
    }
}

impl Default for EditorChoice {
    fn default() -> Self {
        Self::Program(DEFAULT_EDITOR.to_string())
    }
}

impl fmt::Display for EditorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Open `path` in the editor and wait for it to exit
///
/// The editor inherits the terminal so it can be used interactively.
///
/// # Errors
///
/// Returns [`HookError::EditorLaunch`] if the editor cannot be started or
/// exits unsuccessfully
pub fn open_in_editor(editor: &EditorChoice, path: &Path) -> Result<()> {
    let program = editor.program();
    tracing::debug!(editor = program, file = %path.display(), "launching editor");

    let status = Command::new(program)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| HookError::EditorLaunch {
            editor: program.to_string(),
            reason: e.to_string(),
            code: None,
        })?;

    if !status.success() {
        return Err(HookError::EditorLaunch {
            editor: program.to_string(),
            reason: format!("exited with {status}"),
            code: status.code(),
        });
    }

    Ok(())
}
