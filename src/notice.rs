//! Labelled one-line messages for the user on standard error
//!
//! These are always shown, independent of the log filter.

use console::{StyledObject, style};
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Kind of message, which picks its label and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The invocation failed
    Error,
    /// How to recover from the preceding error
    Hint,
    /// Informational, e.g. a hook file about to be created
    Note,
}

impl Level {
    /// Plain label printed before the message
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error:",
            Self::Hint => "hint:",
            Self::Note => "note:",
        }
    }

    fn styled(self) -> StyledObject<&'static str> {
        let label = style(self.label()).bold().for_stderr();
        match self {
            Self::Error => label.red(),
            Self::Hint => label.yellow(),
            Self::Note => label.cyan(),
        }
    }
}

/// Write `message` to `out` behind the label for `level`
///
/// # Errors
///
/// Returns the I/O error from writing to `out`
pub fn write_message<W: Write>(
    out: &mut W,
    level: Level,
    message: impl Display,
) -> io::Result<()> {
    writeln!(out, "{} {message}", level.styled())
}

/// Print `message` to standard error behind the label for `level`
pub fn emit(level: Level, message: impl Display) {
    // Nothing sensible is left to do when stderr itself is gone
    let _ = write_message(&mut io::stderr().lock(), level, message);
}
