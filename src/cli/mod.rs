//! Command-line interface definitions

pub mod completions;

use crate::{
    editor::{DEFAULT_EDITOR, EditorChoice},
    logging::Verbosity,
};
use clap::Parser;
use clap_complete::Shell;

/// Help text of the positional hook argument; shell completion keys off it
pub(crate) const HOOK_HELP: &str = "Hook to edit or write, lists recognized hooks when omitted";

/// Manipulate git hooks
#[derive(Parser, Debug)]
#[command(
    name = "git-hooks",
    version,
    about = "Manipulate git hooks",
    long_about = "List the hooks of the current repository, open one in a text editor, or \
                  append lines to it from a pipe or the command line. A disabled \
                  `<hook>.sample` file is renamed to `<hook>` the first time it is used.",
    after_help = "Examples:\n  git-hooks\n  git-hooks pre-commit\n  git-hooks --nano commit-msg\n  \
                  git-hooks -i pre-push 'cargo test'\n  echo 'cargo fmt --check' | git-hooks -i -r -o pre-commit\n"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Hook name
    #[arg(help = HOOK_HELP)]
    pub hook: Option<String>,

    /// Lines to write with --input when nothing is piped in
    pub lines: Vec<String>,

    /// Use Emacs text editor
    #[arg(short, long)]
    pub emacs: bool,

    /// Use Nano text editor
    #[arg(short, long)]
    pub nano: bool,

    /// Text editor to use when neither --emacs nor --nano is given
    #[arg(
        short,
        long,
        value_name = "EDITOR",
        default_value = DEFAULT_EDITOR,
        env = "GIT_HOOKS_EDITOR"
    )]
    pub text_editor: String,

    /// Append content from pipe or arguments to specified hook file
    #[arg(short, long)]
    pub input: bool,

    /// Display content of specified hook file afterwards
    #[arg(short, long)]
    pub output: bool,

    /// Replace contents of file rather than append (only with --input)
    #[arg(short, long, requires = "input")]
    pub replace: bool,

    /// Check the hooks directory and report the state of every hook
    #[arg(long, conflicts_with_all = ["hook", "completions"])]
    pub doctor: bool,

    /// Print a shell completion script
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "hook")]
    pub completions: Option<Shell>,

    /// Log git queries and file operations to stderr
    #[arg(long)]
    pub debug: bool,

    /// Log every git command to stderr (implies --debug)
    #[arg(long)]
    pub trace: bool,
}

/// What to do with the resolved hook file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Open the file in an editor
    Edit(EditorChoice),
    /// Write instructions into the file
    Input {
        /// Instructions given on the command line
        lines: Vec<String>,
        /// Truncate before writing
        replace: bool,
    },
}

/// Parsed options for listing, editing or writing hooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Hook to operate on; `None` lists hooks
    pub hook: Option<String>,
    /// Edit or input mode
    pub mode: Mode,
    /// Print the file after editing or writing
    pub output: bool,
}

/// Top-level action selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List, edit or write hooks
    Hooks(Options),
    /// Health report
    Doctor,
    /// Shell completion script
    Completions(Shell),
}

impl Cli {
    /// Log verbosity requested by `--debug`/`--trace`
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.debug, self.trace)
    }

    /// Turn the raw flags into the action to run
    #[must_use]
    pub fn into_command(self) -> Command {
        if let Some(shell) = self.completions {
            return Command::Completions(shell);
        }
        if self.doctor {
            return Command::Doctor;
        }

        let mode = if self.input {
            Mode::Input {
                lines: self.lines,
                replace: self.replace,
            }
        } else {
            Mode::Edit(EditorChoice::from_flags(
                self.emacs,
                self.nano,
                &self.text_editor,
            ))
        };

        Command::Hooks(Options {
            hook: self.hook.filter(|hook| !hook.is_empty()),
            mode,
            output: self.output,
        })
    }
}
