//! List, edit and script the hook files of a git repository.
//!
//! The hooks directory is taken from `core.hooksPath` or defaults to
//! `<repository root>/.git/hooks`. Naming a hook resolves it to a file in that
//! directory, renaming a disabled `<hook>.sample` to `<hook>` on first use;
//! the file is then opened in an editor or written from piped or argument
//! input. Without a hook name the recognized hooks are listed together with
//! any others found on disk.

pub mod app;
pub mod cli;
pub mod doctor;
pub mod editor;
pub mod error;
pub mod git;
pub mod hooks;
pub mod input;
pub mod logging;
pub mod notice;
pub mod output;

pub use cli::{Cli, Command, Mode, Options};
pub use editor::EditorChoice;
pub use error::{HookError, Result};
pub use git::{GitCli, GitConfig, HooksLocation, HooksSource, resolve_hooks_path};
pub use hooks::{
    HookState, RECOGNIZED_HOOKS, Resolution, list_hooks, merge_hook_names, resolve_hook_file,
};
