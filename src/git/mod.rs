//! Git integration: running the `git` executable and locating the hooks
//! directory it uses.

pub mod command;
pub mod locator;

pub use command::{GitCli, GitConfig};
pub use locator::{HOOKS_PATH_KEY, HooksLocation, HooksSource, resolve_hooks_path};
