//! Listing, editing and writing hooks for one invocation

use crate::{
    cli::{Mode, Options},
    editor::open_in_editor,
    git::{GitConfig, resolve_hooks_path},
    hooks::{Resolution, is_recognized, list_hooks, make_executable, resolve_hook_file},
    input::{collect_instructions, write_instructions},
    notice::{self, Level},
    output::print_hook_file,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Run the hooks command
///
/// Without a hook name the merged hook list is written to `out`. With one,
/// the hook file is resolved (promoting a sample), then opened in the editor
/// or written from `stdin`/the command line, and finally printed to `out`
/// when `options.output` is set.
///
/// # Errors
///
/// Returns the first [`crate::HookError`] encountered, or an I/O error when
/// `out` cannot be written
pub fn run<G, R, W>(
    options: &Options,
    git: &G,
    stdin: R,
    stdin_is_piped: bool,
    out: &mut W,
) -> Result<()>
where
    G: GitConfig + ?Sized,
    R: BufRead,
    W: Write,
{
    let location = resolve_hooks_path(git)?;

    let Some(hook) = options.hook.as_deref() else {
        let hooks = list_hooks(&location.path)?;
        writeln!(out, "Recognized hooks:").context("failed to write hook list")?;
        for hook in hooks {
            writeln!(out, "{hook}").context("failed to write hook list")?;
        }
        return Ok(());
    };

    let resolution = resolve_hook_file(&location.path, hook)?;
    if matches!(resolution, Resolution::New(_)) {
        if is_recognized(hook) {
            notice::emit(Level::Note, format_args!("Creating new hook: {hook}"));
        } else {
            notice::emit(
                Level::Note,
                format_args!("Hook not recognized, generating new hook: {hook}"),
            );
        }
    }
    let path = resolution.into_path();

    match &options.mode {
        Mode::Input { lines, replace } => {
            let instructions = collect_instructions(lines, stdin, stdin_is_piped)?;
            write_instructions(&path, &instructions, *replace)?;
        }
        Mode::Edit(editor) => open_in_editor(editor, &path)?,
    }
    make_executable(&path)?;

    if options.output {
        print_hook_file(&path, out)?;
    }

    Ok(())
}
