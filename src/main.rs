//! git-hooks command-line entry point

use anyhow::Result;
use clap::Parser;
use git_hooks::{
    Cli, Command, GitCli, HookError, app,
    cli::completions,
    doctor, input, logging,
    notice::{self, Level},
};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    match run(cli) {
        Ok(code) => code,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.into_command() {
        Command::Completions(shell) => {
            completions::generate_completions(shell)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Doctor => {
            let git = GitCli::from_current_dir()?;
            let code = doctor::run_doctor(&git);
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
        Command::Hooks(options) => {
            let git = GitCli::from_current_dir()?;
            let stdin_is_piped = input::stdin_is_piped();
            let mut stdout = io::stdout().lock();
            app::run(&options, &git, io::stdin().lock(), stdin_is_piped, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    tracing::debug!(error = ?err, "command failed");
    notice::emit(Level::Error, format_args!("{err:#}"));

    let Some(hook_err) = err.downcast_ref::<HookError>() else {
        return ExitCode::FAILURE;
    };
    if let Some(hint) = hook_err.hint() {
        notice::emit(Level::Hint, hint);
    }
    ExitCode::from(u8::try_from(hook_err.exit_code()).unwrap_or(1))
}
