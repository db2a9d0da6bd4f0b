//! Log verbosity and subscriber setup

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// How chatty the diagnostic log on stderr is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings and errors only
    #[default]
    Quiet,
    /// `--debug`: git queries, promotions, writes
    Debug,
    /// `--trace`: everything, including every git command
    Trace,
}

impl Verbosity {
    /// Verbosity selected by the `--debug` and `--trace` flags
    ///
    /// `--trace` implies `--debug`.
    #[must_use]
    pub const fn from_flags(debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else {
            Self::Quiet
        }
    }

    /// Default filter directive for this verbosity
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "git_hooks=warn",
            Self::Debug => "git_hooks=debug",
            Self::Trace => "git_hooks=trace",
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the flag-derived level. Calling this more than once
/// keeps the first subscriber.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();
}
