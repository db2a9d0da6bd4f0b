//! Input mode: appending instructions to a hook file

use crate::error::{HookError, Result};
use std::{
    fs::OpenOptions,
    io::{self, BufRead, BufWriter, Write},
    path::Path,
};

/// Whether standard input is piped or redirected from a file
///
/// Terminals and other character devices such as `/dev/null` are not treated
/// as input sources.
#[must_use]
pub fn stdin_is_piped() -> bool {
    #[cfg(unix)]
    {
        use std::{fs::File, os::fd::AsFd, os::unix::fs::FileTypeExt};

        io::stdin()
            .as_fd()
            .try_clone_to_owned()
            .map(File::from)
            .and_then(|stdin| stdin.metadata())
            .is_ok_and(|metadata| !metadata.file_type().is_char_device())
    }
    #[cfg(not(unix))]
    {
        use std::io::IsTerminal;

        !io::stdin().is_terminal()
    }
}

/// Gather the lines to write into the hook
///
/// Piped standard input is read to the end and wins over the command line;
/// otherwise the positional lines are used. Lines are kept as raw bytes
/// without their `\n` (or `\r\n`) terminator.
///
/// # Errors
///
/// Returns [`HookError::InputRead`] if standard input cannot be read
pub fn collect_instructions<R: BufRead>(
    args: &[String],
    stdin: R,
    stdin_is_piped: bool,
) -> Result<Vec<Vec<u8>>> {
    if !stdin_is_piped {
        return Ok(args.iter().map(|arg| arg.as_bytes().to_vec()).collect());
    }
    if !args.is_empty() {
        tracing::debug!(
            ignored = args.len(),
            "standard input is piped, ignoring command-line lines"
        );
    }

    stdin
        .split(b'\n')
        .map(|line| {
            let mut line = line.map_err(|source| HookError::InputRead { source })?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        })
        .collect()
}

/// Write `lines` to the hook file, one per line
///
/// The file is created when missing. With `replace` its previous content is
/// discarded first; otherwise lines are appended.
///
/// # Errors
///
/// Returns [`HookError::FileWrite`] if the file cannot be opened or written
pub fn write_instructions(path: &Path, lines: &[Vec<u8>], replace: bool) -> Result<()> {
    let write_error = |source| HookError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.create(true);
    if replace {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let file = options.open(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line).map_err(write_error)?;
        writer.write_all(b"\n").map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    tracing::debug!(
        file = %path.display(),
        lines = lines.len(),
        replace,
        "wrote instructions"
    );
    Ok(())
}
