//! Output mode: printing a hook file

use crate::error::{HookError, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

/// Copy the hook file to `out` line by line
///
/// Every line, including the last, is terminated with `\n`. Content is
/// copied as bytes, so hooks that are not valid UTF-8 print unchanged.
///
/// # Errors
///
/// Returns [`HookError::FileRead`] if the file cannot be opened or read, or
/// its lines cannot be written to `out`
pub fn print_hook_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let read_error = |source| HookError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(read_error)?;
        out.write_all(&line).map_err(read_error)?;
        out.write_all(b"\n").map_err(read_error)?;
    }
    out.flush().map_err(read_error)
}
