use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Asks the operator for a path on stderr, reading the answer from stdin.
pub fn prompt_path(label: &str) -> Result<PathBuf> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{label}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading interactive input")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("no path entered for: {label}");
    }

    Ok(PathBuf::from(trimmed))
}
