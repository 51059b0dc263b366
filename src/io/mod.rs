use std::fmt;
use std::path::Path;

pub mod error;

pub mod pdb;
pub mod restart;
pub mod xyz;

/// File formats handled by this crate, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdb,
    Restart,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdb => write!(f, "PDB"),
            Format::Restart => write!(f, "restart"),
        }
    }
}

/// Extracts the frame index from a restart path: the first run of decimal
/// digits in its file-name component.
pub fn frame_index(path: &Path) -> Result<u64, error::Error> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut digits = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .peekable();

    if digits.peek().is_none() {
        return Err(error::Error::FrameIndexNotFound { name });
    }

    // A digit run too long for u64 saturates rather than failing; the
    // index is an identifier, not arithmetic input.
    Ok(digits.fold(0u64, |acc, c| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(c as u8 - b'0'))
    }))
}
