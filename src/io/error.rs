use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed {format} record at line {line}: {details}")]
    MalformedRecord {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("invalid numeric field '{field}' at line {line} of {format} data")]
    NumericField {
        format: Format,
        line: usize,
        field: String,
    },

    #[error("no frame index digits found in file name '{name}'")]
    FrameIndexNotFound { name: String },
}

impl Error {
    pub fn malformed(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::MalformedRecord {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn numeric(format: Format, line: usize, field: impl Into<String>) -> Self {
        Self::NumericField {
            format,
            line,
            field: field.into(),
        }
    }
}
