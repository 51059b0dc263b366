use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

use rst2xyz::ConvertError;
use rst2xyz::io::error::Error as FormatError;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    if let Some(e) = err.downcast_ref::<ConvertError>() {
        return match e {
            ConvertError::Format(f) => format_hints(f),
            ConvertError::Io { source } => io_hints(source),
            ConvertError::IncompleteFrame { .. } => vec![
                "The restart file carries fewer coordinates than the structure has atoms".into(),
                "Rerun without --strict to emit the short frame instead".into(),
            ],
        };
    }

    if let Some(f) = err.downcast_ref::<FormatError>() {
        return format_hints(f);
    }

    if let Some(source) = err.downcast_ref::<io::Error>() {
        return io_hints(source);
    }

    Vec::new()
}

fn format_hints(err: &FormatError) -> Vec<String> {
    match err {
        FormatError::Io { source } => io_hints(source),

        FormatError::MalformedRecord { line, .. } => vec![
            format!("Inspect the structure file around line {line}"),
            "ATOM records must reach column 16, where the atom name ends".into(),
        ],

        FormatError::NumericField { line, .. } => vec![
            format!("Inspect the restart file around line {line}"),
            "Coordinate fields are 12 characters wide, 6 or 3 per line".into(),
        ],

        FormatError::FrameIndexNotFound { .. } => vec![
            "The frame index is the first digit run in the file name".into(),
            "Rename the restart file to carry one, e.g. frame.17.rst".into(),
        ],
    }
}

fn io_hints(err: &io::Error) -> Vec<String> {
    match err.kind() {
        io::ErrorKind::NotFound => vec![
            "Check that the path exists and is spelled correctly".into(),
            "Manifest entries are resolved relative to the working directory".into(),
        ],
        io::ErrorKind::PermissionDenied => vec![
            "Check read permission on the inputs and write permission on the output directory"
                .into(),
        ],
        _ => Vec::new(),
    }
}
