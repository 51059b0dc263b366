use crate::io::{Format, error::Error};
use std::io::BufRead;

/// Width of one fixed-point coordinate field.
const FIELD_WIDTH: usize = 12;

/// Payload line lengths carrying two atoms and one atom respectively.
const DOUBLE_ATOM_LINE: usize = 6 * FIELD_WIDTH;
const SINGLE_ATOM_LINE: usize = 3 * FIELD_WIDTH;

/// Reads one restart snapshot, returning its coordinate triples in file
/// order.
///
/// The first two lines (title and declared atom count) are skipped
/// unconditionally; the declared count is never checked against the number
/// of triples actually parsed. Payload lines are classified by exact
/// length after stripping the line terminator: 72 characters yield two
/// triples, 36 yield one, and anything else contributes nothing. Fields
/// are sliced by column, so interior whitespace is significant.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<[f64; 3]>, Error> {
    let mut triples = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i < 2 {
            continue;
        }

        // lines() strips '\n'; a '\r' remnant from CRLF input is part of
        // the terminator, not the record.
        let line = line.strip_suffix('\r').unwrap_or(&line);

        // Fields are byte-indexed; a non-ASCII line cannot be a valid
        // fixed-width coordinate record.
        let fields = match line.len() {
            DOUBLE_ATOM_LINE if line.is_ascii() => 6,
            SINGLE_ATOM_LINE if line.is_ascii() => 3,
            _ => 0,
        };

        for t in 0..fields / 3 {
            let mut triple = [0.0; 3];
            for (k, value) in triple.iter_mut().enumerate() {
                let start = (t * 3 + k) * FIELD_WIDTH;
                let raw = &line[start..start + FIELD_WIDTH];
                *value = raw
                    .trim()
                    .parse()
                    .map_err(|_| Error::numeric(Format::Restart, i + 1, raw.trim()))?;
            }
            triples.push(triple);
        }
    }

    Ok(triples)
}
