use crate::io::{Format, error::Error};
use crate::model::structure::StructureIndex;
use std::io::BufRead;
use std::ops::Range;

/// Atom name columns 13-16 (1-indexed) of an `ATOM` record.
const NAME_COLUMNS: Range<usize> = 12..16;

/// Reads a PDB structure file, returning the ordered atom-name index.
///
/// A line contributes an atom name only when its first whitespace token is
/// exactly `ATOM`. The name is sliced from fixed columns rather than
/// tokenized, so names abutting neighbouring fields survive intact; outer
/// whitespace is trimmed, embedded whitespace is kept. Every other line is
/// ignored.
pub fn read<R: BufRead>(reader: R) -> Result<StructureIndex, Error> {
    let mut names = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.split_whitespace().next() != Some("ATOM") {
            continue;
        }

        let raw = line.get(NAME_COLUMNS).ok_or_else(|| {
            Error::malformed(
                Format::Pdb,
                i + 1,
                "ATOM record too short for name columns 13-16",
            )
        })?;

        names.push(raw.trim().to_string());
    }

    Ok(StructureIndex::new(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn extracts_names_from_fixed_columns() {
        let pdb = "\
REMARK generated by ambpdb
ATOM      1  CA  ALA A   1      11.104   6.134  -6.504
ATOM      2  C   ALA A   1      12.560   6.351  -6.104
TER
ATOM      3 HG12 ILE A   2       1.000   2.000   3.000
END
";
        let index = read(Cursor::new(pdb)).unwrap();
        assert_eq!(index.names(), ["CA", "C", "HG12"]);
    }

    #[test]
    fn first_token_must_be_the_atom_marker() {
        let pdb = "\
HETATM    1  O   HOH A   1       0.000   0.000   0.000
 ATOMIC LINE THAT DOES NOT QUALIFY
ATOM      1  N   GLY A   1       0.000   0.000   0.000

";
        let index = read(Cursor::new(pdb)).unwrap();
        assert_eq!(index.names(), ["N"]);
    }

    #[test]
    fn keeps_duplicates_in_file_order() {
        let pdb = "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000
ATOM      2  CA  ALA A   2       1.000   0.000   0.000
";
        let index = read(Cursor::new(pdb)).unwrap();
        assert_eq!(index.names(), ["CA", "CA"]);
    }

    #[test]
    fn short_atom_record_is_malformed() {
        let err = read(Cursor::new("ATOM      1")).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord {
                format: Format::Pdb,
                line: 1,
                ..
            }
        ));
    }
}
