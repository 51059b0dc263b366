use crate::io::error::Error;
use crate::model::frame::Frame;
use std::io::Write;

/// Title line written into every artifact, from the original OPTIM tooling.
pub const DEFAULT_TITLE: &str = "AMBER.points";

/// Writes one frame in the columnar XYZ layout consumed by OPTIM.
///
/// Line 1 is the actual frame length (which is short of the structure
/// atom count for an incomplete frame), line 2 the fixed title, then one
/// line per atom: name left-justified in 6 columns, coordinates rendered
/// with 10 decimal places and left-justified in 25 columns each. The last
/// coordinate is unpadded so data lines carry no trailing spaces.
pub fn write<W: Write>(mut writer: W, frame: &Frame, title: &str) -> Result<(), Error> {
    writeln!(writer, "{}", frame.atoms.len())?;
    writeln!(writer, "{title}")?;

    for atom in &frame.atoms {
        let [x, y, z] = atom.position;
        writeln!(
            writer,
            "{:<6}{:<25}{:<25}{}",
            atom.name,
            format!("{x:.10}"),
            format!("{y:.10}"),
            format!("{z:.10}"),
        )?;
    }

    Ok(())
}
