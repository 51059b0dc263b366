use crate::model::structure::StructureIndex;

/// One atom of an assembled frame: its structure-file name and Cartesian
/// position in Ångström.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAtom {
    pub name: String,
    pub position: [f64; 3],
}

/// A single snapshot's paired atom-name/coordinate data, keyed by the
/// integer index extracted from its restart filename.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub atoms: Vec<FrameAtom>,
}

impl Frame {
    /// Pairs coordinate triple `i` with atom `i` of the structure index.
    ///
    /// The frame length is `min(N, M)` for N structure atoms and M parsed
    /// triples: a short coordinate sequence drops the unmatched trailing
    /// atoms (the last restart of a series may be truncated), and surplus
    /// triples beyond N are ignored.
    pub fn pair(index: u64, structure: &StructureIndex, coords: Vec<[f64; 3]>) -> Self {
        let atoms = structure
            .names()
            .iter()
            .zip(coords)
            .map(|(name, position)| FrameAtom {
                name: name.clone(),
                position,
            })
            .collect();

        Self { index, atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// A frame is complete when every structure atom received a coordinate.
    pub fn is_complete(&self, structure_len: usize) -> bool {
        self.atoms.len() == structure_len
    }
}
