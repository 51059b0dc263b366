/// Run-wide ordered list of atom names parsed from the structure file.
///
/// Position `i` names atom `i` of every frame produced during the run.
/// Names are not required to be unique; file order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructureIndex {
    names: Vec<String>,
}

impl StructureIndex {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
