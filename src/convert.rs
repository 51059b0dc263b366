use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::io::{self, xyz};
use crate::model::frame::Frame;
use crate::model::structure::StructureIndex;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] io::error::Error),

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error(
        "frame {index} is incomplete: structure defines {expected} atoms \
         but only {parsed} coordinate triples were parsed"
    )]
    IncompleteFrame {
        index: u64,
        expected: usize,
        parsed: usize,
    },
}

/// How to pair a coordinate sequence that is shorter than the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// Drop unmatched trailing atoms and emit a short frame.
    #[default]
    Truncate,
    /// Fail with [`Error::IncompleteFrame`] instead of truncating.
    Strict,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub pairing: PairingMode,
    pub output_dir: PathBuf,
    /// Artifact names are `<basename>.<frame index>.xyz`.
    pub basename: String,
    /// Literal written as line 2 of every artifact.
    pub title: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            pairing: PairingMode::default(),
            output_dir: PathBuf::from("."),
            basename: xyz::DEFAULT_TITLE.to_string(),
            title: xyz::DEFAULT_TITLE.to_string(),
        }
    }
}

/// Record of one failed manifest entry from a keep-going run.
#[derive(Debug)]
pub struct Failure {
    pub entry: PathBuf,
    pub error: Error,
}

/// Result of a whole batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl BatchOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Manifest-driven conversion pipeline.
///
/// The structure file is parsed once at load time; the resulting
/// [`StructureIndex`] is shared read-only across every frame of the run.
/// Each manifest entry is then processed independently: extract the frame
/// index from the filename, parse the restart payload, pair it against the
/// structure, and write one XYZ artifact.
pub struct Batch {
    structure: StructureIndex,
    entries: Vec<PathBuf>,
    config: ConvertConfig,
}

impl Batch {
    /// Reads the manifest and structure file and prepares a run.
    ///
    /// Manifest entries are one filename per line; blank lines are
    /// skipped. Entry paths are used as written, relative to the current
    /// working directory.
    pub fn load(manifest: &Path, structure: &Path, config: ConvertConfig) -> Result<Self, Error> {
        let entries = fs::read_to_string(manifest)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();

        let structure = io::pdb::read(BufReader::new(File::open(structure)?))?;

        Ok(Self {
            structure,
            entries,
            config,
        })
    }

    pub fn structure(&self) -> &StructureIndex {
        &self.structure
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Converts a single restart file, returning the artifact path.
    pub fn process(&self, entry: &Path) -> Result<PathBuf, Error> {
        let index = io::frame_index(entry)?;
        let coords = io::restart::read(BufReader::new(File::open(entry)?))?;

        if self.config.pairing == PairingMode::Strict && coords.len() < self.structure.len() {
            return Err(Error::IncompleteFrame {
                index,
                expected: self.structure.len(),
                parsed: coords.len(),
            });
        }

        let frame = Frame::pair(index, &self.structure, coords);

        let artifact = self
            .config
            .output_dir
            .join(format!("{}.{}.xyz", self.config.basename, frame.index));
        let mut writer = BufWriter::new(File::create(&artifact)?);
        io::xyz::write(&mut writer, &frame, &self.config.title)?;
        // Drop would swallow the flush error and report a truncated
        // artifact as success.
        writer.flush()?;

        Ok(artifact)
    }

    /// Processes every entry in manifest order.
    ///
    /// When `keep_going` is false the run stops at the first failure,
    /// which is still recorded in the outcome; already-written artifacts
    /// are never rolled back.
    pub fn run(&self, keep_going: bool) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for entry in &self.entries {
            match self.process(entry) {
                Ok(path) => outcome.written.push(path),
                Err(error) => {
                    outcome.failures.push(Failure {
                        entry: entry.clone(),
                        error,
                    });
                    if !keep_going {
                        break;
                    }
                }
            }
        }

        outcome
    }
}
