//! Converts AMBER restart snapshots into per-frame XYZ coordinate records
//! for OPTIM-style geometry and minimization tools.
//!
//! # Features
//!
//! - **Structure parsing** — recovers the canonical atom-name ordering from
//!   the fixed columns of PDB `ATOM` records
//! - **Restart parsing** — slices 12-character fixed-width coordinate fields
//!   from 72- and 36-character restart payload lines
//! - **Frame assembly** — pairs names with coordinate triples by position,
//!   absorbing truncated restart files by dropping unmatched trailing atoms
//! - **Batch conversion** — walks a manifest of restart files and emits one
//!   XYZ artifact per frame, keyed by the index embedded in each filename
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use rst2xyz::{Frame, io};
//!
//! let pdb = "\
//! ATOM      1  CA  ALA A   1      11.104   6.134  -6.504\n\
//! ATOM      2  C   ALA A   1      12.560   6.351  -6.104\n";
//! let structure = io::pdb::read(Cursor::new(pdb))?;
//! assert_eq!(structure.len(), 2);
//!
//! let rst = format!(
//!     "title\n    2\n{:>12.7}{:>12.7}{:>12.7}{:>12.7}{:>12.7}{:>12.7}\n",
//!     11.104, 6.134, -6.504, 12.560, 6.351, -6.104,
//! );
//! let coords = io::restart::read(Cursor::new(rst))?;
//! assert_eq!(coords.len(), 2);
//!
//! let frame = Frame::pair(1, &structure, coords);
//! assert!(frame.is_complete(structure.len()));
//!
//! let mut out = Vec::new();
//! io::xyz::write(&mut out, &frame, io::xyz::DEFAULT_TITLE)?;
//! assert!(String::from_utf8(out)?.starts_with("2\nAMBER.points\nCA"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — readers for PDB structures and restart snapshots, plus the
//!   XYZ frame writer and frame-index extraction
//! - [`Batch`] — manifest-driven conversion pipeline
//! - [`Frame`] / [`StructureIndex`] — in-memory frame model

mod convert;
mod model;

pub mod io;

pub use model::frame::{Frame, FrameAtom};
pub use model::structure::StructureIndex;

pub use convert::{Batch, BatchOutcome, ConvertConfig, Failure, PairingMode};

pub use convert::Error as ConvertError;
