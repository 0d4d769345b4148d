use crate::core::io::options::ReadOptions;
use crate::core::io::pdb::{PdbContents, PdbError, PdbFile};
use crate::core::io::traits::CoordinateFile;
use crate::core::models::header::PdbHeader;
use crate::core::models::structure::{PdbStructure, StructureError};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The step of the load pipeline at which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStage {
    Open,
    Parse,
    Structure,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LoadStage::Open => "open",
                LoadStage::Parse => "parse",
                LoadStage::Structure => "structure",
            }
        )
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{path}' as PDB: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Failed to build structure from '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: StructureError,
    },
}

impl LoadError {
    pub fn stage(&self) -> LoadStage {
        match self {
            LoadError::Open { .. } => LoadStage::Open,
            LoadError::Parse { .. } => LoadStage::Parse,
            LoadError::Structure { .. } => LoadStage::Structure,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Structure { path, .. } => path,
        }
    }
}

/// The outcome of a successful load.
#[derive(Debug)]
pub struct LoadReport {
    /// Number of atom records in the parsed atom list.
    pub atom_count: usize,
    pub header: PdbHeader,
    /// The structure allocated from the atom list.
    pub structure: PdbStructure,
}

/// Opens a PDB file, reads its atom list, and allocates a structure from it.
///
/// Each stage runs only if the previous one succeeded. The file is held only
/// while its atom records are read and is released before the structure is
/// allocated, on success and failure alike.
///
/// # Arguments
///
/// * `path` - The PDB file to load.
/// * `options` - Which records the reader keeps.
///
/// # Errors
///
/// Returns a [`LoadError`] tagged with the stage that failed.
#[instrument(skip_all, name = "load_workflow", fields(path = %path.display()))]
pub fn run(path: &Path, options: &ReadOptions) -> Result<LoadReport, LoadError> {
    debug!("Opening coordinate file.");
    let PdbContents { header, atoms } = {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        PdbFile::read_from(&mut reader, options).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };
    info!(
        identifier = header.identifier.as_deref().unwrap_or("-"),
        "Read {} atom record(s).",
        atoms.len()
    );

    let structure = PdbStructure::from_atoms(&atoms).map_err(|source| LoadError::Structure {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Allocated structure with {} chain(s) and {} residue(s).",
        structure.chain_count(),
        structure.residue_count()
    );

    Ok(LoadReport {
        atom_count: atoms.len(),
        header,
        structure,
    })
}
