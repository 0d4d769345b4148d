use crate::core::utils::identifiers::infer_element;
use nalgebra::Point3;
use std::fmt;

/// The kind of coordinate record an atom was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// A standard polymer atom (`ATOM`).
    Atom,
    /// A hetero atom (`HETATM`), e.g. ligands, ions and water.
    Hetatm,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Atom => "ATOM",
                Self::Hetatm => "HETATM",
            }
        )
    }
}

/// One `ATOM`/`HETATM` record of a PDB file.
///
/// Each record carries the chain, residue and alternate location it was
/// filed under, so a flat list of them still describes the hierarchy.
/// Values the file leaves out take the conventional defaults (occupancy
/// `1.0`, B-factor `0.0`, no charge).
#[derive(Debug, Clone, PartialEq)]
pub struct PdbAtom {
    /// Whether the record was an `ATOM` or a `HETATM` line.
    pub record_type: RecordType,
    pub serial: usize,
    /// Trimmed atom name (e.g. "CA").
    pub name: String,
    /// Alternate location indicator, `' '` when absent.
    pub alt_loc: char,
    /// Residue name (e.g. "ALA", "HOH").
    pub res_name: String,
    /// Chain identifier, `' '` when absent.
    pub chain_id: char,
    /// Residue sequence number.
    pub res_seq: isize,
    /// Residue insertion code, `' '` when absent.
    pub insertion_code: char,
    /// Orthogonal coordinates in Angstroms.
    pub position: Point3<f64>,
    pub occupancy: f64,
    pub b_factor: f64,
    /// Element symbol, upper case.
    pub element: String,
    pub formal_charge: i8,
}

impl PdbAtom {
    /// Creates an atom record with default values for the optional fields.
    ///
    /// The element is inferred from the name, padded the way the PDB format
    /// aligns names shorter than four characters.
    ///
    /// # Arguments
    ///
    /// * `record_type` - `ATOM` or `HETATM`.
    /// * `serial` - The atom serial number.
    /// * `name` - The atom name.
    /// * `res_name` - The parent residue name.
    /// * `chain_id` - The chain identifier.
    /// * `res_seq` - The residue sequence number.
    /// * `position` - The atom coordinates.
    pub fn new(
        record_type: RecordType,
        serial: usize,
        name: &str,
        res_name: &str,
        chain_id: char,
        res_seq: isize,
        position: Point3<f64>,
    ) -> Self {
        let name = name.trim();
        let padded = if name.len() < 4 {
            format!(" {:<3}", name)
        } else {
            name.to_string()
        };
        let element = infer_element(&padded);
        Self {
            record_type,
            serial,
            name: name.to_string(),
            alt_loc: ' ',
            res_name: res_name.trim().to_string(),
            chain_id,
            res_seq,
            insertion_code: ' ',
            position,
            occupancy: 1.0,
            b_factor: 0.0,
            element,
            formal_charge: 0,
        }
    }

    pub fn is_hetero(&self) -> bool {
        self.record_type == RecordType::Hetatm
    }

    /// Returns `true` if the record carries an alternate location indicator.
    pub fn has_alt_loc(&self) -> bool {
        self.alt_loc != ' '
    }
}

/// The ordered sequence of atom records read from one PDB file.
///
/// Its length is the atom count reported by the reader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomList {
    atoms: Vec<PdbAtom>,
}

impl AtomList {
    pub fn new(atoms: Vec<PdbAtom>) -> Self {
        Self { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PdbAtom> {
        self.atoms.iter()
    }

    pub fn as_slice(&self) -> &[PdbAtom] {
        &self.atoms
    }
}

impl FromIterator<PdbAtom> for AtomList {
    fn from_iter<I: IntoIterator<Item = PdbAtom>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AtomList {
    type Item = &'a PdbAtom;
    type IntoIter = std::slice::Iter<'a, PdbAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
