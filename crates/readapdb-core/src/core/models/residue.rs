use super::ids::{AtomId, ChainId};
use super::residue_spec::ResidueSpec;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueKind {
    AminoAcid, // Standard or common modified amino acid (ALA, MSE, ...)
    Dna,       // Deoxyribonucleotide (DA, DC, DG, DT, ...)
    Rna,       // Ribonucleotide (A, C, G, U, ...)
    Water,     // Solvent water (HOH, WAT, ...)
    Hetero,    // Anything else: ligands, ions, unknown groups
}

impl ResidueKind {
    /// Returns `true` for residues that make up protein or nucleic acid chains.
    pub fn is_polymer(self) -> bool {
        matches!(
            self,
            ResidueKind::AminoAcid | ResidueKind::Dna | ResidueKind::Rna
        )
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueKind::AminoAcid => "AminoAcid",
                ResidueKind::Dna => "DNA",
                ResidueKind::Rna => "RNA",
                ResidueKind::Water => "Water",
                ResidueKind::Hetero => "Hetero",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,                      // Residue sequence number from source file
    pub insertion_code: char,               // Insertion code, ' ' when absent
    pub name: String,                       // Name of the residue (e.g., "ALA", "HOH")
    pub kind: ResidueKind,                  // Classification derived from the name
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) chain_label: char,           // Label of the parent chain, for specs
    pub(crate) atoms: Vec<AtomId>,          // Atoms of this residue in file order
    atom_name_map: HashMap<String, AtomId>, // First atom carrying each name
}

impl Residue {
    pub(crate) fn new(
        number: isize,
        insertion_code: char,
        name: &str,
        kind: ResidueKind,
        chain_id: ChainId,
        chain_label: char,
    ) -> Self {
        Self {
            number,
            insertion_code,
            name: name.to_string(),
            kind,
            chain_id,
            chain_label,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map
            .entry(atom_name.to_string())
            .or_insert(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the first atom of this residue with the given name.
    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    /// The compact label of this residue, e.g. `A12` or `A12B`.
    pub fn spec(&self) -> ResidueSpec {
        ResidueSpec::new(self.chain_label, self.number, self.insertion_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::{AtomId, ChainId};
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(10, ' ', "GLY", ResidueKind::AminoAcid, chain_id, 'A');
        assert_eq!(residue.number, 10);
        assert_eq!(residue.insertion_code, ' ');
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.kind, ResidueKind::AminoAcid);
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("CA").is_none());
    }

    #[test]
    fn add_atom_keeps_file_order() {
        let mut residue =
            Residue::new(5, ' ', "ALA", ResidueKind::AminoAcid, dummy_chain_id(2), 'A');
        let n = dummy_atom_id(1);
        let ca = dummy_atom_id(2);
        residue.add_atom("N", n);
        residue.add_atom("CA", ca);
        assert_eq!(residue.atoms(), &[n, ca]);
        assert_eq!(residue.atom_count(), 2);
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(ca));
    }

    #[test]
    fn duplicate_atom_names_resolve_to_first_atom() {
        let mut residue =
            Residue::new(7, ' ', "SER", ResidueKind::AminoAcid, dummy_chain_id(3), 'A');
        let first = dummy_atom_id(10);
        let second = dummy_atom_id(11);
        residue.add_atom("OG", first);
        residue.add_atom("OG", second);
        assert_eq!(residue.atoms(), &[first, second]);
        assert_eq!(residue.get_atom_id_by_name("OG"), Some(first));
    }

    #[test]
    fn spec_includes_chain_and_insertion_code() {
        let residue = Residue::new(
            52,
            'A',
            "LEU",
            ResidueKind::AminoAcid,
            dummy_chain_id(4),
            'H',
        );
        assert_eq!(residue.spec().to_string(), "H52A");
    }

    #[test]
    fn residue_kind_display_outputs_expected_strings() {
        assert_eq!(ResidueKind::AminoAcid.to_string(), "AminoAcid");
        assert_eq!(ResidueKind::Dna.to_string(), "DNA");
        assert_eq!(ResidueKind::Hetero.to_string(), "Hetero");
    }

    #[test]
    fn polymer_kinds_exclude_water_and_hetero_groups() {
        assert!(ResidueKind::AminoAcid.is_polymer());
        assert!(ResidueKind::Rna.is_polymer());
        assert!(!ResidueKind::Water.is_polymer());
        assert!(!ResidueKind::Hetero.is_polymer());
    }
}
