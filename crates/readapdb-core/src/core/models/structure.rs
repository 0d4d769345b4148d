use super::atom::{AtomList, PdbAtom};
use super::builder::PdbStructureBuilder;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::{Residue, ResidueKind};
use super::residue_spec::ResidueSpec;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("Cannot build a structure from an empty atom list")]
    EmptyAtomList,
    #[error("A chain must be started before a residue")]
    NoOpenChain,
    #[error("A residue must be started before adding atoms")]
    NoOpenResidue,
}

/// A PDB structure: atoms grouped into residues, and residues into chains.
///
/// The structure owns copies of the atom records it was built from. Chains
/// keep the order in which their labels first appear in the atom list, and
/// residues within a chain keep the order in which their
/// (number, insertion code) pair first appears.
#[derive(Debug, Clone, Default)]
pub struct PdbStructure {
    /// Primary storage for atoms, in file order.
    pub(super) atoms: SlotMap<AtomId, PdbAtom>,
    /// Primary storage for residues.
    pub(super) residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains.
    pub(super) chains: SlotMap<ChainId, Chain>,
    /// Parent residue of every atom.
    pub(super) atom_residue: SecondaryMap<AtomId, ResidueId>,
    /// Lookup map from (chain, residue number, insertion code) to residue.
    pub(super) residue_id_map: HashMap<(ChainId, isize, char), ResidueId>,
    /// Lookup map from chain label to chain.
    pub(super) chain_id_map: HashMap<char, ChainId>,
}

impl PdbStructure {
    /// Allocates a structure from a complete atom list.
    ///
    /// Every atom starts (or reopens) the chain named by its chain label and
    /// the residue named by its residue number and insertion code.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atom list produced by the PDB reader.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyAtomList`] if `atoms` is empty.
    pub fn from_atoms(atoms: &AtomList) -> Result<Self, StructureError> {
        if atoms.is_empty() {
            return Err(StructureError::EmptyAtomList);
        }

        let mut builder = PdbStructureBuilder::new();
        for atom in atoms {
            builder
                .start_chain(atom.chain_id)
                .start_residue(atom.res_seq, atom.insertion_code, &atom.res_name)?
                .add_atom(atom.clone())?;
        }
        builder.build()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn atom(&self, id: AtomId) -> Option<&PdbAtom> {
        self.atoms.get(id)
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all atoms in file order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &PdbAtom)> {
        self.atoms.iter()
    }

    /// Returns an iterator over all residues in order of first appearance.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Returns an iterator over all chains in order of first appearance.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Returns the residue an atom belongs to.
    pub fn residue_of(&self, atom_id: AtomId) -> Option<ResidueId> {
        self.atom_residue.get(atom_id).copied()
    }

    /// Finds a chain by its single-character label.
    pub fn find_chain(&self, label: char) -> Option<ChainId> {
        self.chain_id_map.get(&label).copied()
    }

    /// Finds a residue by chain label, residue number and insertion code.
    ///
    /// # Arguments
    ///
    /// * `chain_label` - The label of the chain containing the residue.
    /// * `number` - The residue sequence number.
    /// * `insertion_code` - The insertion code, `' '` for none.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue(
        &self,
        chain_label: char,
        number: isize,
        insertion_code: char,
    ) -> Option<ResidueId> {
        let chain_id = self.find_chain(chain_label)?;
        self.residue_id_map
            .get(&(chain_id, number, insertion_code))
            .copied()
    }

    pub fn find_residue_by_spec(&self, spec: &ResidueSpec) -> Option<ResidueId> {
        self.find_residue(spec.chain, spec.number, spec.insertion_code)
    }

    /// Returns the residues of protein and nucleic acid chains.
    pub fn polymer_residues(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter().filter(|(_, r)| r.kind.is_polymer())
    }

    /// Returns the hetero groups that are neither polymer residues nor water.
    pub fn ligands(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues
            .iter()
            .filter(|(_, r)| r.kind == ResidueKind::Hetero)
    }

    pub fn waters(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues
            .iter()
            .filter(|(_, r)| r.kind == ResidueKind::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::RecordType;
    use crate::core::models::chain::ChainType;
    use nalgebra::Point3;

    fn atom(
        record_type: RecordType,
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
    ) -> PdbAtom {
        PdbAtom::new(
            record_type,
            serial,
            name,
            res_name,
            chain,
            res_seq,
            Point3::new(serial as f64, 0.0, 0.0),
        )
    }

    fn small_complex() -> AtomList {
        let mut ins = atom(RecordType::Atom, 6, "N", "GLY", 'A', 2);
        ins.insertion_code = 'A';
        vec![
            atom(RecordType::Atom, 1, "N", "ALA", 'A', 1),
            atom(RecordType::Atom, 2, "CA", "ALA", 'A', 1),
            atom(RecordType::Atom, 3, "C", "ALA", 'A', 1),
            atom(RecordType::Atom, 4, "N", "GLY", 'A', 2),
            atom(RecordType::Atom, 5, "CA", "GLY", 'A', 2),
            ins,
            atom(RecordType::Atom, 7, "P", "DA", 'B', 1),
            atom(RecordType::Hetatm, 8, "ZN", "ZN", 'A', 101),
            atom(RecordType::Hetatm, 9, "O", "HOH", 'W', 201),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn from_atoms_rejects_empty_list() {
        let result = PdbStructure::from_atoms(&AtomList::default());
        assert_eq!(result.unwrap_err(), StructureError::EmptyAtomList);
    }

    #[test]
    fn from_atoms_counts_chains_residues_and_atoms() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        assert_eq!(structure.atom_count(), 9);
        assert_eq!(structure.chain_count(), 3);
        // ALA1, GLY2, GLY2A, ZN101 on A; DA1 on B; HOH201 on W
        assert_eq!(structure.residue_count(), 6);
    }

    #[test]
    fn chains_keep_order_of_first_appearance() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let labels: Vec<char> = structure.chains_iter().map(|(_, c)| c.label).collect();
        assert_eq!(labels, vec!['A', 'B', 'W']);
    }

    #[test]
    fn hetero_atoms_of_reappearing_chain_join_existing_chain() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let chain_a = structure.chain(structure.find_chain('A').unwrap()).unwrap();
        let names: Vec<&str> = chain_a
            .residues()
            .iter()
            .map(|&id| structure.residue(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["ALA", "GLY", "GLY", "ZN"]);
        assert_eq!(chain_a.chain_type, ChainType::Protein);
    }

    #[test]
    fn insertion_codes_separate_residues() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let plain = structure.find_residue('A', 2, ' ').unwrap();
        let inserted = structure.find_residue('A', 2, 'A').unwrap();
        assert_ne!(plain, inserted);
        assert_eq!(structure.residue(plain).unwrap().atom_count(), 2);
        assert_eq!(structure.residue(inserted).unwrap().atom_count(), 1);
    }

    #[test]
    fn residues_are_classified_and_chain_types_derived() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let dna = structure.find_residue('B', 1, ' ').unwrap();
        assert_eq!(structure.residue(dna).unwrap().kind, ResidueKind::Dna);
        let chain_b = structure.find_chain('B').unwrap();
        assert_eq!(structure.chain(chain_b).unwrap().chain_type, ChainType::DNA);
        let chain_w = structure.find_chain('W').unwrap();
        assert_eq!(structure.chain(chain_w).unwrap().chain_type, ChainType::Water);
    }

    #[test]
    fn atoms_keep_file_order_and_know_their_residue() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let serials: Vec<usize> = structure.atoms_iter().map(|(_, a)| a.serial).collect();
        assert_eq!(serials, (1..=9).collect::<Vec<_>>());

        let (zn_id, _) = structure
            .atoms_iter()
            .find(|(_, a)| a.name == "ZN")
            .unwrap();
        let residue_id = structure.residue_of(zn_id).unwrap();
        assert_eq!(structure.residue(residue_id).unwrap().number, 101);
    }

    #[test]
    fn find_residue_by_spec_uses_chain_number_and_insertion() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let spec: ResidueSpec = "A2A".parse().unwrap();
        let residue_id = structure.find_residue_by_spec(&spec).unwrap();
        let residue = structure.residue(residue_id).unwrap();
        assert_eq!(residue.spec(), spec);
        assert!(residue.get_atom_id_by_name("N").is_some());
    }

    #[test]
    fn lookups_for_missing_records_return_none() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        assert!(structure.find_chain('Z').is_none());
        assert!(structure.find_residue('A', 99, ' ').is_none());
        assert!(structure.find_residue('Z', 1, ' ').is_none());
    }

    #[test]
    fn blank_chain_labels_form_their_own_chain() {
        let atoms: AtomList = vec![
            atom(RecordType::Atom, 1, "CA", "ALA", ' ', 1),
            atom(RecordType::Atom, 2, "CA", "GLY", ' ', 2),
        ]
        .into_iter()
        .collect();
        let structure = PdbStructure::from_atoms(&atoms).unwrap();
        assert_eq!(structure.chain_count(), 1);
        let spec: ResidueSpec = "2".parse().unwrap();
        assert!(structure.find_residue_by_spec(&spec).is_some());
    }

    #[test]
    fn ligands_and_waters_are_separated_from_polymer_residues() {
        let structure = PdbStructure::from_atoms(&small_complex()).unwrap();
        let polymer: Vec<&str> = structure
            .polymer_residues()
            .map(|(_, r)| r.name.as_str())
            .collect();
        let ligands: Vec<&str> = structure.ligands().map(|(_, r)| r.name.as_str()).collect();
        let waters: Vec<&str> = structure.waters().map(|(_, r)| r.name.as_str()).collect();

        assert_eq!(polymer, vec!["ALA", "GLY", "GLY", "DA"]);
        assert_eq!(ligands, vec!["ZN"]);
        assert_eq!(waters, vec!["HOH"]);
    }
}
