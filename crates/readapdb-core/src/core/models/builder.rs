use super::atom::PdbAtom;
use super::chain::{Chain, ChainType};
use super::ids::{ChainId, ResidueId};
use super::residue::Residue;
use super::structure::{PdbStructure, StructureError};
use crate::core::utils::identifiers::classify_residue;
use tracing::trace;

/// Incrementally assembles a [`PdbStructure`] from atoms fed in file order.
///
/// Chains and residues are opened with `start_chain`/`start_residue`; an
/// identifier that was seen before reopens the existing record rather than
/// creating a duplicate.
pub struct PdbStructureBuilder {
    structure: PdbStructure,

    // --- Builder-specific state for efficient construction ---
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl Default for PdbStructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdbStructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: PdbStructure::default(),
            current_chain: None,
            current_residue: None,
        }
    }

    pub fn start_chain(&mut self, label: char) -> &mut Self {
        let structure = &mut self.structure;
        let chain_id = *structure
            .chain_id_map
            .entry(label)
            .or_insert_with(|| structure.chains.insert(Chain::new(label)));
        if self.current_chain != Some(chain_id) {
            self.current_residue = None;
        }
        self.current_chain = Some(chain_id);
        self
    }

    pub fn start_residue(
        &mut self,
        number: isize,
        insertion_code: char,
        name: &str,
    ) -> Result<&mut Self, StructureError> {
        let chain_id = self.current_chain.ok_or(StructureError::NoOpenChain)?;
        let structure = &mut self.structure;
        let label = structure.chains[chain_id].label;

        let residue_id = *structure
            .residue_id_map
            .entry((chain_id, number, insertion_code))
            .or_insert_with(|| {
                let residue = Residue::new(
                    number,
                    insertion_code,
                    name,
                    classify_residue(name),
                    chain_id,
                    label,
                );
                let residue_id = structure.residues.insert(residue);
                structure.chains[chain_id].residues.push(residue_id);
                residue_id
            });

        if structure.residues[residue_id].name != name {
            trace!(
                "Residue {} already named '{}'; ignoring name '{}'.",
                structure.residues[residue_id].spec(),
                structure.residues[residue_id].name,
                name
            );
        }

        self.current_residue = Some(residue_id);
        Ok(self)
    }

    pub fn add_atom(&mut self, atom: PdbAtom) -> Result<&mut Self, StructureError> {
        let residue_id = self.current_residue.ok_or(StructureError::NoOpenResidue)?;
        let structure = &mut self.structure;

        let name = atom.name.clone();
        let atom_id = structure.atoms.insert(atom);
        structure.atom_residue.insert(atom_id, residue_id);
        structure.residues[residue_id].add_atom(&name, atom_id);
        Ok(self)
    }

    /// Finalizes the structure, deriving each chain's type from its residues.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::EmptyAtomList`] if no atom was added.
    pub fn build(mut self) -> Result<PdbStructure, StructureError> {
        if self.structure.atoms.is_empty() {
            return Err(StructureError::EmptyAtomList);
        }

        let PdbStructure {
            chains, residues, ..
        } = &mut self.structure;
        for (_, chain) in chains.iter_mut() {
            chain.chain_type = ChainType::from_residue_kinds(
                chain.residues.iter().map(|&residue_id| residues[residue_id].kind),
            );
        }

        Ok(self.structure)
    }
}
