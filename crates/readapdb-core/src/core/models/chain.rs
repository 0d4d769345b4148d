use super::ids::ResidueId;
use super::residue::ResidueKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Protein,
    DNA,
    RNA,
    Ligand,
    Water,
    Other,
}

impl ChainType {
    /// Derives the chain type from the kinds of the residues it contains.
    ///
    /// Any amino acid makes a protein chain; failing that, nucleotides decide
    /// between DNA and RNA. A chain made only of water is a water chain, and
    /// any remaining hetero group makes it a ligand chain.
    pub fn from_residue_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ResidueKind>,
    {
        let (mut protein, mut dna, mut rna, mut water, mut hetero) =
            (false, false, false, false, false);
        for kind in kinds {
            match kind {
                ResidueKind::AminoAcid => protein = true,
                ResidueKind::Dna => dna = true,
                ResidueKind::Rna => rna = true,
                ResidueKind::Water => water = true,
                ResidueKind::Hetero => hetero = true,
            }
        }

        if protein {
            ChainType::Protein
        } else if dna {
            ChainType::DNA
        } else if rna {
            ChainType::RNA
        } else if hetero {
            ChainType::Ligand
        } else if water {
            ChainType::Water
        } else {
            ChainType::Other
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChainType::Protein => "Protein",
                ChainType::DNA => "DNA",
                ChainType::RNA => "RNA",
                ChainType::Ligand => "Ligand",
                ChainType::Water => "Water",
                ChainType::Other => "Other",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub label: char,                     // Chain identifier (e.g., 'A', 'B', ' ')
    pub chain_type: ChainType,           // Type derived from the residues
    pub(crate) residues: Vec<ResidueId>, // Residues of this chain in order of appearance
}

impl Chain {
    pub(crate) fn new(label: char) -> Self {
        Self {
            label,
            chain_type: ChainType::Other,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}
