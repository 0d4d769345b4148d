use crate::core::models::residue::ResidueKind;
use phf::{Set, phf_set};

static AMINO_ACID_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "ASX", "GLX", "MSE", "SEC", "PYL", "UNK",
    "CYX", "HSD", "HSE", "HSP", "HID", "HIE", "HIP",
};

static DNA_NUCLEOTIDE_NAMES: Set<&'static str> = phf_set! {
    "DA", "DC", "DG", "DT", "DI", "DU",
};

static RNA_NUCLEOTIDE_NAMES: Set<&'static str> = phf_set! {
    "A", "C", "G", "U", "I",
};

static WATER_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD", "TIP", "SOL",
};

static TWO_LETTER_ELEMENTS: Set<&'static str> = phf_set! {
    "HE", "LI", "BE", "NE", "NA", "MG", "AL", "SI", "CL", "AR",
    "CA", "SC", "TI", "CR", "MN", "FE", "CO", "NI", "CU", "ZN",
    "GA", "GE", "AS", "SE", "BR", "KR", "RB", "SR", "ZR", "NB",
    "MO", "TC", "RU", "RH", "PD", "AG", "CD", "IN", "SN", "SB",
    "TE", "XE", "CS", "BA", "LA", "CE", "PR", "ND", "SM", "EU",
    "GD", "TB", "DY", "HO", "ER", "TM", "YB", "LU", "HF", "TA",
    "RE", "OS", "IR", "PT", "AU", "HG", "TL", "PB", "BI", "PO",
    "AT", "RN", "FR", "RA", "AC", "TH", "PA", "NP", "PU", "AM",
    "CM",
};

/// Classifies a residue by its name using the standard residue tables.
///
/// Names outside the amino acid, nucleotide and water tables are treated as
/// hetero groups (ligands, ions, modified residues).
pub fn classify_residue(res_name: &str) -> ResidueKind {
    let name = res_name.trim().to_ascii_uppercase();
    if AMINO_ACID_NAMES.contains(name.as_str()) {
        ResidueKind::AminoAcid
    } else if DNA_NUCLEOTIDE_NAMES.contains(name.as_str()) {
        ResidueKind::Dna
    } else if RNA_NUCLEOTIDE_NAMES.contains(name.as_str()) {
        ResidueKind::Rna
    } else if WATER_NAMES.contains(name.as_str()) {
        ResidueKind::Water
    } else {
        ResidueKind::Hetero
    }
}

/// Infers an element symbol from an atom name as laid out in columns 13-16.
///
/// The PDB format right-justifies one-letter element symbols into column 14,
/// so a name starting with a space or a digit (e.g. `" CA "`, `"1HB "`) takes
/// its first letter. Four-character names starting with `H` are hydrogens.
/// Otherwise a recognised two-letter symbol in columns 13-14 wins.
pub fn infer_element(raw_name: &str) -> String {
    let Some(first) = raw_name.chars().next() else {
        return String::new();
    };

    let first_letter = || {
        raw_name
            .chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    };

    if first == ' ' || first.is_ascii_digit() {
        return first_letter();
    }

    let is_full_width = raw_name.len() >= 4 && !raw_name.contains(' ');
    if is_full_width && first.eq_ignore_ascii_case(&'H') {
        return "H".to_string();
    }

    let candidate: String = raw_name
        .chars()
        .take(2)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if TWO_LETTER_ELEMENTS.contains(candidate.as_str()) {
        return candidate;
    }

    first_letter()
}
