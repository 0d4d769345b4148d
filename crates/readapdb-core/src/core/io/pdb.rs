use super::options::{AlternateSelection, ReadOptions};
use super::traits::CoordinateFile;
use crate::core::models::atom::{AtomList, PdbAtom, RecordType};
use crate::core::models::header::PdbHeader;
use nalgebra::Point3;
use pdbtbx::{Format, PDB, StrictnessLevel};
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, BufReader, Read};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid PDB content: {}", .messages.join("; "))]
    Invalid { messages: Vec<String> },

    #[error("Model {requested} not found (the file has {available} model(s))")]
    ModelNotFound { requested: usize, available: usize },

    #[error("No atom records found")]
    NoAtoms,
}

/// Everything the reader keeps from one PDB file.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbContents {
    pub header: PdbHeader,
    pub atoms: AtomList,
}

/// Reader for the PDB coordinate format, backed by `pdbtbx`.
pub struct PdbFile;

/// Reads the whole stream as text, one character per byte.
///
/// PDB is a fixed-column ASCII format. Free-text records sometimes carry
/// Latin-1 or UTF-8 names, so any byte outside ASCII becomes `?` and every
/// column keeps its position.
fn read_text(reader: &mut impl BufRead) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let replaced = bytes.iter().filter(|b| !b.is_ascii()).count();
    if replaced > 0 {
        debug!("Replaced {} non-ASCII byte(s) in the input.", replaced);
    }
    Ok(bytes
        .into_iter()
        .map(|b| if b.is_ascii() { b as char } else { '?' })
        .collect())
}

fn parse_text(text: &str) -> Result<PDB, PdbError> {
    let (pdb, warnings) = pdbtbx::ReadOptions::default()
        .set_format(Format::Pdb)
        .set_level(StrictnessLevel::Loose)
        .read_raw(BufReader::new(text.as_bytes()))
        .map_err(|errors| PdbError::Invalid {
            messages: errors.iter().map(ToString::to_string).collect(),
        })?;
    for warning in &warnings {
        trace!("{}", warning);
    }
    if !warnings.is_empty() {
        debug!("Parser reported {} warning(s).", warnings.len());
    }
    Ok(pdb)
}

fn header_of(pdb: &PDB) -> PdbHeader {
    let resolution = pdb
        .remarks()
        .filter(|(number, _)| *number == 2)
        .find_map(|(_, text)| PdbHeader::resolution_from_remark(text));
    PdbHeader {
        identifier: pdb.identifier.clone(),
        resolution,
        model_count: pdb.model_count(),
    }
}

fn first_char(value: Option<&str>) -> char {
    value.and_then(|v| v.chars().next()).unwrap_or(' ')
}

/// Flattens one model into atom records, residue by residue.
///
/// Atoms listed under several conformers of a residue are emitted once, and
/// each residue's atoms come out in serial order.
fn flatten_model(model: &pdbtbx::Model, options: &ReadOptions) -> Vec<PdbAtom> {
    let mut records = Vec::new();
    for chain in model.chains() {
        let chain_id = first_char(Some(chain.id()));
        for residue in chain.residues() {
            let insertion_code = first_char(residue.insertion_code());
            let mut seen = HashSet::new();
            let mut residue_atoms = Vec::new();
            for conformer in residue.conformers() {
                let alt_loc = first_char(conformer.alternative_location());
                for atom in conformer.atoms() {
                    if atom.hetero() && !options.include_hetatm {
                        continue;
                    }
                    if !seen.insert((atom.serial_number(), atom.name().to_string())) {
                        continue;
                    }
                    let record_type = if atom.hetero() {
                        RecordType::Hetatm
                    } else {
                        RecordType::Atom
                    };
                    let mut record = PdbAtom::new(
                        record_type,
                        atom.serial_number(),
                        atom.name(),
                        conformer.name(),
                        chain_id,
                        residue.serial_number(),
                        Point3::new(atom.x(), atom.y(), atom.z()),
                    );
                    record.alt_loc = alt_loc;
                    record.insertion_code = insertion_code;
                    record.occupancy = atom.occupancy();
                    record.b_factor = atom.b_factor();
                    record.formal_charge = i8::try_from(atom.charge()).unwrap_or_default();
                    if let Some(element) = atom.element() {
                        record.element = element.symbol().to_ascii_uppercase();
                    }
                    residue_atoms.push(record);
                }
            }
            residue_atoms.sort_by_key(|a| a.serial);
            let residue_atoms = match options.alternates {
                AlternateSelection::KeepAll => residue_atoms,
                AlternateSelection::ByOccupancyRank(rank) => {
                    select_alternates(residue_atoms, rank.max(1))
                }
            };
            records.extend(residue_atoms);
        }
    }
    records
}

/// Keeps one atom per name among the alternates of one residue.
///
/// A name is contested when at least one of its atoms carries an alternate
/// location; unflagged atoms of that name compete too. Contenders are ranked
/// by descending occupancy, ties keeping serial order, and the atom at `rank`
/// (clamped to the last) survives. Uncontested atoms are kept unchanged.
fn select_alternates(atoms: Vec<PdbAtom>, rank: usize) -> Vec<PdbAtom> {
    if !atoms.iter().any(PdbAtom::has_alt_loc) {
        return atoms;
    }

    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, atom) in atoms.iter().enumerate() {
        by_name.entry(atom.name.as_str()).or_default().push(index);
    }

    let mut keep = vec![true; atoms.len()];
    for members in by_name.values() {
        if members.len() < 2 || !members.iter().any(|&i| atoms[i].has_alt_loc()) {
            continue;
        }
        let mut ranked = members.clone();
        ranked.sort_by(|&a, &b| atoms[b].occupancy.total_cmp(&atoms[a].occupancy));
        let chosen = ranked[(rank - 1).min(ranked.len() - 1)];
        for &index in members {
            keep[index] = index == chosen;
        }
    }

    atoms
        .into_iter()
        .zip(keep)
        .filter_map(|(atom, kept)| kept.then_some(atom))
        .collect()
}

impl CoordinateFile for PdbFile {
    type Output = PdbContents;
    type Options = ReadOptions;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &ReadOptions,
    ) -> Result<PdbContents, PdbError> {
        let text = read_text(reader)?;
        let pdb = parse_text(&text)?;
        let header = header_of(&pdb);

        if pdb.atom_count() == 0 {
            return Err(PdbError::NoAtoms);
        }
        let model = options
            .model
            .checked_sub(1)
            .and_then(|index| pdb.models().nth(index))
            .ok_or(PdbError::ModelNotFound {
                requested: options.model,
                available: header.model_count,
            })?;

        let atoms = flatten_model(model, options);
        debug!(
            "Model {} holds {} atom(s), kept {} after record and alternate selection.",
            options.model,
            model.atom_count(),
            atoms.len()
        );

        if atoms.is_empty() {
            return Err(PdbError::NoAtoms);
        }
        Ok(PdbContents {
            header,
            atoms: AtomList::new(atoms),
        })
    }
}
