//! # Core Models Module
//!
//! Data structures for the two in-memory forms of a PDB file.
//!
//! ## Overview
//!
//! - **Atom list** ([`atom`]) - The flat, ordered sequence of `ATOM`/`HETATM`
//!   records produced by the reader. Only its length matters to the loader.
//! - **Header** ([`header`]) - Entry metadata read with the atom list.
//! - **Structure** ([`structure`]) - Atoms grouped into residues and chains,
//!   allocated once from a complete atom list through [`builder`].
//!
//! Residues and chains are addressed by the arena keys in [`ids`], and labelled
//! for lookup with [`residue_spec::ResidueSpec`].
//!
//! ```ignore
//! use readapdb::core::models::structure::PdbStructure;
//!
//! let structure = PdbStructure::from_atoms(&atoms)?;
//! let spec = "A12".parse()?;
//! let residue = structure.find_residue_by_spec(&spec);
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod header;
pub mod ids;
pub mod residue;
pub mod residue_spec;
pub mod structure;
