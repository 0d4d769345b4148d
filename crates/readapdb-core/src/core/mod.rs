//! # Core Module
//!
//! The stateless foundation of the library: data models for atom lists and
//! structures, the PDB reader, and the residue and element tables they share.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atom records, atom lists, residues,
//!   chains, and the structure allocated from them
//! - **File I/O** ([`io`]) - Reading PDB coordinate files into atom lists
//! - **Lookup Tables** ([`utils`]) - Residue classification and element inference

pub mod io;
pub mod models;
pub mod utils;
