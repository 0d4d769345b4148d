//! # readapdb Core Library
//!
//! Reads Protein Data Bank (PDB) coordinate files into an in-memory atom list and
//! allocates a chain/residue/atom structure from that list.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomList`, `PdbStructure`),
//!   the PDB reader, and static lookup tables.
//!
//! - **[`workflows`]: The Public API.** The loader that opens a file, reads its atom
//!   list, and allocates a structure from it, reporting which stage failed.

pub mod core;
pub mod workflows;
