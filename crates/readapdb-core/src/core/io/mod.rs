//! Provides input functionality for coordinate file formats.
//!
//! The [`pdb`] reader hands a PDB file to `pdbtbx` and flattens the chosen
//! model into an [`AtomList`](crate::core::models::atom::AtomList), honouring
//! the model, hetero-atom and alternate-location choices in [`options`]. Readers share the
//! [`traits::CoordinateFile`] interface.

pub mod options;
pub mod pdb;
pub mod traits;
