//! Arena keys for the records owned by a [`PdbStructure`](super::structure::PdbStructure).

use slotmap::new_key_type;

new_key_type! {
    /// Key of an atom inside a structure.
    pub struct AtomId;
    /// Key of a residue inside a structure.
    pub struct ResidueId;
    /// Key of a chain inside a structure.
    pub struct ChainId;
}
