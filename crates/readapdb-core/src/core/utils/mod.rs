//! Static lookup tables and name heuristics shared by the reader and the
//! structure allocator.

pub mod identifiers;
