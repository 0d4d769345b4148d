//! # Workflows Module
//!
//! Top-level entry points that tie the reader and the structure allocator
//! together.
//!
//! ## Architecture
//!
//! - **Load Workflow** ([`load`]) - Open a PDB file, read its atom list, and
//!   allocate a structure from it. Failures are tagged with the stage that
//!   produced them so callers can decide how loudly to report them.

pub mod load;
