//! Provides input functionality for structure and reference data files.
//!
//! PDB text is reduced to a residue [`Sequence`](crate::core::models::sequence::Sequence)
//! through the [`traits::StructureFile`] interface; published per-residue
//! reference values are read from CSV tables.

pub mod pdb;
pub mod reference;
pub mod traits;
