//! # Core Module
//!
//! Stateless data models and input handling for per-residue disorder validation.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Residue codes, sequences, structure identifiers and score series
//! - **File Input** ([`io`]) - PDB sequence extraction and reference CSV reading
//! - **Reference Data** ([`reference`]) - The registry of benchmark structures and series sources
//! - **Lookup Tables** ([`utils`]) - The amino-acid code table
//!
//! Nothing in this layer holds mutable shared state; every parse produces freshly
//! owned values.

pub mod io;
pub mod models;
pub mod reference;
pub mod utils;
