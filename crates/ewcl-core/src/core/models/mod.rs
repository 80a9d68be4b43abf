//! # Core Models Module
//!
//! Plain data types that flow through the validation pipeline.
//!
//! ## Key Components
//!
//! - [`residue`] - One-letter residue codes and alpha-carbon residue records
//! - [`sequence`] - Ordered residue sequences extracted from structure files
//! - [`ids`] - Case-insensitive structure identifiers
//! - [`series`] - Reference disorder series and keyed prediction maps
//!
//! All types are immutable once produced by a parser or loader and own their data,
//! so independent validations never share state.

pub mod ids;
pub mod residue;
pub mod sequence;
pub mod series;
