//! # Reference Module
//!
//! Published ground truth for validation: which structures have reference data
//! ([`registry`]) and where their per-residue series come from ([`source`]).
//!
//! The registry is read-only after construction. The built-in catalogue is
//! initialized once per process and can be shared freely across threads.
//!
//! ```ignore
//! use ewcl::core::models::ids::StructureId;
//! use ewcl::core::reference::registry::builtin_registry;
//!
//! let entry = builtin_registry().lookup(&StructureId::new("1xq8")?);
//! ```

pub mod registry;
pub mod source;
