//! Static lookup tables shared by the parsers.

pub mod identifiers;
