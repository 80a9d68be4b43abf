use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading structure file formats.
///
/// Implementors turn raw file content into a format-independent output
/// (for PDB, the residue [`Sequence`](crate::core::models::sequence::Sequence)).
/// Where the text comes from (disk, upload, network) is left to the caller;
/// only the reader is required here.
pub trait StructureFile {
    /// The parsed representation produced by this format.
    type Output;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads and parses structure content from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `reader` fails. Formats that parse
    /// fail-soft only surface I/O errors.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Reads and parses a structure file from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or reading fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
