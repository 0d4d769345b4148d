use std::error::Error;
use std::io::{self, BufRead};

/// Defines the interface for reading coordinate file formats.
///
/// Implementors parse a buffered stream into their in-memory representation,
/// controlled by format-specific options. Opening the stream is left to the
/// caller, which decides how long the underlying file stays open.
pub trait CoordinateFile {
    /// The in-memory representation produced by the reader.
    type Output;

    /// Options controlling which records are read.
    type Options;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a coordinate file from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - The options controlling which records are kept.
    ///
    /// # Return
    ///
    /// Returns the parsed representation.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Self::Output, Self::Error>;
}
