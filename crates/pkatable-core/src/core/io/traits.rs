use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for line-oriented record files.
///
/// Implementors turn a text stream into an ordered sequence of records. Order is
/// significant: downstream joins address records by position.
pub trait RecordFile {
    /// The record type produced for each accepted line.
    type Record;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads all records from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the records in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be read or decoded.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error>;

    /// Reads all records from a file path.
    ///
    /// The file is opened, read to the end and closed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or reading fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
