//! The CSV file access layer.
//!
//! The whole file is read into memory on every request and rewritten in full
//! on every mutation. There is no partial I/O and no index.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Error, transaction::Transaction};

/// The CSV column headers, in the order they are written.
pub const CSV_HEADERS: [&str; 7] = [
    "dateTime", "amount", "type", "category", "title", "currency", "note",
];

/// Owns the path to the CSV file and performs whole-file reads and rewrites.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file is not opened until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path to the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every transaction entry from the CSV file, in file order.
    ///
    /// An empty file reads as an empty list.
    ///
    /// # Errors
    /// Returns [Error::FileIO] if the file is missing or cannot be read, and
    /// [Error::InvalidCSV] if a row does not match the transaction columns.
    pub fn read_all(&self) -> Result<Vec<Transaction>, Error> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut entries = Vec::new();

        for result in reader.deserialize() {
            entries.push(result?);
        }

        Ok(entries)
    }

    /// Replace the file contents with `entries`, header row first.
    ///
    /// The new contents are written to a temporary file next to the target
    /// and renamed over it, so a crash mid-write cannot truncate the live
    /// file. An empty list still writes the header row.
    ///
    /// # Errors
    /// Returns [Error::FileIO] if the temporary file cannot be written or
    /// renamed, and [Error::InvalidCSV] if an entry cannot be serialized.
    pub fn write_all(&self, entries: &[Transaction]) -> Result<(), Error> {
        let temp_path = self.path.with_extension("csv.tmp");

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&temp_path)?;
            writer.write_record(CSV_HEADERS)?;

            for entry in entries {
                writer.serialize(entry)?;
            }

            writer.flush()?;
        }

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
