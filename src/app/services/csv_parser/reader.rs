//! Source acquisition for ridership CSV files
//!
//! Opens the dataset and hands back a configured CSV reader. The reader owns
//! the file handle, so dropping it (or the stream built on top of it)
//! releases the source on every exit path, including mid-parse failures.

use crate::{Error, Result};
use csv::{Reader, ReaderBuilder};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Open a ridership dataset for reading
///
/// Fails with [`Error::SourceUnavailable`] when the file cannot be opened.
/// The returned reader treats the first row as a header and skips it. Rows
/// are read flexibly so that field-count validation stays with the record
/// parser, which reports the offending line.
pub fn open_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path)
        .map_err(|source| Error::source_unavailable(path.display().to_string(), source))?;

    debug!("Opened ridership source: {}", path.display());

    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}
