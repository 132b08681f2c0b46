//! Lazy execution: a pull-based record pipeline
//!
//! Each stage of the pipeline (raw-row read, field-to-record mapping, any
//! downstream filter or reduction) is a one-at-a-time producer/consumer
//! link. Only the record currently in flight is alive, so peak memory stays
//! flat regardless of dataset size, modulo the reader's line buffer.

use std::fs::File;
use std::path::Path;

use csv::StringRecordsIntoIter;

use crate::app::models::RideRecord;
use crate::app::services::csv_parser::{open_reader, parse_ride_record};
use crate::{Error, Result};

/// A lazy, finite stream of parsed ridership records
///
/// Produces records on demand as the consumer pulls them; not restartable
/// once consumed. The stream owns the source handle and releases it on drop,
/// whether the consumer finished, stopped early, or hit an error.
pub struct RecordStream {
    rows: StringRecordsIntoIter<File>,
}

impl RecordStream {
    /// Open the dataset as a record stream
    ///
    /// Fails with [`Error::SourceUnavailable`] when the file cannot be
    /// opened. The header row is consumed by the reader and never surfaces
    /// as a record.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = open_reader(path)?;
        Ok(Self {
            rows: reader.into_records(),
        })
    }
}

impl Iterator for RecordStream {
    type Item = Result<RideRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rows.next()? {
            Ok(raw) => Some(parse_ride_record(&raw)),
            Err(source) => Some(Err(Error::csv_read("failed to read data row", source))),
        }
    }
}
