//! Eager execution: materialize the full record set
//!
//! Reads the entire source, parses every row, and returns the complete
//! record set. Consumers then filter and reduce over the in-memory sequence.
//! Peak memory is O(n) in the dataset size; in exchange the records can be
//! traversed more than once.

use std::path::Path;
use tracing::debug;

use crate::Result;
use crate::app::models::RideRecord;

use super::lazy::RecordStream;

/// Read and parse the whole dataset into memory
///
/// Ingestion is all-or-nothing: the first malformed row aborts the load and
/// nothing is returned. The source handle is released when the underlying
/// stream is dropped, on success and failure alike.
pub fn load_records(path: &Path) -> Result<Vec<RideRecord>> {
    let records: Vec<RideRecord> = RecordStream::open(path)?.collect::<Result<_>>()?;

    debug!(
        "Materialized {} records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}
