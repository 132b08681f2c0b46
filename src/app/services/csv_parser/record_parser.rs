//! Individual CSV record parsing for ridership rows
//!
//! Converts one raw row into a typed [`RideRecord`]. Only structure is
//! validated here: the field count must match the fixed schema and the rides
//! field must be a non-negative integer. Dates and day-type codes are carried
//! verbatim; a bad date only surfaces later, when a consumer asks the record
//! for its year.

use csv::StringRecord;

use crate::app::models::RideRecord;
use crate::constants::{EXPECTED_FIELD_COUNT, fields};
use crate::{Error, Result};

/// Parse a single ridership record from a raw CSV row
pub fn parse_ride_record(record: &StringRecord) -> Result<RideRecord> {
    let line = record_line(record);

    if record.len() != EXPECTED_FIELD_COUNT {
        return Err(Error::parse(
            line,
            format!(
                "expected {} fields (route, date, daytype, rides), found {}",
                EXPECTED_FIELD_COUNT,
                record.len()
            ),
        ));
    }

    let rides = parse_rides(&record[fields::RIDES], line)?;

    Ok(RideRecord::new(
        &record[fields::ROUTE],
        &record[fields::DATE],
        &record[fields::DAY_TYPE],
        rides,
    ))
}

/// Parse the rides field as a non-negative integer
fn parse_rides(value: &str, line: u64) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|_| {
        Error::parse(
            line,
            format!("rides must be a non-negative integer, found '{}'", value),
        )
    })
}

/// Source line of a record, 0 when the record was built in memory
fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
