//! Tests for ridership source acquisition

use super::{create_temp_file, create_test_csv};
use crate::Error;
use crate::app::services::csv_parser::{open_reader, parse_ride_record};
use std::path::Path;

#[test]
fn test_open_missing_file() {
    let result = open_reader(Path::new("/nonexistent/ctabus.csv"));

    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
}

#[test]
fn test_header_row_skipped() {
    let temp_file = create_temp_file(&create_test_csv());
    let mut reader = open_reader(temp_file.path()).unwrap();

    let records: Vec<_> = reader
        .records()
        .map(|row| parse_ride_record(&row.unwrap()).unwrap())
        .collect();

    // Three data rows; the header never reaches the record parser.
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].route, "3");
    assert_eq!(records[2].rides, 5900);
}

#[test]
fn test_line_numbers_reported_in_errors() {
    // Row 3 of the file (line 3, after the header) is malformed.
    let temp_file = create_temp_file(
        "route,date,daytype,rides\n\
         3,01/01/2001,U,7354\n\
         4,01/01/2001,U,not-a-number\n",
    );
    let mut reader = open_reader(temp_file.path()).unwrap();

    let results: Vec<_> = reader
        .records()
        .map(|row| parse_ride_record(&row.unwrap()))
        .collect();

    assert!(results[0].is_ok());
    let error = results[1].as_ref().unwrap_err();
    assert!(error.to_string().contains("line 3"));
}
