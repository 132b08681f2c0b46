//! Test fixtures for execution strategy testing

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod equivalence_tests;

/// Write a ridership CSV with the given data rows to a temporary file
pub fn write_dataset(rows: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "route,date,daytype,rides").unwrap();
    for row in rows {
        writeln!(temp_file, "{}", row).unwrap();
    }
    temp_file
}

/// A dataset exercising several routes, duplicate dates, and ties
pub fn sample_dataset() -> NamedTempFile {
    write_dataset(&[
        "3,01/01/2001,U,7354",
        "4,01/01/2001,U,9288",
        "22,02/02/2011,W,5716",
        "22,02/03/2011,W,5900",
        "22,02/04/2011,W,5900",
        "147,06/19/2004,A,409",
    ])
}
