//! Test utilities and fixtures for CSV parser testing

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod reader_tests;

/// Helper to create a small well-formed ridership CSV
pub fn create_test_csv() -> String {
    "route,date,daytype,rides\n\
     3,01/01/2001,U,7354\n\
     4,01/01/2001,U,9288\n\
     22,02/02/2011,W,5900\n"
        .to_string()
}

/// Helper to create a temporary file with the given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
