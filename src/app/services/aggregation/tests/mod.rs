//! Test fixtures for aggregation testing

use crate::Result;
use crate::app::models::RideRecord;

mod growth_tests;

/// Wrap in-memory records the way a strategy delivers them
pub fn as_stream(records: Vec<RideRecord>) -> impl Iterator<Item = Result<RideRecord>> {
    records.into_iter().map(Ok)
}

/// A small fixed record set spanning two routes and two years
pub fn sample_records() -> Vec<RideRecord> {
    vec![
        RideRecord::new("10", "01/01/2001", "A", 100),
        RideRecord::new("10", "01/01/2011", "A", 150),
        RideRecord::new("22", "01/01/2001", "A", 50),
        RideRecord::new("22", "01/02/2001", "W", 30),
        RideRecord::new("147", "06/19/2004", "A", 409),
    ]
}
