//! Core aggregate operations over a ridership record sequence

use std::collections::HashSet;

use crate::Result;
use crate::app::models::{RideRecord, RouteTotals, RouteYearTable};

/// Count the distinct route identifiers in a record sequence
///
/// O(n) time and O(k) space for k distinct routes.
pub fn count_unique_routes<I>(records: I) -> Result<usize>
where
    I: IntoIterator<Item = Result<RideRecord>>,
{
    let mut routes = HashSet::new();
    for record in records {
        routes.insert(record?.route);
    }
    Ok(routes.len())
}

/// Sum rides over records matching both a route and a date
///
/// Returns 0 when nothing matches; an absent (route, date) pair is an
/// ordinary answer, not an error.
pub fn sum_rides_matching<I>(records: I, route: &str, date: &str) -> Result<u64>
where
    I: IntoIterator<Item = Result<RideRecord>>,
{
    let mut total = 0u64;
    for record in records {
        let record = record?;
        if record.route == route && record.date == date {
            total += u64::from(record.rides);
        }
    }
    Ok(total)
}

/// Accumulate total rides per route
///
/// Iteration order of the returned mapping is unspecified; the totals
/// themselves are deterministic for a given input.
pub fn total_rides_per_route<I>(records: I) -> Result<RouteTotals>
where
    I: IntoIterator<Item = Result<RideRecord>>,
{
    let mut totals = RouteTotals::new();
    for record in records {
        let record = record?;
        *totals.entry(record.route).or_insert(0) += u64::from(record.rides);
    }
    Ok(totals)
}

/// Accumulate total rides per route per year
///
/// Extracts the year from each record's date. A record whose date cannot
/// yield a year fails the whole operation with
/// [`Error::MalformedDate`](crate::Error::MalformedDate); no partial table is
/// returned.
pub fn group_by_route_and_year<I>(records: I) -> Result<RouteYearTable>
where
    I: IntoIterator<Item = Result<RideRecord>>,
{
    let mut table = RouteYearTable::new();
    for record in records {
        let record = record?;
        let year = record.year()?;
        *table
            .entry(record.route)
            .or_default()
            .entry(year)
            .or_insert(0) += u64::from(record.rides);
    }
    Ok(table)
}
