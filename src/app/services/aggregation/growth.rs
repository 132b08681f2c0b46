//! Year-over-year growth ranking for routes

use tracing::debug;

use crate::Result;
use crate::app::models::{GrowthEntry, RideRecord, RouteYearTable};

use super::engine::group_by_route_and_year;

/// Rank every route in the table by ridership growth between two years
///
/// A route missing a total for either year contributes 0 for that year and
/// stays in the ranking; the table encodes "no observed rides" as absence.
/// The result is sorted descending by growth, with equal-growth routes in
/// ascending route order so the ranking is deterministic. The full sequence
/// is returned; callers select how many top entries to use.
pub fn rank_growth(table: &RouteYearTable, start_year: i32, end_year: i32) -> Vec<GrowthEntry> {
    let mut entries: Vec<GrowthEntry> = table
        .iter()
        .map(|(route, by_year)| {
            let start_total = by_year.get(&start_year).copied().unwrap_or(0);
            let end_total = by_year.get(&end_year).copied().unwrap_or(0);
            GrowthEntry {
                route: route.clone(),
                growth: end_total as i64 - start_total as i64,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.growth.cmp(&a.growth).then_with(|| a.route.cmp(&b.route)));

    debug!(
        "Ranked {} routes by growth between {} and {}",
        entries.len(),
        start_year,
        end_year
    );

    entries
}

/// Reduce a record sequence to a per-(route, year) table and rank its growth
pub fn growth_between<I>(records: I, start_year: i32, end_year: i32) -> Result<Vec<GrowthEntry>>
where
    I: IntoIterator<Item = Result<RideRecord>>,
{
    let table = group_by_route_and_year(records)?;
    Ok(rank_growth(&table, start_year, end_year))
}
