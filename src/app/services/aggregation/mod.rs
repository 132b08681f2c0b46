//! Aggregation engine for ridership records
//!
//! All operations consume a fallible record sequence (the exact shape both
//! execution strategies deliver) and are all-or-nothing: the first parse or
//! date failure aborts the whole operation and no partial aggregate is ever
//! returned. Every operation is a pure function of its input sequence.
//!
//! ## Architecture
//!
//! - [`engine`] - Unique-key counts, filtered sums, and grouped totals
//! - [`growth`] - Year-over-year growth ranking with deterministic tie-breaks

pub mod engine;
pub mod growth;

#[cfg(test)]
pub mod tests;

// Re-export main operations for easy access
pub use engine::{
    count_unique_routes, group_by_route_and_year, sum_rides_matching, total_rides_per_route,
};
pub use growth::{growth_between, rank_growth};
