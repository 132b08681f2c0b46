//! Data models for ridership analysis
//!
//! This module contains the core data structures for representing parsed
//! ridership observations and the aggregate shapes computed from them.

use crate::constants::DATE_YEAR_COMPONENT;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Ride Record
// =============================================================================

/// One parsed ridership observation
///
/// A record is immutable once parsed. The date is carried verbatim as an
/// opaque string; consumers that need the year extract it on demand with
/// [`RideRecord::year`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RideRecord {
    /// Route identifier (e.g., "22")
    pub route: String,

    /// Service date in MM/DD/YYYY form
    pub date: String,

    /// Day-type code (e.g., "W", "A", "U")
    pub day_type: String,

    /// Number of rides recorded for this route on this date
    pub rides: u32,
}

impl RideRecord {
    /// Create a new ride record
    pub fn new(
        route: impl Into<String>,
        date: impl Into<String>,
        day_type: impl Into<String>,
        rides: u32,
    ) -> Self {
        Self {
            route: route.into(),
            date: date.into(),
            day_type: day_type.into(),
            rides,
        }
    }

    /// Extract the year from the record's date
    ///
    /// The date must contain at least three '/'-separated components and the
    /// third must parse as an integer. Fails with [`Error::MalformedDate`]
    /// otherwise; the record itself stays valid since dates are only
    /// structurally validated when a year is needed.
    pub fn year(&self) -> Result<i32> {
        self.date
            .split('/')
            .nth(DATE_YEAR_COMPONENT)
            .and_then(|component| component.parse().ok())
            .ok_or_else(|| Error::malformed_date(&self.date))
    }
}

// =============================================================================
// Aggregate Shapes
// =============================================================================

/// Cumulative rides per route
pub type RouteTotals = HashMap<String, u64>;

/// Cumulative rides per route per year
///
/// Absence of a (route, year) pair means zero observed rides for that route
/// in that year, not an error.
pub type RouteYearTable = HashMap<String, HashMap<i32, u64>>;

/// A route's ride-count delta between two years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthEntry {
    /// Route identifier
    pub route: String,

    /// end-year total minus start-year total; negative when ridership fell
    pub growth: i64,
}

// =============================================================================
// Memory Measurement
// =============================================================================

/// Allocation footprint attributable to one strategy's execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySample {
    /// Bytes still allocated when the pipeline finished
    pub current_bytes: usize,

    /// Highest number of bytes alive at any point during the pipeline
    pub peak_bytes: usize,
}

/// Paired samples from running the same query under both strategies
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrategyComparison {
    /// Sample from the fully materialized run
    pub eager: MemorySample,

    /// Sample from the streaming run
    pub lazy: MemorySample,
}
