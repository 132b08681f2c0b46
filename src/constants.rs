//! Application constants for the ridership analyzer
//!
//! This module contains schema constants, default query parameters,
//! and default values used throughout the application.

// =============================================================================
// Dataset Schema
// =============================================================================

/// Number of fields in every data row: route, date, daytype, rides
pub const EXPECTED_FIELD_COUNT: usize = 4;

/// Field positions within a data row
pub mod fields {
    /// Route identifier (e.g., "22")
    pub const ROUTE: usize = 0;

    /// Service date in MM/DD/YYYY form, carried verbatim
    pub const DATE: usize = 1;

    /// Day-type code (e.g., "W" weekday, "A" Saturday, "U" Sunday/holiday)
    pub const DAY_TYPE: usize = 2;

    /// Ride count, a non-negative integer
    pub const RIDES: usize = 3;
}

/// Index of the year within a '/'-separated date (MM/DD/YYYY)
pub const DATE_YEAR_COMPONENT: usize = 2;

// =============================================================================
// Query Defaults
// =============================================================================

/// Default dataset location
pub const DEFAULT_DATA_FILE: &str = "data/ctabus.csv";

/// Default route for filtered queries
pub const DEFAULT_ROUTE: &str = "22";

/// Default date for the riders-on-date query
pub const DEFAULT_DATE: &str = "02/02/2011";

/// Default year span for the growth ranking
pub const DEFAULT_START_YEAR: i32 = 2001;
pub const DEFAULT_END_YEAR: i32 = 2011;

/// Default number of top growth routes to report
pub const DEFAULT_TOP_ROUTES: usize = 5;
