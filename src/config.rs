//! Configuration for ridership queries.
//!
//! Provides the configuration structure that carries the dataset location,
//! the execution strategy, and the query parameters for one analysis run.

use crate::app::services::execution::ExecutionStrategy;
use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_DATE, DEFAULT_END_YEAR, DEFAULT_ROUTE, DEFAULT_START_YEAR,
    DEFAULT_TOP_ROUTES,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the ridership CSV dataset
    pub data_path: PathBuf,

    /// Execution strategy for producing the record stream
    pub strategy: ExecutionStrategy,

    /// Route filter for the riders-on-date query
    pub route: String,

    /// Date filter for the riders-on-date query
    pub date: String,

    /// First year of the growth ranking span
    pub start_year: i32,

    /// Last year of the growth ranking span
    pub end_year: i32,

    /// Number of top growth routes to report
    pub top_routes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            strategy: ExecutionStrategy::Eager,
            route: DEFAULT_ROUTE.to_string(),
            date: DEFAULT_DATE.to_string(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            top_routes: DEFAULT_TOP_ROUTES,
        }
    }
}

impl Config {
    /// Create configuration with a custom dataset path
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Create configuration with a custom execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create configuration with a custom (route, date) filter
    pub fn with_route_filter(mut self, route: impl Into<String>, date: impl Into<String>) -> Self {
        self.route = route.into();
        self.date = date.into();
        self
    }

    /// Create configuration with a custom growth year span
    pub fn with_year_span(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Create configuration with a custom top-N count
    pub fn with_top_routes(mut self, top_routes: usize) -> Self {
        self.top_routes = top_routes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.route, "22");
        assert_eq!(config.start_year, 2001);
        assert_eq!(config.end_year, 2011);
        assert_eq!(config.top_routes, 5);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_data_path("/tmp/rides.csv")
            .with_strategy(ExecutionStrategy::Lazy)
            .with_route_filter("147", "06/19/2004")
            .with_year_span(2005, 2015)
            .with_top_routes(10);

        assert_eq!(config.data_path, PathBuf::from("/tmp/rides.csv"));
        assert_eq!(config.strategy, ExecutionStrategy::Lazy);
        assert_eq!(config.route, "147");
        assert_eq!(config.date, "06/19/2004");
        assert_eq!(config.start_year, 2005);
        assert_eq!(config.end_year, 2015);
        assert_eq!(config.top_routes, 10);
    }
}
