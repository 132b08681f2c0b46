//! Ridership Analyzer Library
//!
//! A Rust library for answering aggregate queries over transit-route
//! ridership data stored as delimited text.
//!
//! This library provides tools for:
//! - Parsing fixed-schema ridership CSV rows into typed records
//! - Counting distinct routes and summing rides under (route, date) filters
//! - Grouping ride totals per route and per (route, year)
//! - Ranking route growth between two years with deterministic tie-breaking
//! - Running queries under an eager (fully materialized) or lazy (streaming)
//!   execution strategy
//! - Measuring the peak allocation footprint of either strategy

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod csv_parser;
        pub mod execution;
        pub mod profiler;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GrowthEntry, MemorySample, RideRecord};
pub use app::services::execution::ExecutionStrategy;
pub use config::Config;

/// Byte-counting allocator backing the resource profiler.
///
/// Installed crate-wide so that `profiler::measure` sees every allocation a
/// strategy's pipeline makes, in the binary and in test runs alike.
#[global_allocator]
static ALLOCATOR: app::services::profiler::TrackingAllocator =
    app::services::profiler::TrackingAllocator;

/// Result type alias for the ridership analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ridership analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed data row: wrong field count or unparseable rides value
    #[error("parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A record's date cannot yield a year for grouping or growth ranking
    #[error(
        "malformed date '{date}': expected at least three '/'-separated components with a numeric year"
    )]
    MalformedDate { date: String },

    /// The underlying dataset cannot be opened
    #[error("source unavailable: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying reader failed partway through the dataset
    #[error("CSV read error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a parse error for a data row
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed date error
    pub fn malformed_date(date: impl Into<String>) -> Self {
        Self::MalformedDate { date: date.into() }
    }

    /// Create a source unavailable error with the path that failed to open
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV read error with context
    pub fn csv_read(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV reading failed".to_string(),
            source: error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
