//! Command-line argument definitions for the ridership analyzer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::execution::ExecutionStrategy;
use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_DATE, DEFAULT_END_YEAR, DEFAULT_ROUTE, DEFAULT_START_YEAR,
    DEFAULT_TOP_ROUTES,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the ridership analyzer
///
/// Answers aggregate queries over transit-route ridership CSV data and
/// compares the memory profile of the eager and lazy execution strategies.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ridership-analyzer",
    version,
    about = "Analytics over transit-route ridership CSV data",
    long_about = "Answers aggregate queries over a fixed-schema ridership dataset: unique \
                  route counts, riders for a (route, date) pair, total rides per route, and \
                  route growth rankings between two years. Queries run under an eager \
                  (fully materialized) or lazy (streaming) execution strategy, and the two \
                  strategies' peak memory footprints can be measured and compared."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ridership analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the ridership report queries over a dataset
    Report(ReportArgs),
    /// Compare peak memory of the eager and lazy strategies
    Memory(MemoryArgs),
}

/// Arguments for the report command (main analytics queries)
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Path to the ridership CSV dataset
    ///
    /// Comma-separated with a header row and four fields per data row:
    /// route, date (MM/DD/YYYY), daytype, rides.
    #[arg(
        short = 'i',
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the ridership CSV dataset"
    )]
    pub data: PathBuf,

    /// Route filter for the riders-on-date query
    #[arg(
        short = 'r',
        long = "route",
        value_name = "ROUTE",
        default_value = DEFAULT_ROUTE,
        help = "Route for the riders-on-date query"
    )]
    pub route: String,

    /// Date filter for the riders-on-date query (MM/DD/YYYY)
    #[arg(
        short = 'd',
        long = "date",
        value_name = "DATE",
        default_value = DEFAULT_DATE,
        help = "Date for the riders-on-date query"
    )]
    pub date: String,

    /// First year of the growth ranking span
    #[arg(
        long = "start-year",
        value_name = "YEAR",
        default_value_t = DEFAULT_START_YEAR,
        help = "First year of the growth ranking span"
    )]
    pub start_year: i32,

    /// Last year of the growth ranking span
    #[arg(
        long = "end-year",
        value_name = "YEAR",
        default_value_t = DEFAULT_END_YEAR,
        help = "Last year of the growth ranking span"
    )]
    pub end_year: i32,

    /// Number of top growth routes to show
    #[arg(
        short = 'n',
        long = "top",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_ROUTES,
        help = "Number of top growth routes to show"
    )]
    pub top: usize,

    /// Execution strategy for producing the record stream
    ///
    /// Eager materializes the full record set before querying; lazy streams
    /// records one at a time. Both give identical answers.
    #[arg(
        short = 's',
        long = "strategy",
        value_enum,
        default_value_t = ExecutionStrategy::Eager,
        help = "Execution strategy (eager or lazy)"
    )]
    pub strategy: ExecutionStrategy,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors and results
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the memory command (strategy comparison diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct MemoryArgs {
    /// Path to the ridership CSV dataset
    #[arg(
        short = 'i',
        long = "data",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the ridership CSV dataset"
    )]
    pub data: PathBuf,

    /// Route for the max-rides demonstration query
    #[arg(
        short = 'r',
        long = "route",
        value_name = "ROUTE",
        default_value = DEFAULT_ROUTE,
        help = "Route for the max-rides demonstration query"
    )]
    pub route: String,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_path(&self.data)?;

        if self.top == 0 {
            return Err(Error::configuration(
                "Top route count must be greater than 0".to_string(),
            ));
        }

        if self.start_year > self.end_year {
            return Err(Error::configuration(format!(
                "Start year {} cannot be after end year {}",
                self.start_year, self.end_year
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_log_level(self.verbose)
        }
    }

    /// Check if we should show the ingestion spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl MemoryArgs {
    /// Validate the memory command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_path(&self.data)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_log_level(self.verbose)
    }
}

/// Map a -v count to a log level name
fn verbosity_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Check that a dataset path exists and is a file
fn validate_data_path(data: &Path) -> Result<()> {
    if !data.exists() {
        return Err(Error::configuration(format!(
            "Dataset does not exist: {}",
            data.display()
        )));
    }

    if !data.is_file() {
        return Err(Error::configuration(format!(
            "Dataset path is not a file: {}",
            data.display()
        )));
    }

    Ok(())
}
