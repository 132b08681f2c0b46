//! Command implementations for the ridership analyzer CLI
//!
//! This module contains the command execution logic and output formatting
//! for the CLI interface. Each command is implemented in its own module.

pub mod memory;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the ridership analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `report`: the four analytics queries over a dataset
/// - `memory`: eager-vs-lazy peak memory comparison
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Memory(memory_args) => memory::run_memory(memory_args),
    }
}
