//! Memory command implementation for the ridership analyzer CLI
//!
//! Runs the max-rides demonstration query under both execution strategies
//! and reports their allocation footprints side by side. Diagnostic only:
//! the measurement never changes what either strategy computes.

use colored::Colorize;
use serde::Serialize;
use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info};

use super::shared::{format_count, format_size, setup_logging};
use crate::app::models::{MemorySample, RideRecord};
use crate::app::services::execution::compare_strategy_memory;
use crate::cli::args::{MemoryArgs, OutputFormat};
use crate::{Error, Result};

/// Full result of one strategy memory comparison
#[derive(Debug, Serialize)]
pub struct MemoryReport {
    pub route: String,
    pub best_record: Option<RideRecord>,
    pub eager: MemorySample,
    pub lazy: MemorySample,
    pub process_bytes: Option<u64>,
}

/// Memory command runner
pub fn run_memory(args: MemoryArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    info!("Starting strategy memory comparison");
    debug!("Memory arguments: {:?}", args);

    args.validate()?;

    let (best_record, comparison) = compare_strategy_memory(&args.data, &args.route)?;

    let report = MemoryReport {
        route: args.route.clone(),
        best_record,
        eager: comparison.eager,
        lazy: comparison.lazy,
        process_bytes: current_process_memory(),
    };

    match args.output_format {
        OutputFormat::Human => print_human_report(&report, &args),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Resident memory of this process, when the platform reports it
fn current_process_memory() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    system.process(pid).map(|process| process.memory())
}

fn print_human_report(report: &MemoryReport, args: &MemoryArgs) {
    println!();
    println!(
        "{}",
        format!("Strategy memory comparison: {}", args.data.display()).bold()
    );
    println!();

    match &report.best_record {
        Some(record) => println!(
            "Max rides on route {}: {} on {} (day type {})",
            record.route.cyan(),
            format_count(u64::from(record.rides)).green(),
            record.date,
            record.day_type
        ),
        None => println!("Route {} never appears in the dataset", report.route),
    }
    println!();

    println!(
        "{}",
        format!("  {:<10} {:>14} {:>14}", "STRATEGY", "PEAK", "RETAINED").bold()
    );
    print_sample_row("eager", &report.eager);
    print_sample_row("lazy", &report.lazy);
    println!();

    if report.lazy.peak_bytes > 0 && report.eager.peak_bytes > report.lazy.peak_bytes {
        let ratio = report.eager.peak_bytes as f64 / report.lazy.peak_bytes as f64;
        println!(
            "{}",
            format!("Lazy peak is {:.1}x below the eager peak", ratio).green()
        );
    }

    if let Some(bytes) = report.process_bytes {
        println!("Process memory: {}", format_size(bytes));
    }
    println!();
}

fn print_sample_row(name: &str, sample: &MemorySample) {
    println!(
        "  {:<10} {:>14} {:>14}",
        name,
        format_size(sample.peak_bytes as u64),
        format_size(sample.current_bytes as u64)
    );
}
