//! Report command implementation for the ridership analyzer CLI
//!
//! Runs the four analytics queries over a dataset under the configured
//! execution strategy and prints the results in human or JSON form.

use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{create_ingest_spinner, format_count, setup_logging};
use crate::app::models::{GrowthEntry, RouteTotals};
use crate::app::services::aggregation::{
    count_unique_routes, growth_between, sum_rides_matching, total_rides_per_route,
};
use crate::app::services::execution::{ExecutionStrategy, RecordStream, load_records};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::{Error, Result};

/// One route's total in the report, ordered for presentation
#[derive(Debug, Serialize)]
pub struct RouteTotal {
    pub route: String,
    pub rides: u64,
}

/// Full result of one report run
#[derive(Debug, Serialize)]
pub struct RidershipReport {
    pub strategy: ExecutionStrategy,
    pub unique_routes: usize,
    pub route: String,
    pub date: String,
    pub riders_on_date: u64,
    pub route_totals: Vec<RouteTotal>,
    pub start_year: i32,
    pub end_year: i32,
    pub growth: Vec<GrowthEntry>,
}

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting ridership report");
    debug!("Report arguments: {:?}", args);

    args.validate()?;

    let config = Config::default()
        .with_data_path(args.data.clone())
        .with_strategy(args.strategy)
        .with_route_filter(args.route.clone(), args.date.clone())
        .with_year_span(args.start_year, args.end_year)
        .with_top_routes(args.top);

    let start_time = Instant::now();
    let report = build_report(&config, args.show_progress())?;
    info!(
        "Report completed in {:.2}s under the {} strategy",
        start_time.elapsed().as_secs_f64(),
        config.strategy
    );

    match args.output_format {
        OutputFormat::Human => print_human_report(&report, &config),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Run the four queries under the configured strategy
///
/// Eager materializes the record set once and reuses it for every query.
/// Lazy opens a fresh stream per query: a consumed stream is not
/// restartable, and keeping only one record alive per pass is the point.
fn build_report(config: &Config, show_progress: bool) -> Result<RidershipReport> {
    match config.strategy {
        ExecutionStrategy::Eager => {
            let spinner = show_progress.then(|| create_ingest_spinner("Reading dataset..."));

            let records = load_records(&config.data_path)?;

            if let Some(spinner) = spinner {
                spinner.finish_with_message(format!(
                    "Read {} records",
                    format_count(records.len() as u64)
                ));
            }

            let stream = || records.iter().cloned().map(Ok);
            assemble_report(
                config,
                count_unique_routes(stream())?,
                sum_rides_matching(stream(), &config.route, &config.date)?,
                total_rides_per_route(stream())?,
                growth_between(stream(), config.start_year, config.end_year)?,
            )
        }
        ExecutionStrategy::Lazy => assemble_report(
            config,
            count_unique_routes(RecordStream::open(&config.data_path)?)?,
            sum_rides_matching(
                RecordStream::open(&config.data_path)?,
                &config.route,
                &config.date,
            )?,
            total_rides_per_route(RecordStream::open(&config.data_path)?)?,
            growth_between(
                RecordStream::open(&config.data_path)?,
                config.start_year,
                config.end_year,
            )?,
        ),
    }
}

fn assemble_report(
    config: &Config,
    unique_routes: usize,
    riders_on_date: u64,
    totals: RouteTotals,
    growth: Vec<GrowthEntry>,
) -> Result<RidershipReport> {
    // The aggregate itself is unordered; order the presentation by busiest
    // route first, route identifier as tie-break.
    let mut route_totals: Vec<RouteTotal> = totals
        .into_iter()
        .map(|(route, rides)| RouteTotal { route, rides })
        .collect();
    route_totals.sort_by(|a, b| b.rides.cmp(&a.rides).then_with(|| a.route.cmp(&b.route)));

    Ok(RidershipReport {
        strategy: config.strategy,
        unique_routes,
        route: config.route.clone(),
        date: config.date.clone(),
        riders_on_date,
        route_totals,
        start_year: config.start_year,
        end_year: config.end_year,
        growth,
    })
}

fn print_human_report(report: &RidershipReport, config: &Config) {
    println!();
    println!(
        "{}",
        format!("Ridership report: {}", config.data_path.display()).bold()
    );
    println!("Strategy: {}", report.strategy);
    println!();

    println!(
        "Unique routes: {}",
        format_count(report.unique_routes as u64).green()
    );
    println!(
        "Riders on route {} on {}: {}",
        report.route.cyan(),
        report.date,
        format_count(report.riders_on_date).green()
    );
    println!();

    println!("{}", "Total rides per route".bold());
    for total in &report.route_totals {
        println!("  {:<8} {:>15}", total.route, format_count(total.rides));
    }
    println!();

    println!(
        "{}",
        format!(
            "Top {} routes by growth, {} to {}",
            config.top_routes, report.start_year, report.end_year
        )
        .bold()
    );
    for (rank, entry) in report.growth.iter().take(config.top_routes).enumerate() {
        let delta = if entry.growth >= 0 {
            format!("+{}", format_count(entry.growth as u64)).green()
        } else {
            format!("-{}", format_count(entry.growth.unsigned_abs())).red()
        };
        println!("  {:>2}. route {:<8} {}", rank + 1, entry.route, delta);
    }
    println!();
}
