//! Execution strategies for producing the record stream
//!
//! Two interchangeable data-flow implementations deliver the same logical
//! sequence of records to a consumer:
//!
//! - [`eager`] materializes the full record set in memory before anything
//!   consumes it; peak memory is proportional to the dataset size.
//! - [`lazy`] is a pull-based pipeline that keeps one record (plus any
//!   reduction accumulator) alive at a time; peak memory stays flat no
//!   matter how large the dataset grows.
//!
//! Both strategies must produce identical results for identical queries; the
//! choice between them is caller-supplied configuration, never inferred.

pub mod eager;
pub mod lazy;

#[cfg(test)]
pub mod tests;

pub use eager::load_records;
pub use lazy::RecordStream;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

use crate::Result;
use crate::app::models::{RideRecord, StrategyComparison};
use crate::app::services::profiler;

/// How records are produced and handed to a consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    /// Materialize the full record set before processing
    Eager,
    /// Stream records one at a time with no full materialization
    Lazy,
}

impl ExecutionStrategy {
    /// Open the dataset and deliver its records under this strategy
    ///
    /// Eager reads and parses the entire source up front, then hands out the
    /// materialized records; Lazy parses each record as the consumer pulls
    /// it. Either way the consumer sees the same fallible record sequence.
    pub fn open_records(
        self,
        path: &Path,
    ) -> Result<Box<dyn Iterator<Item = Result<RideRecord>>>> {
        match self {
            Self::Eager => {
                let records = eager::load_records(path)?;
                Ok(Box::new(records.into_iter().map(Ok)))
            }
            Self::Lazy => Ok(Box::new(lazy::RecordStream::open(path)?)),
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager => write!(f, "eager"),
            Self::Lazy => write!(f, "lazy"),
        }
    }
}

/// Find the record with the maximum rides value for one route
///
/// The canonical ad-hoc filter+reduce query. The reduction visits every
/// record and keeps the first maximal one, so ties resolve identically under
/// both strategies. Returns `None` when the route never appears.
pub fn max_rides_for_route(
    path: &Path,
    route: &str,
    strategy: ExecutionStrategy,
) -> Result<Option<RideRecord>> {
    let records = strategy.open_records(path)?;

    let mut best: Option<RideRecord> = None;
    for record in records {
        let record = record?;
        if record.route != route {
            continue;
        }
        match &best {
            Some(current) if record.rides <= current.rides => {}
            _ => best = Some(record),
        }
    }

    Ok(best)
}

/// Run the max-rides query under both strategies and sample their memory
///
/// Produces comparative evidence only; the measurement never gates or alters
/// execution. Returns the query answer together with one
/// [`MemorySample`](crate::MemorySample) per strategy.
pub fn compare_strategy_memory(
    path: &Path,
    route: &str,
) -> Result<(Option<RideRecord>, StrategyComparison)> {
    info!("Measuring eager pipeline for route {}", route);
    let (eager_answer, eager) =
        profiler::measure(|| max_rides_for_route(path, route, ExecutionStrategy::Eager));
    let eager_answer = eager_answer?;

    info!("Measuring lazy pipeline for route {}", route);
    let (lazy_answer, lazy) =
        profiler::measure(|| max_rides_for_route(path, route, ExecutionStrategy::Lazy));
    let lazy_answer = lazy_answer?;

    if eager_answer != lazy_answer {
        warn!("Strategies disagree on the max-rides answer; reporting the lazy result");
    }

    Ok((lazy_answer, StrategyComparison { eager, lazy }))
}
