//! Equivalence tests between the eager and lazy strategies
//!
//! The primary property under test: for any query expressible as
//! filter+reduce, both strategies produce identical results.

use super::{sample_dataset, write_dataset};
use crate::Error;
use crate::app::services::aggregation::{
    count_unique_routes, growth_between, sum_rides_matching, total_rides_per_route,
};
use crate::app::services::execution::{
    ExecutionStrategy, RecordStream, load_records, max_rides_for_route,
};

#[test]
fn test_strategies_deliver_identical_record_sequences() {
    let dataset = sample_dataset();

    let eager: Vec<_> = ExecutionStrategy::Eager
        .open_records(dataset.path())
        .unwrap()
        .collect::<crate::Result<_>>()
        .unwrap();
    let lazy: Vec<_> = ExecutionStrategy::Lazy
        .open_records(dataset.path())
        .unwrap()
        .collect::<crate::Result<_>>()
        .unwrap();

    assert_eq!(eager, lazy);
    assert_eq!(eager.len(), 6);
}

#[test]
fn test_max_rides_equivalence_and_tie_break() {
    let dataset = sample_dataset();

    let eager = max_rides_for_route(dataset.path(), "22", ExecutionStrategy::Eager).unwrap();
    let lazy = max_rides_for_route(dataset.path(), "22", ExecutionStrategy::Lazy).unwrap();

    assert_eq!(eager, lazy);

    // Two rows tie at 5900; the first one in source order wins under both
    // strategies.
    let best = lazy.unwrap();
    assert_eq!(best.rides, 5900);
    assert_eq!(best.date, "02/03/2011");
}

#[test]
fn test_max_rides_unknown_route_is_none() {
    let dataset = sample_dataset();

    assert_eq!(
        max_rides_for_route(dataset.path(), "999", ExecutionStrategy::Lazy).unwrap(),
        None
    );
}

#[test]
fn test_aggregation_equivalence_across_strategies() {
    let dataset = sample_dataset();
    let strategies = [ExecutionStrategy::Eager, ExecutionStrategy::Lazy];

    let unique: Vec<_> = strategies
        .iter()
        .map(|s| count_unique_routes(s.open_records(dataset.path()).unwrap()).unwrap())
        .collect();
    assert_eq!(unique[0], unique[1]);
    assert_eq!(unique[0], 4);

    let sums: Vec<_> = strategies
        .iter()
        .map(|s| {
            sum_rides_matching(s.open_records(dataset.path()).unwrap(), "22", "02/03/2011").unwrap()
        })
        .collect();
    assert_eq!(sums[0], sums[1]);
    assert_eq!(sums[0], 5900);

    let totals: Vec<_> = strategies
        .iter()
        .map(|s| total_rides_per_route(s.open_records(dataset.path()).unwrap()).unwrap())
        .collect();
    assert_eq!(totals[0], totals[1]);

    let growth: Vec<_> = strategies
        .iter()
        .map(|s| growth_between(s.open_records(dataset.path()).unwrap(), 2001, 2011).unwrap())
        .collect();
    assert_eq!(growth[0], growth[1]);
}

#[test]
fn test_malformed_row_aborts_both_strategies() {
    let dataset = write_dataset(&[
        "3,01/01/2001,U,7354",
        "4,01/01/2001,U",
        "22,02/02/2011,W,5900",
    ]);

    assert!(matches!(
        load_records(dataset.path()),
        Err(Error::Parse { .. })
    ));

    let mut stream = RecordStream::open(dataset.path()).unwrap();
    assert!(stream.next().unwrap().is_ok());
    assert!(stream.next().unwrap().is_err());
}

#[test]
fn test_stream_is_finite() {
    let dataset = sample_dataset();
    let mut stream = RecordStream::open(dataset.path()).unwrap();

    assert_eq!(stream.by_ref().count(), 6);
    assert!(stream.next().is_none());
}

#[test]
fn test_missing_source_surfaces_immediately() {
    let path = std::path::Path::new("/nonexistent/ctabus.csv");

    for strategy in [ExecutionStrategy::Eager, ExecutionStrategy::Lazy] {
        assert!(matches!(
            strategy.open_records(path),
            Err(Error::SourceUnavailable { .. })
        ));
    }
}

#[test]
fn test_empty_dataset_yields_no_records() {
    let dataset = write_dataset(&[]);

    assert!(load_records(dataset.path()).unwrap().is_empty());
    assert_eq!(
        max_rides_for_route(dataset.path(), "22", ExecutionStrategy::Lazy).unwrap(),
        None
    );
}
