// File: crates/movie-data/src/aggregate.rs
// Summary: Group qualifying records by year and sum their gross.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::filter::{qualifies, YearFilter};
use crate::record::{NormalizedRecord, RawRecord};

/// Total gross for one release year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAggregate {
    pub year: i32,
    pub total_gross: f64,
}

impl YearlyAggregate {
    /// `(year, total)` as chart coordinates.
    pub fn as_point(&self) -> (f64, f64) {
        (self.year as f64, self.total_gross)
    }
}

/// Aggregates plus counts of what went into them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregation {
    /// Strictly ascending by year.
    pub years: Vec<YearlyAggregate>,
    pub kept: usize,
    pub excluded: usize,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.years.iter().map(|a| a.total_gross).sum()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.years.iter().map(YearlyAggregate::as_point).collect()
    }
}

/// Coerce, filter, group and sort raw CSV rows.
pub fn aggregate(records: &[RawRecord], filter: YearFilter) -> Aggregation {
    let normalized: Vec<NormalizedRecord> = records.iter().map(RawRecord::normalize).collect();
    aggregate_normalized(&normalized, filter)
}

/// Filter, group and sort already-typed records.
pub fn aggregate_normalized(records: &[NormalizedRecord], filter: YearFilter) -> Aggregation {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    let mut kept = 0usize;
    let mut excluded = 0usize;

    for rec in records {
        if !qualifies(rec, filter) {
            trace!(year = ?rec.year, gross = ?rec.gross, "excluded record");
            excluded += 1;
            continue;
        }
        // qualifies() guarantees both fields are present
        if let (Some(year), Some(gross)) = (rec.year, rec.gross) {
            *totals.entry(year).or_insert(0.0) += gross;
            kept += 1;
        }
    }

    let years: Vec<YearlyAggregate> = totals
        .into_iter()
        .map(|(year, total_gross)| YearlyAggregate { year, total_gross })
        .collect();

    debug!(?filter, kept, excluded, years = years.len(), "aggregated gross by year");
    Aggregation { years, kept, excluded }
}
