use serde::{Deserialize, Serialize};

use crate::stats::{compute_percentile_95, mean, round_to_cents};
use crate::{DATASET, Record};

/// Body of a latency summary request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LatencyRequest {
    /// Regions to summarise, in output order. Duplicates and unknown
    /// identifiers are allowed.
    pub regions: Vec<String>,

    /// Latencies strictly above this value count as breaches.
    pub threshold_ms: f64,
}

/// Summary statistics for one region.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegionSummary {
    /// Region identifier as requested.
    pub region: String,

    /// Mean latency, rounded to two decimals.
    pub avg_latency: f64,

    /// 95th percentile latency, rounded to two decimals.
    pub p95_latency: f64,

    /// Mean uptime percentage, rounded to two decimals.
    pub avg_uptime: f64,

    /// Number of observations whose latency exceeds the threshold.
    pub breaches: usize,
}

/// Computes per-region summaries over an immutable set of records.
///
/// Holds only a shared reference to the records, so copies can be handed to
/// any number of concurrent callers.
#[derive(Clone, Copy, Debug)]
pub struct Aggregator {
    records: &'static [Record],
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Aggregator {
    /// Creates an aggregator over the given records.
    #[must_use]
    pub const fn new(records: &'static [Record]) -> Self {
        Self { records }
    }

    /// Creates an aggregator over the built-in [`DATASET`].
    #[must_use]
    pub const fn seeded() -> Self {
        Self::new(DATASET)
    }

    /// Distinct region identifiers, in the order they first appear.
    #[must_use]
    pub fn regions(&self) -> Vec<&'static str> {
        let mut regions: Vec<&'static str> = Vec::new();
        for record in self.records {
            if !regions.contains(&record.region) {
                regions.push(record.region);
            }
        }
        regions
    }

    /// Summarises a single region, or `None` if it has no records.
    #[must_use]
    pub fn summarize(&self, region: &str, threshold_ms: f64) -> Option<RegionSummary> {
        let rows: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.region == region)
            .collect();

        if rows.is_empty() {
            return None;
        }

        let latencies: Vec<f64> = rows.iter().map(|record| record.latency_ms).collect();
        let uptimes: Vec<f64> = rows.iter().map(|record| record.uptime_pct).collect();

        Some(RegionSummary {
            region: region.to_string(),
            avg_latency: round_to_cents(mean(&latencies)),
            p95_latency: round_to_cents(compute_percentile_95(&latencies)),
            avg_uptime: round_to_cents(mean(&uptimes)),
            breaches: rows
                .iter()
                .filter(|record| record.breaches(threshold_ms))
                .count(),
        })
    }

    /// Summarises each requested region in order. Regions without records are
    /// skipped; a region requested twice is summarised twice.
    #[must_use]
    pub fn aggregate<S>(&self, regions: &[S], threshold_ms: f64) -> Vec<RegionSummary>
    where
        S: AsRef<str>,
    {
        regions
            .iter()
            .filter_map(|region| self.summarize(region.as_ref(), threshold_ms))
            .collect()
    }

    /// Answers a [`LatencyRequest`].
    #[must_use]
    pub fn handle(&self, request: &LatencyRequest) -> Vec<RegionSummary> {
        self.aggregate(&request.regions, request.threshold_ms)
    }
}

/// Summarises `regions` against the built-in [`DATASET`].
#[must_use]
pub fn aggregate<S>(regions: &[S], threshold_ms: f64) -> Vec<RegionSummary>
where
    S: AsRef<str>,
{
    Aggregator::seeded().aggregate(regions, threshold_ms)
}
