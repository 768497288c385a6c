//! Regional latency and uptime telemetry with per-region summary statistics.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod aggregator;
mod dataset;
mod record;
mod stats;

pub use aggregator::{Aggregator, LatencyRequest, RegionSummary, aggregate};
pub use dataset::DATASET;
pub use record::Record;
pub use stats::{compute_percentile_95, mean, round_to_cents};
