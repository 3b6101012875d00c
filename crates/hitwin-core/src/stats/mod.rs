//! Aggregation of judged events into breakdowns and timing statistics.
//!
//! - `AggregateCounts` - per-judgement totals with early/late splits
//! - `Breakdown` - the same counts for every note-kind partition
//! - `TimingStats` - mean error and unstable rate
//! - `PlayReport` - everything above plus the legacy score

mod aggregate;
mod report;
mod timing;

pub use aggregate::*;
pub use report::*;
pub use timing::*;
