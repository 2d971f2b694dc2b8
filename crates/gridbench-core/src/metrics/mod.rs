//! Scoring results and aggregation
//!
//! Per-example outcomes, per-task score records and whole-run totals.

mod aggregator;
mod types;

pub use aggregator::{ScoreSheet, Totals};
pub use types::{
    ExampleCounts, ExampleOutcome, ExampleResult, FAIL_SCORE, TaskScore, TaskStatus, format_score,
    round_to,
};
