//! JSON report generation

use crate::error::{BenchError, BenchResult};
use crate::metrics::ScoreSheet;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Generate a JSON report
    pub fn generate(sheet: &ScoreSheet) -> BenchResult<String> {
        serde_json::to_string_pretty(sheet).map_err(|e| BenchError::Report(e.to_string()))
    }

    /// Generate a compact JSON report (no pretty printing)
    pub fn generate_compact(sheet: &ScoreSheet) -> BenchResult<String> {
        serde_json::to_string(sheet).map_err(|e| BenchError::Report(e.to_string()))
    }
}
