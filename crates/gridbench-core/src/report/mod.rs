//! Report generation for scoring results
//!
//! Generates reports in various formats (text log, table, Markdown, JSON,
//! HTML) and writes the result logs to disk.

mod html;
mod json;
mod markdown;
mod summary;
mod text_log;

pub use html::{HtmlReporter, percent_color, score_color};
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::TaskSummaryReporter;
pub use text_log::TextLogReporter;

use std::path::{Path, PathBuf};

use crate::error::{BenchError, BenchResult};
use crate::metrics::{ScoreSheet, TaskStatus, format_score};

/// File name of the text log
pub const TEXT_LOG_FILE: &str = "results_log.txt";
/// File name of the HTML table
pub const HTML_LOG_FILE: &str = "results.html";
/// File name of the JSON dump
pub const JSON_LOG_FILE: &str = "results.json";

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
    Html,
    Table,
}

impl ReportFormat {
    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "html" => Some(ReportFormat::Html),
            "table" => Some(ReportFormat::Table),
            _ => None,
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(sheet: &ScoreSheet, format: ReportFormat) -> BenchResult<String> {
    match format {
        ReportFormat::Json => JsonReporter::generate(sheet),
        ReportFormat::Markdown => Ok(MarkdownReporter::generate(sheet)),
        ReportFormat::Html => Ok(HtmlReporter::generate(sheet)),
        ReportFormat::Table => Ok(generate_table(sheet)),
    }
}

/// Generate a simple table report for terminal output
fn generate_table(sheet: &ScoreSheet) -> String {
    let mut output = String::new();
    let totals = &sheet.totals;

    output.push_str(&format!("\n{:=<70}\n", "= Gridbench Results "));
    output.push_str(&format!(
        "Timestamp: {}\n",
        sheet.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("{:=<70}\n\n", ""));

    output.push_str("SUMMARY\n");
    output.push_str(&format!("{:-<70}\n", ""));
    output.push_str(&format!(
        "Score: {}/{}\n",
        format_score(totals.total_score),
        sheet.max_overall_score
    ));
    output.push_str(&format!(
        "Correct: {}/{} ({:.1}%)\n",
        totals.correct,
        sheet.num_tasks,
        sheet.solve_rate() * 100.0
    ));
    output.push_str(&format!(
        "Incorrect: {} | Crashed: {} | Unattempted: {} | Unloadable: {}\n",
        totals.incorrect, totals.crashed, totals.unattempted, totals.errored
    ));
    output.push_str(&format!(
        "Examples: {} passed, {} failed, {} crashed\n\n",
        totals.examples.passed, totals.examples.failed, totals.examples.crashed
    ));

    output.push_str("TASK RESULTS\n");
    output.push_str(&format!("{:-<70}\n", ""));
    output.push_str(&format!(
        "{:<10} {:>12} {:>10} {:>9} {:>8} {:>8} {:>8}\n",
        "Task", "Status", "Score", "Correct", "Pass", "Fail", "Crash"
    ));
    output.push_str(&format!("{:-<70}\n", ""));

    for task in sheet
        .tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Unattempted)
    {
        let status = match task.status {
            TaskStatus::Correct => "PASS",
            TaskStatus::Incorrect => "FAIL",
            TaskStatus::Crashed => "CRASH",
            TaskStatus::Errored => "ERROR",
            TaskStatus::Unattempted => "SKIP",
        };
        let counts = task.counts();

        output.push_str(&format!(
            "{:<10} {:>12} {:>10} {:>8}% {:>8} {:>8} {:>8}\n",
            task.task.name(),
            status,
            format_score(task.score),
            task.percent_correct,
            counts.passed,
            counts.failed,
            counts.crashed
        ));
    }

    output.push_str(&format!("{:=<70}\n", ""));
    output
}

/// Write the text, HTML and JSON logs into `logs_dir`
///
/// Returns the paths written, in that order.
pub fn write_logs(sheet: &ScoreSheet, logs_dir: &Path, verbose: bool) -> BenchResult<Vec<PathBuf>> {
    std::fs::create_dir_all(logs_dir).map_err(|e| {
        BenchError::io(
            format!("Failed to create logs directory {:?}", logs_dir),
            e,
        )
    })?;

    let outputs = [
        (TEXT_LOG_FILE, TextLogReporter::generate(sheet, verbose)),
        (HTML_LOG_FILE, HtmlReporter::generate(sheet)),
        (JSON_LOG_FILE, JsonReporter::generate(sheet)?),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = logs_dir.join(name);
        std::fs::write(&path, content)
            .map_err(|e| BenchError::io(format!("Failed to write {:?}", path), e))?;
        tracing::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
