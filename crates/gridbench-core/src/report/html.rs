//! HTML report generation
//!
//! A single table with one row per task. Score and percent cells are
//! colored by band, the same way the spreadsheet log used to be.

use crate::metrics::{ScoreSheet, format_score};
use crate::runner::ScoreThresholds;

const RED: &str = "#ff081b";
const ORANGE: &str = "#fe8015";
const YELLOW: &str = "#fdf709";
const GREEN: &str = "#87e155";

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Generate an HTML report
    pub fn generate(sheet: &ScoreSheet) -> String {
        let mut html = String::new();

        html.push_str(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Gridbench Results</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; padding: 2rem; }
        h1 { margin-bottom: 0.5rem; }
        .meta { color: #555; margin-bottom: 1.5rem; }
        table { border-collapse: collapse; }
        th, td { padding: 0.35rem 0.9rem; border: 1px solid #ccc; text-align: right; }
        th { background: #eee; }
        td.task { text-align: left; font-family: monospace; }
        td.status { text-align: left; }
    </style>
</head>
<body>
"#,
        );

        html.push_str("    <h1>Gridbench Results</h1>\n");
        html.push_str(&format!(
            "    <div class=\"meta\">Score {}/{} &middot; {}/{} correct &middot; {}</div>\n",
            format_score(sheet.totals.total_score),
            sheet.max_overall_score,
            sheet.totals.correct,
            sheet.num_tasks,
            sheet.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        html.push_str("    <table>\n");
        html.push_str(
            "        <tr><th>Task</th><th>Score</th><th>Percent Correct</th><th>Status</th></tr>\n",
        );

        for task in &sheet.tasks {
            html.push_str(&format!(
                "        <tr><td class=\"task\">{}</td>\
                 <td style=\"background-color: {}\">{}</td>\
                 <td style=\"background-color: {}\">{}</td>\
                 <td class=\"status\">{}</td></tr>\n",
                task.task,
                score_color(task.score, &sheet.score_thresholds),
                format_score(task.score),
                percent_color(task.percent_correct),
                task.percent_correct,
                escape_html(task.status.display_name()),
            ));
        }

        html.push_str("    </table>\n</body>\n</html>\n");
        html
    }
}

/// Background for a Score cell
pub fn score_color(score: f64, thresholds: &ScoreThresholds) -> &'static str {
    if score < thresholds.low {
        RED
    } else if score < thresholds.mid {
        ORANGE
    } else if score < thresholds.high {
        YELLOW
    } else {
        GREEN
    }
}

/// Background for a Percent Correct cell
pub fn percent_color(percent: f64) -> &'static str {
    if percent < 25.0 {
        RED
    } else if percent < 50.0 {
        ORANGE
    } else if percent < 75.0 {
        YELLOW
    } else {
        GREEN
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
