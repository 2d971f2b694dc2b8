//! Markdown report generation

use crate::metrics::{ScoreSheet, TaskStatus, format_score};

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Generate a Markdown report
    pub fn generate(sheet: &ScoreSheet) -> String {
        let mut md = String::new();
        let totals = &sheet.totals;

        md.push_str("# Gridbench Results\n\n");
        md.push_str(&format!(
            "- **Generated**: {}\n\n",
            sheet.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Summary
        md.push_str("## Summary\n\n");
        md.push_str("| Metric | Value |\n|--------|-------|\n");
        md.push_str(&format!(
            "| Score | {}/{} |\n",
            format_score(totals.total_score),
            sheet.max_overall_score
        ));
        md.push_str(&format!(
            "| Correct | {}/{} ({:.1}%) |\n",
            totals.correct,
            sheet.num_tasks,
            sheet.solve_rate() * 100.0
        ));
        md.push_str(&format!("| Incorrect | {} |\n", totals.incorrect));
        md.push_str(&format!("| Crashed | {} |\n", totals.crashed));
        md.push_str(&format!("| Unattempted | {} |\n", totals.unattempted));
        if totals.errored > 0 {
            md.push_str(&format!("| Unloadable | {} |\n", totals.errored));
        }
        md.push_str(&format!(
            "| Examples passed / failed / crashed | {} / {} / {} |\n\n",
            totals.examples.passed, totals.examples.failed, totals.examples.crashed
        ));

        // Attempted tasks only; unattempted ones would drown the table
        md.push_str("## Task Results\n\n");
        md.push_str("| Task | Status | Score | Correct | Passed | Failed | Crashed |\n");
        md.push_str("|------|--------|-------|---------|--------|--------|---------|\n");
        for task in sheet
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Unattempted)
        {
            let counts = task.counts();
            md.push_str(&format!(
                "| {} | {} | {} | {}% | {} | {} | {} |\n",
                task.task,
                task.status,
                format_score(task.score),
                task.percent_correct,
                counts.passed,
                counts.failed,
                counts.crashed
            ));
        }
        md.push('\n');

        let crashed: Vec<_> = sheet
            .tasks
            .iter()
            .filter(|t| !t.crash_messages().is_empty())
            .collect();

        if !crashed.is_empty() {
            md.push_str("## Crashes\n\n");
            for task in crashed {
                md.push_str(&format!("### {}\n\n", task.task));
                for (index, message) in task.crash_messages() {
                    md.push_str(&format!("- **Example {}**: `{}`\n", index, message));
                }
                md.push('\n');
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ExampleOutcome, ExampleResult, TaskScore};
    use crate::runner::BenchConfig;
    use crate::tasks::{ExampleRole, TaskId};

    #[test]
    fn test_markdown_generation() {
        let config = BenchConfig::default().with_num_tasks(3);
        let crashed = ExampleResult {
            index: 0,
            role: ExampleRole::Train,
            outcome: ExampleOutcome::Crashed {
                message: "bad input".to_string(),
            },
            produced: None,
        };
        let sheet = ScoreSheet::from_scores(
            vec![
                TaskScore::from_examples(TaskId::new(1, 3).unwrap(), vec![crashed], 100.0),
                TaskScore::unattempted(TaskId::new(2, 3).unwrap()),
                TaskScore::unattempted(TaskId::new(3, 3).unwrap()),
            ],
            &config,
        );

        let md = MarkdownReporter::generate(&sheet);
        assert!(md.contains("# Gridbench Results"));
        assert!(md.contains("| task001 | Crashed | 0.001 | 0% | 0 | 0 | 1 |"));
        assert!(!md.contains("| task002 |"));
        assert!(md.contains("- **Example 0**: `bad input`"));
    }
}
