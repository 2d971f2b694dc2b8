//! Single-task summary

use crate::metrics::{TaskScore, format_score};

/// Summary printed after scoring one task
pub struct TaskSummaryReporter;

impl TaskSummaryReporter {
    pub fn generate(score: &TaskScore, max_task_score: u32, verbose: bool) -> String {
        let total = score.examples.len();
        let correct = score.correct_examples();
        let incorrect = score.incorrect_examples();
        let crashed = score.crashed_examples();

        let mut out = String::new();
        out.push_str(&format!(
            "===================={} RESULTS SUMMARY====================\n",
            score.task.name().to_uppercase()
        ));
        out.push_str(&format!(
            "Score: {}/{}\n\n",
            format_score(score.score),
            max_task_score
        ));
        out.push_str(&format!("Percent Correct: {}\n\n", score.percent_correct));

        out.push_str(&format!("Correctly solved: {}/{}\n", correct.len(), total));
        out.push_str(&format!("\t- {:?}\n\n", correct));
        out.push_str(&format!("Incorrectly solved: {}/{}\n", incorrect.len(), total));
        if verbose {
            for (index, detail) in score.failure_details() {
                out.push_str(&format!("\t- {}: {}\n", index, detail));
            }
            out.push('\n');
        } else {
            out.push_str(&format!("\t- {:?}\n\n", incorrect));
        }
        out.push_str(&format!("Crashed: {}/{}\n", crashed.len(), total));

        if verbose {
            for (index, message) in score.crash_messages() {
                out.push_str(&format!("\t- {}: {}\n", index, message));
            }
        } else {
            out.push_str(&format!("\t- {:?}\n", crashed));
        }

        out
    }
}
