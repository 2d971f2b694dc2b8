//! Plain-text results log
//!
//! The layout of `results_log.txt`: a summary block followed by one section
//! per task status.

use crate::metrics::{ScoreSheet, TaskScore, TaskStatus, format_score};

const RULE: &str = "====================";

/// Text log generator
pub struct TextLogReporter;

impl TextLogReporter {
    /// Render the log; `verbose` lists the message of every crashed example
    pub fn generate(sheet: &ScoreSheet, verbose: bool) -> String {
        let mut out = String::new();
        let n = sheet.num_tasks;
        let totals = &sheet.totals;

        section(&mut out, "RESULTS SUMMARY");
        out.push_str(&format!(
            "Score: {}/{}\n",
            format_score(totals.total_score),
            sheet.max_overall_score
        ));
        out.push_str(&format!("Correctly solved: {}/{}\n", totals.correct, n));
        out.push_str(&format!("Incorrectly Solved: {}/{}\n", totals.incorrect, n));
        out.push_str(&format!("Program Crashed: {}/{}\n", totals.crashed, n));
        out.push_str(&format!("Unattempted Tasks: {}/{}\n", totals.unattempted, n));
        if totals.errored > 0 {
            out.push_str(&format!("Unloadable Tasks: {}/{}\n", totals.errored, n));
        }
        out.push('\n');

        section(&mut out, "CORRECTLY SOLVED TASKS");
        for task in sheet.with_status(TaskStatus::Correct) {
            out.push_str(&format!(
                "{}: {}/{}\n\n",
                task.task,
                format_score(task.score),
                sheet.max_task_score
            ));
        }

        section(&mut out, "INCORRECTLY SOLVED TASKS");
        for task in sheet.with_status(TaskStatus::Incorrect) {
            out.push_str(&format!("{}:\n", task.task));
            example_lists(&mut out, task, verbose);
            out.push('\n');
        }

        section(&mut out, "CRASHED TASKS");
        for task in sheet.with_status(TaskStatus::Crashed) {
            if task.missing_solution {
                out.push_str(&format!("{}: No solution registered.\n\n", task.task));
                continue;
            }
            out.push_str(&format!("{}:\n", task.task));
            example_lists(&mut out, task, verbose);
            crash_list(&mut out, task, verbose);
            out.push('\n');
        }

        if totals.errored > 0 {
            section(&mut out, "UNLOADABLE TASKS");
            for task in sheet.with_status(TaskStatus::Errored) {
                out.push_str(&format!(
                    "{}: {}\n\n",
                    task.task,
                    task.error_message.as_deref().unwrap_or("unknown error")
                ));
            }
        }

        section(&mut out, "UNATTEMPTED TASKS");
        for task in sheet.with_status(TaskStatus::Unattempted) {
            out.push_str(&format!("{}\n", task.task));
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{RULE}{title}{RULE}\n"));
}

fn example_lists(out: &mut String, task: &TaskScore, verbose: bool) {
    out.push_str(&format!("\tCorrect Examples: {:?}\n", task.correct_examples()));
    out.push_str(&format!("\tIncorrect Examples: {:?}\n", task.incorrect_examples()));
    if verbose {
        for (index, detail) in task.failure_details() {
            out.push_str(&format!("\t\t{}: {}\n", index, detail));
        }
    }
}

fn crash_list(out: &mut String, task: &TaskScore, verbose: bool) {
    if verbose {
        out.push_str("\tCrashed Examples:\n");
        for (index, message) in task.crash_messages() {
            out.push_str(&format!("\t\t{}: {}\n", index, message));
        }
    } else {
        out.push_str(&format!("\tCrashed Examples: {:?}\n", task.crashed_examples()));
    }
}
