//! Scoring commands

use std::io::IsTerminal;

use anyhow::{Context, Result};
use colored::*;
use gridbench_core::report::{
    ReportFormat, TaskSummaryReporter, generate_report, write_logs,
};
use gridbench_core::runner::ScoreProgress;
use gridbench_core::{BenchConfig, TaskScorer};

use super::visualize;
use crate::args::FormatArg;
use crate::console::CliConsole;

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Score one task and print its summary
///
/// A task file that cannot be loaded is an error here, unlike in [`all`].
pub fn single(config: BenchConfig, task: &str, verbose: bool) -> Result<()> {
    let scorer = TaskScorer::new(config, gridbench_solutions::registry());
    let id = scorer.parse_task_id(task)?;

    let interactive = std::io::stdout().is_terminal();
    let show = scorer.config().visualize_single_task && interactive;

    let loaded = scorer
        .loader()
        .load(id)
        .with_context(|| format!("Failed to load {}", id))?;
    let score = scorer.score_loaded(&loaded, show);

    println!(
        "{}",
        TaskSummaryReporter::generate(&score, scorer.config().max_task_score, verbose)
    );

    if score.missing_solution {
        CliConsole::warn(&format!("No solution registered for {}", id));
    } else if score.is_correct() {
        CliConsole::success(&format!("{} solved", id));
    }

    if !scorer.config().visualize_single_task {
        println!(
            "{}",
            "Set visualize_single_task = true in the config file to browse the examples.".dimmed()
        );
    }

    if show {
        // no solution ran, so show blank results of the expected shapes
        let blanks = loaded.blank_outputs();
        let results = if score.missing_solution {
            Some(blanks.iter().collect())
        } else {
            score.produced_grids()
        };
        visualize::browse(&loaded, results, &scorer.config().palette, false)?;
    }

    Ok(())
}

/// Score every task, write the logs and print a report
pub fn all(config: BenchConfig, verbose: bool, format: FormatArg) -> Result<()> {
    let logs_dir = config.logs_dir.clone();
    let mut scorer = TaskScorer::new(config, gridbench_solutions::registry());

    scorer.set_progress_callback(Box::new(|progress: ScoreProgress| {
        println!(
            "{} {}",
            format!("[{}/{}]", progress.current + 1, progress.total).dimmed(),
            progress.task
        );
    }));

    CliConsole::print_header("Scoring all tasks");
    let sheet = scorer.score_all();

    let written = write_logs(&sheet, &logs_dir, verbose)
        .with_context(|| format!("Failed to write logs to {}", logs_dir.display()))?;

    let report = generate_report(&sheet, format.into())?;
    println!("{}", report);

    for path in &written {
        println!("{} {}", "Wrote".dimmed(), path.display());
    }

    let totals = &sheet.totals;
    CliConsole::success(&format!(
        "Scoring complete: {}/{} tasks correct ({:.1}%)",
        totals.correct,
        sheet.num_tasks,
        sheet.solve_rate() * 100.0
    ));
    if totals.errored > 0 {
        CliConsole::error(&format!("{} task file(s) could not be loaded", totals.errored));
    }

    Ok(())
}
