//! End-to-end scoring against the fixture tasks

use std::path::PathBuf;

use gridbench_core::compare::Comparison;
use gridbench_core::metrics::{ExampleOutcome, TaskStatus};
use gridbench_core::report::{TaskSummaryReporter, TEXT_LOG_FILE, write_logs};
use gridbench_core::{BenchConfig, BenchError, Grid, SolutionRegistry, TaskId, TaskScorer};
use tempfile::TempDir;

const NUM_TASKS: u16 = 6;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("data")
}

fn id(n: u16) -> TaskId {
    TaskId::new(n, NUM_TASKS).unwrap()
}

fn identity(grid: &Grid) -> anyhow::Result<Grid> {
    Ok(grid.clone())
}

fn recolor_ones(grid: &Grid) -> anyhow::Result<Grid> {
    let mut out = grid.clone();
    for ((r, c), v) in grid.cells() {
        if v == 1 {
            out.set(r, c, 2)?;
        }
    }
    Ok(out)
}

fn fragile(grid: &Grid) -> anyhow::Result<Grid> {
    if grid.cells().any(|(_, v)| v == 5) {
        panic!("saw a five");
    }
    if grid.cells().any(|(_, v)| v == 7) {
        anyhow::bail!("sevens are not allowed");
    }
    Ok(grid.clone())
}

fn scorer() -> TaskScorer {
    let config = BenchConfig::default()
        .with_data_dir(data_dir())
        .with_num_tasks(NUM_TASKS);
    let registry = SolutionRegistry::new()
        .with(id(1), identity, 100)
        .with(id(2), recolor_ones, 100)
        .with(id(3), fragile, 100)
        // task004.json does not exist, task006.json is malformed
        .with(id(4), identity, 100)
        .with(id(6), identity, 100);
    TaskScorer::new(config, registry)
}

#[test]
fn test_all_tasks_counts() {
    let sheet = scorer().score_all();
    let totals = &sheet.totals;

    assert_eq!(sheet.tasks.len(), usize::from(NUM_TASKS));
    assert_eq!(totals.correct, 1);
    assert_eq!(totals.incorrect, 1);
    assert_eq!(totals.crashed, 1);
    assert_eq!(totals.unattempted, 1);
    assert_eq!(totals.errored, 2);

    assert_eq!(totals.examples.passed, 6);
    assert_eq!(totals.examples.failed, 2);
    assert_eq!(totals.examples.crashed, 2);

    assert!((totals.total_score - 2400.005).abs() < 1e-9);
    assert_eq!(sheet.max_overall_score, 15000);

    let statuses: Vec<TaskStatus> = sheet.tasks.iter().map(|t| t.status).collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::Correct,
            TaskStatus::Incorrect,
            TaskStatus::Crashed,
            TaskStatus::Errored,
            TaskStatus::Unattempted,
            TaskStatus::Errored,
        ]
    );
}

#[test]
fn test_example_outcomes() {
    let scorer = scorer();

    let incorrect = scorer.score_task(id(2), false).unwrap();
    assert_eq!(incorrect.percent_correct, 50.0);
    assert_eq!(incorrect.correct_examples(), vec![0, 3]);
    assert_eq!(incorrect.incorrect_examples(), vec![1, 2]);
    assert_eq!(
        incorrect.examples[2].outcome,
        ExampleOutcome::Failed {
            comparison: Comparison::DimensionMismatch {
                expected: (2, 1),
                actual: (1, 1),
            }
        }
    );

    let crashed = scorer.score_task(id(3), false).unwrap();
    assert_eq!(crashed.percent_correct, 33.33);
    assert_eq!(crashed.crashed_examples(), vec![1, 2]);
    assert_eq!(
        crashed.crash_messages(),
        vec![(1, "saw a five"), (2, "sevens are not allowed")]
    );
}

#[test]
fn test_verbose_summary_explains_failures() {
    let score = scorer().score_task(id(2), false).unwrap();

    let verbose = TaskSummaryReporter::generate(&score, 2500, true);
    assert!(verbose.contains("\t- 2: expected shape (2, 1), got (1, 1)\n"));

    let plain = TaskSummaryReporter::generate(&score, 2500, false);
    assert!(plain.contains("Incorrectly solved: 2/4\n\t- [1, 2]\n"));
    assert!(!plain.contains("expected shape"));
}

#[test]
fn test_scoring_is_repeatable() {
    let scorer = scorer();
    let first = scorer.score_all();
    let second = scorer.score_all();

    assert_eq!(first.tasks, second.tasks);
    assert_eq!(first.totals, second.totals);
}

#[test]
fn test_single_task_load_failures() {
    let scorer = scorer();

    assert!(matches!(
        scorer.score_task(id(4), false),
        Err(BenchError::TaskNotFound { .. })
    ));
    assert!(matches!(
        scorer.score_task(id(6), false),
        Err(BenchError::TaskParse { .. })
    ));
}

#[test]
fn test_single_task_keeps_outputs() {
    let score = scorer().score_task(id(3), true).unwrap();
    let produced = score.produced_grids().unwrap();

    assert_eq!(produced.len(), 3);
    assert_eq!(produced[0], &Grid::new(vec![vec![1]]).unwrap());
    // crashed examples get a blank grid of the expected shape
    assert_eq!(produced[1], &Grid::new(vec![vec![0]]).unwrap());

    let summary = TaskSummaryReporter::generate(&score, 2500, true);
    assert!(summary.contains("Crashed: 2/3"));
    assert!(summary.contains("\t- 2: sevens are not allowed"));
}

#[test]
fn test_logs_written() {
    let dir = TempDir::new().unwrap();
    let sheet = scorer().score_all();

    let written = write_logs(&sheet, dir.path(), true).unwrap();
    assert_eq!(written.len(), 3);

    let log = std::fs::read_to_string(dir.path().join(TEXT_LOG_FILE)).unwrap();
    assert!(log.contains("Score: 2400.005/15000"));
    assert!(log.contains("Correctly solved: 1/6"));
    assert!(log.contains("Unloadable Tasks: 2/6"));
    assert!(log.contains("task001: 2400/2500"));
    assert!(log.contains(
        "task002:\n\tCorrect Examples: [0, 3]\n\tIncorrect Examples: [1, 2]\n"
    ));
    assert!(log.contains(
        "\tIncorrect Examples: [1, 2]\n\t\t1: 2 cell(s) differ, first at (0, 0)\n\t\t2: expected shape (2, 1), got (1, 1)\n"
    ));
    assert!(log.contains("\t\t1: saw a five\n"));
    assert!(log.contains("task004: Task file not found"));
    assert!(log.ends_with("task005\n"));
}
