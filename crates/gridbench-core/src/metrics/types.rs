//! Core result types for scoring
//!
//! Defines per-example outcomes and the per-task score record.

use serde::{Deserialize, Serialize};

use crate::compare::Comparison;
use crate::grid::Grid;
use crate::tasks::{ExampleRole, TaskId};

/// Score given to any task that is not fully correct
pub const FAIL_SCORE: f64 = 0.001;

/// Outcome of running a solution on one example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExampleOutcome {
    /// Output matched the expected grid
    Passed,
    /// Output was produced but did not match
    Failed { comparison: Comparison },
    /// Solution returned an error or panicked
    Crashed { message: String },
}

/// Result of a single example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleResult {
    pub index: usize,
    pub role: ExampleRole,
    #[serde(flatten)]
    pub outcome: ExampleOutcome,
    /// Grid the solution produced (zeros for crashes), kept only on request
    #[serde(skip)]
    pub produced: Option<Grid>,
}

impl ExampleResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, ExampleOutcome::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, ExampleOutcome::Failed { .. })
    }

    pub fn crashed(&self) -> bool {
        matches!(self.outcome, ExampleOutcome::Crashed { .. })
    }
}

/// Classification of a task after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Every example passed
    Correct,
    /// Some example failed and none crashed
    Incorrect,
    /// Some example crashed, or there was no solution to run
    Crashed,
    /// No solution registered
    Unattempted,
    /// Task file could not be loaded
    Errored,
}

impl TaskStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Correct => "Correct",
            TaskStatus::Incorrect => "Incorrect",
            TaskStatus::Crashed => "Crashed",
            TaskStatus::Unattempted => "Unattempted",
            TaskStatus::Errored => "Errored",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pass/fail/crash tallies over a set of examples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCounts {
    pub passed: usize,
    pub failed: usize,
    pub crashed: usize,
}

impl ExampleCounts {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.crashed
    }

    pub fn add(&mut self, other: ExampleCounts) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.crashed += other.crashed;
    }
}

/// Scored result of one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskScore {
    pub task: TaskId,
    pub status: TaskStatus,
    pub score: f64,
    /// Share of passing examples, 0–100, two decimals
    pub percent_correct: f64,
    pub examples: Vec<ExampleResult>,
    /// The task was attempted but no solution could be found
    #[serde(default)]
    pub missing_solution: bool,
    /// Load failure message for errored tasks
    #[serde(default)]
    pub error_message: Option<String>,
}

impl TaskScore {
    /// Build a score from example results; `tentative_score` applies only if all pass
    pub fn from_examples(task: TaskId, examples: Vec<ExampleResult>, tentative_score: f64) -> Self {
        let passed = examples.iter().filter(|e| e.passed()).count();
        let all_passed = !examples.is_empty() && passed == examples.len();

        let percent_correct = if examples.is_empty() {
            0.0
        } else {
            round_to(passed as f64 / examples.len() as f64 * 100.0, 2)
        };

        let (score, status) = if all_passed {
            (tentative_score, TaskStatus::Correct)
        } else if examples.iter().any(ExampleResult::crashed) {
            (FAIL_SCORE, TaskStatus::Crashed)
        } else {
            (FAIL_SCORE, TaskStatus::Incorrect)
        };

        Self {
            task,
            status,
            score,
            percent_correct,
            examples,
            missing_solution: false,
            error_message: None,
        }
    }

    /// The task was requested but has no solution to run
    pub fn missing_solution(task: TaskId) -> Self {
        Self {
            missing_solution: true,
            ..Self::empty(task, TaskStatus::Crashed)
        }
    }

    /// No solution exists and the task was not requested explicitly
    pub fn unattempted(task: TaskId) -> Self {
        Self::empty(task, TaskStatus::Unattempted)
    }

    /// The task file could not be loaded
    pub fn errored(task: TaskId, message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::empty(task, TaskStatus::Errored)
        }
    }

    fn empty(task: TaskId, status: TaskStatus) -> Self {
        Self {
            task,
            status,
            score: FAIL_SCORE,
            percent_correct: 0.0,
            examples: Vec::new(),
            missing_solution: false,
            error_message: None,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.status == TaskStatus::Correct
    }

    /// Indices of passing examples
    pub fn correct_examples(&self) -> Vec<usize> {
        self.indices(ExampleResult::passed)
    }

    /// Indices of examples with wrong output
    pub fn incorrect_examples(&self) -> Vec<usize> {
        self.indices(ExampleResult::failed)
    }

    /// Indices of crashed examples
    pub fn crashed_examples(&self) -> Vec<usize> {
        self.indices(ExampleResult::crashed)
    }

    /// `(index, message)` for each crashed example
    pub fn crash_messages(&self) -> Vec<(usize, &str)> {
        self.examples
            .iter()
            .filter_map(|e| match &e.outcome {
                ExampleOutcome::Crashed { message } => Some((e.index, message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// `(index, description)` for each example with wrong output
    pub fn failure_details(&self) -> Vec<(usize, String)> {
        self.examples
            .iter()
            .filter_map(|e| match &e.outcome {
                ExampleOutcome::Failed { comparison } => Some((e.index, comparison.describe())),
                _ => None,
            })
            .collect()
    }

    pub fn counts(&self) -> ExampleCounts {
        ExampleCounts {
            passed: self.examples.iter().filter(|e| e.passed()).count(),
            failed: self.examples.iter().filter(|e| e.failed()).count(),
            crashed: self.examples.iter().filter(|e| e.crashed()).count(),
        }
    }

    /// Produced grids in example order, if they were kept
    pub fn produced_grids(&self) -> Option<Vec<&Grid>> {
        self.examples.iter().map(|e| e.produced.as_ref()).collect()
    }

    fn indices(&self, pred: impl Fn(&ExampleResult) -> bool) -> Vec<usize> {
        self.examples
            .iter()
            .filter(|e| pred(e))
            .map(|e| e.index)
            .collect()
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render a score the way the logs show it: integers bare, fractions to 3 places
pub fn format_score(score: f64) -> String {
    format!("{}", round_to(score, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> TaskId {
        TaskId::new(4, 400).unwrap()
    }

    fn result(index: usize, outcome: ExampleOutcome) -> ExampleResult {
        ExampleResult {
            index,
            role: ExampleRole::Train,
            outcome,
            produced: None,
        }
    }

    fn failed() -> ExampleOutcome {
        ExampleOutcome::Failed {
            comparison: Comparison::CellMismatch {
                mismatched: 1,
                first: (0, 0),
            },
        }
    }

    fn crashed(msg: &str) -> ExampleOutcome {
        ExampleOutcome::Crashed {
            message: msg.to_string(),
        }
    }

    #[test]
    fn test_all_passed_is_correct() {
        let score = TaskScore::from_examples(
            id(),
            vec![
                result(0, ExampleOutcome::Passed),
                result(1, ExampleOutcome::Passed),
            ],
            2400.0,
        );
        assert_eq!(score.status, TaskStatus::Correct);
        assert_eq!(score.score, 2400.0);
        assert_eq!(score.percent_correct, 100.0);
        assert!(score.is_correct());
    }

    #[test]
    fn test_failure_without_crash_is_incorrect() {
        let score = TaskScore::from_examples(
            id(),
            vec![
                result(0, ExampleOutcome::Passed),
                result(1, failed()),
                result(2, ExampleOutcome::Passed),
            ],
            2400.0,
        );
        assert_eq!(score.status, TaskStatus::Incorrect);
        assert_eq!(score.score, FAIL_SCORE);
        assert_eq!(score.percent_correct, 66.67);
        assert_eq!(score.correct_examples(), vec![0, 2]);
        assert_eq!(score.incorrect_examples(), vec![1]);
    }

    #[test]
    fn test_any_crash_is_crashed() {
        let score = TaskScore::from_examples(
            id(),
            vec![
                result(0, failed()),
                result(1, crashed("boom")),
                result(2, ExampleOutcome::Passed),
            ],
            2400.0,
        );
        assert_eq!(score.status, TaskStatus::Crashed);
        assert_eq!(score.crashed_examples(), vec![1]);
        assert_eq!(score.crash_messages(), vec![(1, "boom")]);
        assert_eq!(
            score.counts(),
            ExampleCounts {
                passed: 1,
                failed: 1,
                crashed: 1
            }
        );
    }

    #[test]
    fn test_no_examples_is_incorrect() {
        let score = TaskScore::from_examples(id(), Vec::new(), 2400.0);
        assert_eq!(score.status, TaskStatus::Incorrect);
        assert_eq!(score.percent_correct, 0.0);
        assert_eq!(score.score, FAIL_SCORE);
    }

    #[test]
    fn test_special_constructors() {
        let missing = TaskScore::missing_solution(id());
        assert_eq!(missing.status, TaskStatus::Crashed);
        assert!(missing.missing_solution);

        let errored = TaskScore::errored(id(), "bad json");
        assert_eq!(errored.status, TaskStatus::Errored);
        assert_eq!(errored.error_message.as_deref(), Some("bad json"));

        assert_eq!(TaskScore::unattempted(id()).status, TaskStatus::Unattempted);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(2432.0), "2432");
        assert_eq!(format_score(FAIL_SCORE), "0.001");
        assert_eq!(format_score(2432.0 + 3.0 * FAIL_SCORE), "2432.003");
    }

    #[test]
    fn test_example_result_serializes_flat() {
        let json = serde_json::to_value(result(3, crashed("x"))).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["outcome"], "crashed");
        assert_eq!(json["message"], "x");
        assert!(json.get("produced").is_none());
    }
}
