//! Core task types
//!
//! Defines task identifiers, example roles and the task structure loaded
//! from disk.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::grid::Grid;

/// Numeric task identifier, rendered as `task001`, `task002`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u16);

impl TaskId {
    /// Create a task id, checking it lies in `1..=max`
    pub fn new(id: u16, max: u16) -> BenchResult<Self> {
        if id == 0 || id > max {
            return Err(BenchError::InvalidTaskId {
                input: id.to_string(),
                max,
            });
        }
        Ok(Self(id))
    }

    /// Parse `"7"`, `"007"` or `"task007"`
    pub fn parse(input: &str, max: u16) -> BenchResult<Self> {
        let invalid = || BenchError::InvalidTaskId {
            input: input.to_string(),
            max,
        };

        let trimmed = input.trim();
        let digits = trimmed.strip_prefix("task").unwrap_or(trimmed);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let id: u16 = digits.parse().map_err(|_| invalid())?;
        Self::new(id, max).map_err(|_| invalid())
    }

    pub fn get(&self) -> u16 {
        self.0
    }

    /// File stem and display name, e.g. `task042`
    pub fn name(&self) -> String {
        format!("task{:03}", self.0)
    }

    /// All ids from 1 to `max`
    pub fn range(max: u16) -> impl Iterator<Item = TaskId> {
        (1..=max).map(TaskId)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task{:03}", self.0)
    }
}

/// Which set of a task file an example came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExampleRole {
    Train,
    Test,
    ArcGen,
}

impl ExampleRole {
    /// Key of this role in the task JSON
    pub fn key(&self) -> &'static str {
        match self {
            ExampleRole::Train => "train",
            ExampleRole::Test => "test",
            ExampleRole::ArcGen => "arc-gen",
        }
    }
}

impl std::fmt::Display for ExampleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single input/expected-output pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Position across the whole task (train, then test, then arc-gen)
    pub index: usize,
    pub role: ExampleRole,
    pub input: Grid,
    pub output: Grid,
}

/// On-disk shape of one pair
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPair {
    pub input: Grid,
    pub output: Grid,
}

/// On-disk shape of a task file; unknown keys are ignored
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTask {
    pub train: Vec<RawPair>,
    pub test: Vec<RawPair>,
    #[serde(rename = "arc-gen", default)]
    pub arc_gen: Vec<RawPair>,
}

/// A puzzle task with its examples in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub examples: Vec<Example>,
}

impl Task {
    /// Create a task with no examples
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            examples: Vec::new(),
        }
    }

    /// Append an example, assigning the next global index
    pub fn with_example(mut self, role: ExampleRole, input: Grid, output: Grid) -> Self {
        let index = self.examples.len();
        self.examples.push(Example {
            index,
            role,
            input,
            output,
        });
        self
    }

    pub(crate) fn from_raw(id: TaskId, raw: RawTask) -> Self {
        let groups = [
            (ExampleRole::Train, raw.train),
            (ExampleRole::Test, raw.test),
            (ExampleRole::ArcGen, raw.arc_gen),
        ];

        groups
            .into_iter()
            .flat_map(|(role, pairs)| pairs.into_iter().map(move |p| (role, p)))
            .fold(Task::new(id), |task, (role, pair)| {
                task.with_example(role, pair.input, pair.output)
            })
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Examples of one role only
    pub fn examples_with_role(&self, role: ExampleRole) -> impl Iterator<Item = &Example> {
        self.examples.iter().filter(move |e| e.role == role)
    }

    /// All-zero grids shaped like each expected output
    pub fn blank_outputs(&self) -> Vec<Grid> {
        self.examples
            .iter()
            .map(|e| Grid::zeros_like(&e.output))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parse_forms() {
        assert_eq!(TaskId::parse("7", 400).unwrap().get(), 7);
        assert_eq!(TaskId::parse("007", 400).unwrap().get(), 7);
        assert_eq!(TaskId::parse("task007", 400).unwrap().get(), 7);
        assert_eq!(TaskId::parse(" 400 ", 400).unwrap().get(), 400);
    }

    #[test]
    fn test_task_id_parse_rejects() {
        for bad in ["0", "401", "-3", "abc", "", "task", "7a", "99999999"] {
            assert!(TaskId::parse(bad, 400).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_blank_outputs_match_expected_shapes() {
        let grid = |rows: Vec<Vec<u8>>| Grid::new(rows).unwrap();
        let task = Task::new(TaskId::new(1, 400).unwrap())
            .with_example(ExampleRole::Train, grid(vec![vec![1]]), grid(vec![vec![3, 4]]))
            .with_example(ExampleRole::Test, grid(vec![vec![2]]), grid(vec![vec![5], vec![6]]));

        let blanks = task.blank_outputs();
        assert_eq!(blanks.len(), 2);
        assert_eq!(blanks[0], grid(vec![vec![0, 0]]));
        assert_eq!(blanks[1], grid(vec![vec![0], vec![0]]));
    }

    #[test]
    fn test_task_id_name() {
        let id = TaskId::new(3, 400).unwrap();
        assert_eq!(id.name(), "task003");
        assert_eq!(id.to_string(), "task003");
        assert_eq!(TaskId::range(3).count(), 3);
    }

    #[test]
    fn test_from_raw_orders_and_indexes() {
        let raw: RawTask = serde_json::from_str(
            r#"{
                "train": [{"input": [[1]], "output": [[2]]}, {"input": [[3]], "output": [[4]]}],
                "test": [{"input": [[5]], "output": [[6]]}],
                "arc-gen": [{"input": [[7]], "output": [[8]]}],
                "extra": 1
            }"#,
        )
        .unwrap();
        let task = Task::from_raw(TaskId::new(1, 400).unwrap(), raw);

        assert_eq!(task.len(), 4);
        let roles: Vec<_> = task.examples.iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![
                ExampleRole::Train,
                ExampleRole::Train,
                ExampleRole::Test,
                ExampleRole::ArcGen
            ]
        );
        let indices: Vec<_> = task.examples.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(task.examples_with_role(ExampleRole::Train).count(), 2);
    }

    #[test]
    fn test_arc_gen_optional() {
        let raw: RawTask =
            serde_json::from_str(r#"{"train": [], "test": [{"input": [[1]], "output": [[1]]}]}"#)
                .unwrap();
        let task = Task::from_raw(TaskId::new(2, 400).unwrap(), raw);
        assert_eq!(task.len(), 1);
        assert_eq!(task.examples[0].role, ExampleRole::Test);
    }
}
