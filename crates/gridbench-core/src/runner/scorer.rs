//! Task scorer
//!
//! Runs registered solutions over task examples and collects the results
//! into [`TaskScore`]s and a [`ScoreSheet`].

use std::time::Instant;

use super::config::BenchConfig;
use super::invoker::{Invocation, invoke};
use super::registry::{Solution, SolutionRegistry};
use crate::compare::compare;
use crate::error::BenchResult;
use crate::grid::Grid;
use crate::metrics::{ExampleOutcome, ExampleResult, ScoreSheet, TaskScore};
use crate::tasks::{Task, TaskId, TaskLoader};

/// Callback for progress updates during an all-tasks run
pub type ProgressCallback = Box<dyn Fn(ScoreProgress)>;

/// Progress update during scoring
#[derive(Debug, Clone)]
pub struct ScoreProgress {
    /// Position of the current task among attempted tasks (0-based)
    pub current: usize,
    /// Number of attempted tasks
    pub total: usize,
    pub task: TaskId,
}

/// Scores solutions against task files
pub struct TaskScorer {
    config: BenchConfig,
    loader: TaskLoader,
    registry: SolutionRegistry,
    progress_callback: Option<ProgressCallback>,
}

impl TaskScorer {
    /// Create a scorer reading tasks from the configured data directory
    pub fn new(config: BenchConfig, registry: SolutionRegistry) -> Self {
        let loader = TaskLoader::new(&config.data_dir);
        Self {
            config,
            loader,
            registry,
            progress_callback: None,
        }
    }

    /// Set progress callback
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn loader(&self) -> &TaskLoader {
        &self.loader
    }

    pub fn registry(&self) -> &SolutionRegistry {
        &self.registry
    }

    /// Parse a user-supplied task number against the configured range
    pub fn parse_task_id(&self, input: &str) -> BenchResult<TaskId> {
        TaskId::parse(input, self.config.num_tasks)
    }

    /// Score a single task
    ///
    /// Fails only if the task file cannot be loaded. A missing solution or a
    /// crashing one is part of the returned score.
    pub fn score_task(&self, id: TaskId, keep_outputs: bool) -> BenchResult<TaskScore> {
        let task = self.loader.load(id)?;
        Ok(self.score_loaded(&task, keep_outputs))
    }

    /// Score an already loaded task
    pub fn score_loaded(&self, task: &Task, keep_outputs: bool) -> TaskScore {
        match self.registry.get(task.id) {
            Some(solution) => self.run_solution(task, solution, keep_outputs),
            None => {
                tracing::warn!("No solution registered for {}", task.id);
                TaskScore::missing_solution(task.id)
            }
        }
    }

    /// Score every registered task and mark the rest as unattempted
    pub fn score_all(&self) -> ScoreSheet {
        let start = Instant::now();
        let attempted: Vec<TaskId> = self
            .registry
            .task_ids()
            .filter(|id| id.get() <= self.config.num_tasks)
            .collect();

        let mut scores = Vec::with_capacity(usize::from(self.config.num_tasks));
        let mut next_attempt = 0;

        for id in TaskId::range(self.config.num_tasks) {
            if !self.registry.contains(id) {
                scores.push(TaskScore::unattempted(id));
                continue;
            }

            if let Some(ref callback) = self.progress_callback {
                callback(ScoreProgress {
                    current: next_attempt,
                    total: attempted.len(),
                    task: id,
                });
            }
            next_attempt += 1;

            match self.score_task(id, false) {
                Ok(score) => scores.push(score),
                Err(e) => {
                    tracing::error!("Failed to load {}: {}", id, e);
                    scores.push(TaskScore::errored(id, e.to_string()));
                }
            }
        }

        tracing::info!(
            "Scored {} task(s) in {:.2}s",
            attempted.len(),
            start.elapsed().as_secs_f64()
        );

        ScoreSheet::from_scores(scores, &self.config)
    }

    fn run_solution(&self, task: &Task, solution: &Solution, keep_outputs: bool) -> TaskScore {
        let examples = task
            .examples
            .iter()
            .map(|example| {
                let (outcome, produced) = match invoke(solution, &example.input) {
                    Invocation::Produced(grid) => {
                        let comparison = compare(&grid, &example.output);
                        let outcome = if comparison.is_match() {
                            ExampleOutcome::Passed
                        } else {
                            ExampleOutcome::Failed { comparison }
                        };
                        (outcome, grid)
                    }
                    Invocation::Crashed(message) => {
                        tracing::debug!("{} crashed on example {}", task.id, example.index);
                        (
                            ExampleOutcome::Crashed { message },
                            Grid::zeros_like(&example.output),
                        )
                    }
                };

                ExampleResult {
                    index: example.index,
                    role: example.role,
                    outcome,
                    produced: keep_outputs.then_some(produced),
                }
            })
            .collect();

        let tentative = solution.tentative_score(self.config.max_task_score);
        TaskScore::from_examples(task.id, examples, tentative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TaskStatus;
    use crate::tasks::ExampleRole;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn id(n: u16) -> TaskId {
        TaskId::new(n, 5).unwrap()
    }

    fn identity(g: &Grid) -> anyhow::Result<Grid> {
        Ok(g.clone())
    }

    fn panics_on_twos(g: &Grid) -> anyhow::Result<Grid> {
        if g.cells().any(|(_, v)| v == 2) {
            panic!("saw a two");
        }
        Ok(g.clone())
    }

    fn sample_task(n: u16) -> Task {
        Task::new(id(n))
            .with_example(ExampleRole::Train, grid(&[&[1]]), grid(&[&[1]]))
            .with_example(ExampleRole::Train, grid(&[&[2]]), grid(&[&[2]]))
            .with_example(ExampleRole::Test, grid(&[&[3]]), grid(&[&[4]]))
    }

    fn config(dir: &TempDir) -> BenchConfig {
        BenchConfig::default()
            .with_data_dir(dir.path())
            .with_num_tasks(5)
    }

    #[test]
    fn test_score_loaded_classifies_examples() {
        let dir = TempDir::new().unwrap();
        let registry = SolutionRegistry::new().with(id(1), panics_on_twos, 100);
        let scorer = TaskScorer::new(config(&dir), registry);

        let score = scorer.score_loaded(&sample_task(1), true);
        assert_eq!(score.status, TaskStatus::Crashed);
        assert_eq!(score.correct_examples(), vec![0]);
        assert_eq!(score.crashed_examples(), vec![1]);
        assert_eq!(score.incorrect_examples(), vec![2]);
        assert_eq!(score.crash_messages(), vec![(1, "saw a two")]);

        let produced = score.produced_grids().unwrap();
        assert_eq!(produced[1], &grid(&[&[0]]));
        assert_eq!(produced[2], &grid(&[&[3]]));
    }

    #[test]
    fn test_outputs_dropped_unless_requested() {
        let dir = TempDir::new().unwrap();
        let registry = SolutionRegistry::new().with(id(1), identity, 100);
        let scorer = TaskScorer::new(config(&dir), registry);

        let score = scorer.score_loaded(&sample_task(1), false);
        assert!(score.examples.iter().all(|e| e.produced.is_none()));
        assert!(score.produced_grids().is_none());
    }

    #[test]
    fn test_missing_solution() {
        let dir = TempDir::new().unwrap();
        let scorer = TaskScorer::new(config(&dir), SolutionRegistry::new());

        let score = scorer.score_loaded(&sample_task(2), false);
        assert!(score.missing_solution);
        assert_eq!(score.status, TaskStatus::Crashed);
    }

    #[test]
    fn test_score_task_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let registry = SolutionRegistry::new().with(id(1), identity, 100);
        let scorer = TaskScorer::new(config(&dir), registry);
        assert!(scorer.score_task(id(1), false).is_err());
    }

    #[test]
    fn test_score_all_continues_past_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("task001.json"),
            r#"{"train": [{"input": [[5]], "output": [[5]]}], "test": []}"#,
        )
        .unwrap();
        fs::write(dir.path().join("task003.json"), "not json").unwrap();

        let registry = SolutionRegistry::new()
            .with(id(1), identity, 500)
            .with(id(3), identity, 10)
            .with(id(4), identity, 10);
        let mut scorer = TaskScorer::new(config(&dir), registry);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        scorer.set_progress_callback(Box::new(move |p: ScoreProgress| {
            sink.borrow_mut().push((p.current, p.total, p.task.get()));
        }));

        let sheet = scorer.score_all();
        let statuses: Vec<_> = sheet.tasks.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![
                TaskStatus::Correct,
                TaskStatus::Unattempted,
                TaskStatus::Errored,
                TaskStatus::Errored,
                TaskStatus::Unattempted,
            ]
        );
        assert_eq!(sheet.tasks[0].score, 2000.0);
        assert_eq!(*seen.borrow(), vec![(0, 3, 1), (1, 3, 3), (2, 3, 4)]);
    }

    #[test]
    fn test_parse_task_id_uses_config_range() {
        let dir = TempDir::new().unwrap();
        let scorer = TaskScorer::new(config(&dir), SolutionRegistry::new());
        assert_eq!(scorer.parse_task_id("5").unwrap().get(), 5);
        assert!(scorer.parse_task_id("6").is_err());
    }
}
