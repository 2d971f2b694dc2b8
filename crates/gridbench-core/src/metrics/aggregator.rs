//! Aggregation of task scores
//!
//! Rolls individual task scores up into a [`ScoreSheet`] with totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ExampleCounts, TaskScore, TaskStatus, round_to};
use crate::runner::{BenchConfig, ScoreThresholds};

/// Totals over a whole run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all task scores, rounded to 3 decimals
    pub total_score: f64,
    pub correct: usize,
    pub incorrect: usize,
    pub crashed: usize,
    pub unattempted: usize,
    pub errored: usize,
    /// Example-level tallies across attempted tasks
    pub examples: ExampleCounts,
}

impl Totals {
    /// Compute totals from a set of task scores
    pub fn from_scores(scores: &[TaskScore]) -> Self {
        let mut totals = Totals::default();
        let mut sum = 0.0;

        for score in scores {
            sum += score.score;
            totals.examples.add(score.counts());
            match score.status {
                TaskStatus::Correct => totals.correct += 1,
                TaskStatus::Incorrect => totals.incorrect += 1,
                TaskStatus::Crashed => totals.crashed += 1,
                TaskStatus::Unattempted => totals.unattempted += 1,
                TaskStatus::Errored => totals.errored += 1,
            }
        }

        totals.total_score = round_to(sum, 3);
        totals
    }
}

/// Full result of scoring every task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// One entry per task id, ascending
    pub tasks: Vec<TaskScore>,
    pub totals: Totals,
    pub num_tasks: u16,
    pub max_task_score: u32,
    pub max_overall_score: u64,
    /// Color bands the reports use for the Score column
    pub score_thresholds: ScoreThresholds,
    pub generated_at: DateTime<Utc>,
}

impl ScoreSheet {
    /// Build a sheet from per-task scores
    pub fn from_scores(mut tasks: Vec<TaskScore>, config: &BenchConfig) -> Self {
        tasks.sort_by_key(|t| t.task);
        let totals = Totals::from_scores(&tasks);

        Self {
            tasks,
            totals,
            num_tasks: config.num_tasks,
            max_task_score: config.max_task_score,
            max_overall_score: config.max_overall_score(),
            score_thresholds: config.score_thresholds,
            generated_at: Utc::now(),
        }
    }

    /// Tasks with the given status, in id order
    pub fn with_status(&self, status: TaskStatus) -> impl Iterator<Item = &TaskScore> {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    /// Share of all tasks solved correctly, 0.0–1.0
    pub fn solve_rate(&self) -> f64 {
        if self.num_tasks == 0 {
            0.0
        } else {
            self.totals.correct as f64 / f64::from(self.num_tasks)
        }
    }
}
