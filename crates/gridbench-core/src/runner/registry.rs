//! Solution registry
//!
//! Maps each task id to the function that solves it. Registration is
//! explicit; nothing is discovered at runtime.

use std::collections::BTreeMap;

use crate::grid::Grid;
use crate::tasks::TaskId;

/// Signature every solution implements
pub type SolutionFn = fn(&Grid) -> anyhow::Result<Grid>;

/// A registered solution
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub task: TaskId,
    pub func: SolutionFn,
    /// Size of the solution source in bytes; shorter solutions score higher
    pub source_len: usize,
}

impl Solution {
    pub fn new(task: TaskId, func: SolutionFn, source_len: usize) -> Self {
        Self {
            task,
            func,
            source_len,
        }
    }

    /// Score the task earns if every example passes
    pub fn tentative_score(&self, max_task_score: u32) -> f64 {
        let remaining = (max_task_score as usize).saturating_sub(self.source_len);
        remaining.max(1) as f64
    }
}

/// Task id to solution lookup, ordered by id
#[derive(Debug, Clone, Default)]
pub struct SolutionRegistry {
    solutions: BTreeMap<TaskId, Solution>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solution, replacing any previous one for the same task
    pub fn register(&mut self, task: TaskId, func: SolutionFn, source_len: usize) -> &mut Self {
        if self
            .solutions
            .insert(task, Solution::new(task, func, source_len))
            .is_some()
        {
            tracing::warn!("Replacing previously registered solution for {}", task);
        }
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, task: TaskId, func: SolutionFn, source_len: usize) -> Self {
        self.register(task, func, source_len);
        self
    }

    pub fn get(&self, task: TaskId) -> Option<&Solution> {
        self.solutions.get(&task)
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.solutions.contains_key(&task)
    }

    /// Registered task ids in ascending order
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.solutions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
