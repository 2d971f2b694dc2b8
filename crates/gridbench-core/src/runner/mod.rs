//! Scoring runner components
//!
//! Configuration, the solution registry, the invoker and the scorer.

mod config;
mod invoker;
mod registry;
mod scorer;

pub use config::{BenchConfig, ScoreThresholds};
pub use invoker::{Invocation, invoke};
pub use registry::{Solution, SolutionFn, SolutionRegistry};
pub use scorer::{ProgressCallback, ScoreProgress, TaskScorer};
