//! Gridbench scoring core
//!
//! Loads grid-puzzle tasks, runs registered solutions against every example,
//! and turns the outcomes into scored logs.
//!
//! # Features
//!
//! - **Task Loading**: `taskNNN.json` files with train, test and arc-gen pairs
//! - **Grid Comparison**: exact shape and cell equality, no partial credit
//! - **Crash Isolation**: solution errors and panics are recorded, never propagated
//! - **Report Generation**: text log, table, Markdown, JSON and HTML output
//! - **Terminal Rendering**: colored grid panels for manual inspection
//!
//! # Example
//!
//! ```rust,ignore
//! use gridbench_core::{BenchConfig, SolutionRegistry, TaskScorer};
//!
//! let scorer = TaskScorer::new(BenchConfig::default(), registry);
//! let sheet = scorer.score_all();
//! gridbench_core::report::write_logs(&sheet, &config.logs_dir, false)?;
//! ```

pub mod compare;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod render;
pub mod report;
pub mod runner;
pub mod tasks;

// Re-exports for convenience
pub use compare::{Comparison, compare, grids_equal};
pub use error::{BenchError, BenchResult};
pub use grid::Grid;
pub use metrics::{ExampleOutcome, ScoreSheet, TaskScore, TaskStatus};
pub use runner::{BenchConfig, Invocation, SolutionFn, SolutionRegistry, TaskScorer, invoke};
pub use tasks::{Task, TaskId, TaskLoader};
