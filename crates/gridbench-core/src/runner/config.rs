//! Benchmark configuration
//!
//! Directories, score limits, color bands and the cell palette. Every field
//! has a default, so a missing or partial config file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::render::Palette;

/// Score boundaries used to color the Score column of reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            low: 625.0,
            mid: 1250.0,
            high: 1875.0,
        }
    }
}

/// Configuration for scoring and visualization runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Directory holding `taskNNN.json` files
    pub data_dir: PathBuf,

    /// Directory the result logs are written to
    pub logs_dir: PathBuf,

    /// Number of tasks in the benchmark; ids run from 1 to this value
    pub num_tasks: u16,

    /// Score a correct task can earn at most
    pub max_task_score: u32,

    /// Open the visualizer after scoring a single task
    pub visualize_single_task: bool,

    /// Color bands for scores
    pub score_thresholds: ScoreThresholds,

    /// Cell colors, indexed by value
    pub palette: Palette,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            logs_dir: PathBuf::from("./logs"),
            num_tasks: 400,
            max_task_score: 2500,
            visualize_single_task: true,
            score_thresholds: ScoreThresholds::default(),
            palette: Palette::default(),
        }
    }
}

impl BenchConfig {
    /// Load configuration from a file
    ///
    /// Supports TOML and JSON based on file extension.
    /// Returns default config if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> BenchResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            BenchError::config_with_context(
                format!("Failed to read config file: {}", e),
                format!("Reading configuration from '{}'", path.display()),
            )
        })?;

        let config: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| {
                BenchError::config_with_context(
                    format!("Failed to parse TOML config: {}", e),
                    format!("Deserializing TOML configuration from '{}'", path.display()),
                )
            })?,
            _ => serde_json::from_str(&content).map_err(|e| {
                BenchError::config_with_context(
                    format!("Failed to parse JSON config: {}", e),
                    format!("Deserializing JSON configuration from '{}'", path.display()),
                )
            })?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the scorer and reporters cannot work with
    pub fn validate(&self) -> BenchResult<()> {
        if self.num_tasks == 0 {
            return Err(BenchError::config("num_tasks must be at least 1"));
        }
        let t = &self.score_thresholds;
        if !(t.low <= t.mid && t.mid <= t.high) {
            return Err(BenchError::config(format!(
                "score thresholds must ascend, got {} / {} / {}",
                t.low, t.mid, t.high
            )));
        }
        self.palette.validate()
    }

    /// Highest total score across all tasks
    pub fn max_overall_score(&self) -> u64 {
        u64::from(self.num_tasks) * u64::from(self.max_task_score)
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the logs directory
    pub fn with_logs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = dir.into();
        self
    }

    /// Set the number of tasks
    pub fn with_num_tasks(mut self, num_tasks: u16) -> Self {
        self.num_tasks = num_tasks;
        self
    }

    /// Enable or disable the post-scoring visualizer
    pub fn with_visualize_single_task(mut self, enabled: bool) -> Self {
        self.visualize_single_task = enabled;
        self
    }
}
