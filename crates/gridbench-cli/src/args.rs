//! CLI argument definitions using clap
//!
//! - gridbench score [TASK]         # Score one task, or all of them
//! - gridbench visualize <TASK>     # Browse a task's examples
//! - gridbench list                 # Task files and registered solutions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "gridbench.toml";

#[derive(Parser)]
#[command(name = "gridbench")]
#[command(about = "Score and visualize grid-puzzle solutions")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Directory holding taskNNN.json files
    #[arg(long, global = true, env = "GRIDBENCH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory the result logs are written to
    #[arg(long, global = true, env = "GRIDBENCH_LOGS_DIR")]
    pub logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score solutions against their tasks
    Score {
        /// Task number (e.g. 7, 007 or task007); omit to score every task
        task: Option<String>,

        /// Score every task and write the result logs; overrides TASK
        #[arg(short = 'a', long)]
        all_tasks: bool,

        /// Include crash messages in the output
        #[arg(short, long)]
        verbose: bool,

        /// Report format printed after an all-tasks run
        #[arg(long, value_enum, default_value_t = FormatArg::Table)]
        format: FormatArg,
    },

    /// Draw a task's examples in the terminal
    Visualize {
        /// Task number (e.g. 7, 007 or task007)
        task: String,

        /// Show only this example and exit
        #[arg(long)]
        example: Option<usize>,

        /// Overlay cell values on the colors
        #[arg(long)]
        numbers: bool,
    },

    /// List task files and whether a solution is registered
    List,
}

/// Report format for `score`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Markdown,
    Json,
}
