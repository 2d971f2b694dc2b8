//! Command routing logic for CLI

use anyhow::{Context, Result};
use gridbench_core::BenchConfig;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Score {
            task,
            all_tasks,
            verbose,
            format,
        } => match single_task(task, all_tasks) {
            Some(task) => commands::score::single(config, &task, verbose),
            None => commands::score::all(config, verbose, format),
        },
        Commands::Visualize {
            task,
            example,
            numbers,
        } => commands::visualize::run(&config, &task, example, numbers),
        Commands::List => commands::list::run(&config),
    }
}

/// The task to score alone; `--all-tasks` wins over a task number
fn single_task(task: Option<String>, all_tasks: bool) -> Option<String> {
    task.filter(|_| !all_tasks)
}

/// Config file first, then command-line and environment overrides
fn load_config(cli: &Cli) -> Result<BenchConfig> {
    let mut config = BenchConfig::load_from_file(&cli.config_file)
        .with_context(|| format!("Failed to load {}", cli.config_file.display()))?;

    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir.clone());
    }
    if let Some(dir) = &cli.logs_dir {
        config = config.with_logs_dir(dir.clone());
    }

    tracing::debug!(
        "Using data_dir={} logs_dir={}",
        config.data_dir.display(),
        config.logs_dir.display()
    );
    Ok(config)
}
