//! List task files and registered solutions

use anyhow::Result;
use colored::*;
use gridbench_core::{BenchConfig, TaskLoader};

use crate::console::CliConsole;

pub fn run(config: &BenchConfig) -> Result<()> {
    let loader = TaskLoader::new(&config.data_dir);
    let registry = gridbench_solutions::registry();
    let ids = loader.available_ids(config.num_tasks);

    CliConsole::print_header(&format!("Tasks in {}", config.data_dir.display()));

    if ids.is_empty() {
        CliConsole::warn("No task files found");
        return Ok(());
    }

    for id in &ids {
        match registry.get(*id) {
            Some(solution) => println!(
                "  {} {} ({} bytes)",
                "●".green(),
                id,
                solution.source_len
            ),
            None => println!("  {} {}", "○".dimmed(), id.to_string().dimmed()),
        }
    }

    let solved = ids.iter().filter(|id| registry.contains(**id)).count();
    println!();
    println!(
        "{} task file(s), {} with a registered solution",
        ids.len(),
        solved
    );

    let orphans: Vec<String> = registry
        .task_ids()
        .filter(|id| !ids.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !orphans.is_empty() {
        CliConsole::warn(&format!("Solutions without a task file: {}", orphans.join(", ")));
    }

    Ok(())
}
