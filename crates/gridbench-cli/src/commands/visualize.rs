//! Terminal visualizer for task examples

use std::io::IsTerminal;

use anyhow::{Context, Result};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use gridbench_core::render::{ExampleCursor, ExampleView, GridRenderer, Palette};
use gridbench_core::{BenchConfig, Grid, Task, TaskId, TaskLoader};

use crate::console::CliConsole;

const ACTIONS: [&str; 5] = ["Next", "Prev", "Jump", "Toggle numbers", "Quit"];

/// Show the examples of one task
pub fn run(config: &BenchConfig, task: &str, example: Option<usize>, numbers: bool) -> Result<()> {
    let id = TaskId::parse(task, config.num_tasks)?;
    let task = TaskLoader::new(&config.data_dir)
        .load(id)
        .with_context(|| format!("Failed to load {}", id))?;

    match example {
        Some(index) => {
            let renderer = renderer(&config.palette, numbers);
            show_once(&task, None, index, &renderer)
        }
        None => browse(&task, None, &config.palette, numbers),
    }
}

/// Step through a task's examples, next to the produced grids if given
///
/// Falls back to printing the first example when stdout is not a terminal.
pub fn browse(
    task: &Task,
    results: Option<Vec<&Grid>>,
    palette: &Palette,
    numbers: bool,
) -> Result<()> {
    let mut renderer = renderer(palette, numbers);
    if !std::io::stdout().is_terminal() {
        return show_once(task, results, 0, &renderer);
    }

    if task.is_empty() {
        CliConsole::warn(&format!("{} has no examples", task.id));
        return Ok(());
    }

    let view = ExampleView::new(task).with_results(results);
    let mut cursor = ExampleCursor::new(task.len());
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    loop {
        term.clear_screen()?;
        if let Some(text) = view.render(cursor.index(), &renderer) {
            println!("{}", text);
        }
        println!("{}\n", renderer.legend());

        let choice = Select::with_theme(&theme)
            .items(&ACTIONS)
            .default(0)
            .interact_on_opt(&term)?;

        match choice {
            Some(0) => cursor.next(),
            Some(1) => cursor.prev(),
            Some(2) => {
                let index: usize = Input::with_theme(&theme)
                    .with_prompt(format!("Example (0-{})", cursor.len() - 1))
                    .interact_text_on(&term)?;
                cursor.jump(index);
            }
            Some(3) => renderer.toggle_numbers(),
            _ => break,
        }
    }

    Ok(())
}

fn renderer(palette: &Palette, numbers: bool) -> GridRenderer {
    GridRenderer::new(palette.clone())
        .with_numbers(numbers)
        .with_color(colored::control::SHOULD_COLORIZE.should_colorize())
}

fn show_once(
    task: &Task,
    results: Option<Vec<&Grid>>,
    index: usize,
    renderer: &GridRenderer,
) -> Result<()> {
    let view = ExampleView::new(task).with_results(results);
    match view.render(index, renderer) {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => anyhow::bail!(
            "{} has {} example(s); index {} is out of range",
            task.id,
            task.len(),
            index
        ),
    }
}
