//! Terminal rendering of grids
//!
//! Grids are drawn as blocks of truecolor background cells, two columns per
//! cell, with Input / Output / Result panels side by side.

mod palette;

pub use palette::{Palette, contrast_text};

use colored::Colorize;

use crate::grid::{Grid, MAX_CELL_VALUE};
use crate::tasks::Task;

const PANEL_GAP: &str = "    ";

/// Draws grids with a palette
#[derive(Debug, Clone)]
pub struct GridRenderer {
    palette: Palette,
    /// Overlay the cell value on each cell
    pub show_numbers: bool,
    /// Emit ANSI colors; when off, cells are drawn as digits
    pub color: bool,
}

impl GridRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            show_numbers: false,
            color: true,
        }
    }

    pub fn with_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn toggle_numbers(&mut self) {
        self.show_numbers = !self.show_numbers;
    }

    /// Terminals without `COLORTERM=truecolor` get the nearest basic ANSI color
    fn cell(&self, value: u8) -> String {
        if !self.color {
            return format!("{:>2}", value);
        }
        let (r, g, b) = self.palette.rgb(value);
        if self.show_numbers {
            let (fr, fg, fb) = contrast_text((r, g, b));
            format!("{:>2}", value)
                .truecolor(fr, fg, fb)
                .on_truecolor(r, g, b)
                .to_string()
        } else {
            "  ".on_truecolor(r, g, b).to_string()
        }
    }

    /// One string per grid row
    pub fn grid_lines(&self, grid: &Grid) -> Vec<String> {
        grid.to_rows()
            .iter()
            .map(|row| row.iter().map(|v| self.cell(*v)).collect())
            .collect()
    }

    /// Draw titled panels side by side, each labelled with its shape
    pub fn render_panels(&self, panels: &[(&str, &Grid)]) -> String {
        let widths: Vec<usize> = panels
            .iter()
            .map(|(title, grid)| {
                let label = shape_label(grid).len();
                (grid.width() * 2).max(title.len()).max(label)
            })
            .collect();
        let height = panels.iter().map(|(_, g)| g.height()).max().unwrap_or(0);

        let mut out = String::new();

        let titles: Vec<String> = panels
            .iter()
            .zip(&widths)
            .map(|((title, _), w)| format!("{:<w$}", title, w = *w))
            .collect();
        out.push_str(titles.join(PANEL_GAP).trim_end());
        out.push('\n');

        let bodies: Vec<Vec<String>> = panels.iter().map(|(_, g)| self.grid_lines(g)).collect();
        for row in 0..height {
            let line: Vec<String> = panels
                .iter()
                .zip(&bodies)
                .zip(&widths)
                .map(|(((_, grid), lines), w)| match lines.get(row) {
                    // ANSI codes have no width, so pad by the visible cell count
                    Some(line) => format!("{}{}", line, " ".repeat(w - grid.width() * 2)),
                    None => " ".repeat(*w),
                })
                .collect();
            out.push_str(line.join(PANEL_GAP).trim_end());
            out.push('\n');
        }

        let labels: Vec<String> = panels
            .iter()
            .zip(&widths)
            .map(|((_, grid), w)| format!("{:<w$}", shape_label(grid), w = *w))
            .collect();
        out.push_str(labels.join(PANEL_GAP).trim_end());
        out.push('\n');
        out
    }

    /// Swatches for every cell value
    pub fn legend(&self) -> String {
        (0..=MAX_CELL_VALUE)
            .map(|v| {
                if self.color {
                    let (r, g, b) = self.palette.rgb(v);
                    format!("{} {}", "  ".on_truecolor(r, g, b), v)
                } else {
                    format!("{}={}", v, self.palette.hex(v))
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn shape_label(grid: &Grid) -> String {
    format!("{:?}", grid.dims())
}

/// A task together with optional solution outputs to show beside it
pub struct ExampleView<'a> {
    pub task: &'a Task,
    /// Produced grids in example order
    pub results: Option<Vec<&'a Grid>>,
}

impl<'a> ExampleView<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self {
            task,
            results: None,
        }
    }

    pub fn with_results(mut self, results: Option<Vec<&'a Grid>>) -> Self {
        self.results = results;
        self
    }

    /// Render the example at `index` with its header line
    pub fn render(&self, index: usize, renderer: &GridRenderer) -> Option<String> {
        let example = self.task.examples.get(index)?;
        let cursor = ExampleCursor::new(self.task.len()).at(index);

        let mut panels: Vec<(&str, &Grid)> =
            vec![("Input", &example.input), ("Output", &example.output)];
        if let Some(grid) = self.results.as_ref().and_then(|r| r.get(index)) {
            panels.push(("Result", grid));
        }

        Some(format!(
            "{} [{}] {}\n\n{}",
            self.task.id,
            example.role,
            cursor.title(),
            renderer.render_panels(&panels)
        ))
    }
}

/// Position within a task's examples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleCursor {
    index: usize,
    len: usize,
}

impl ExampleCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Move to `index`, clamped to the last example
    pub fn at(mut self, index: usize) -> Self {
        self.jump(index);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.last());
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn jump(&mut self, index: usize) {
        self.index = index.min(self.last());
    }

    /// Header such as `Example 2 / 5`
    pub fn title(&self) -> String {
        format!("Example {} / {}", self.index, self.last())
    }
}
