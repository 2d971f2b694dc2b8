//! Rectangular grids of colored cells
//!
//! A [`Grid`] is the unit every task is made of: solutions receive one and
//! return one, and the comparator checks two of them against each other.
//! Construction always validates, so a ragged grid or a cell value above
//! [`MAX_CELL_VALUE`] cannot exist.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Largest value a cell may hold (ten colors, `0..=9`)
pub const MAX_CELL_VALUE: u8 = 9;

/// A rectangular 2D array of small integers stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from rows, rejecting ragged rows and out-of-range values
    pub fn new(rows: Vec<Vec<u8>>) -> BenchResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(height * width);

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(BenchError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            if let Some((c, value)) = row.iter().enumerate().find(|(_, v)| **v > MAX_CELL_VALUE) {
                return Err(BenchError::InvalidGrid(format!(
                    "cell ({}, {}) has value {}, expected 0..={}",
                    r, c, value, MAX_CELL_VALUE
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// A grid of the given shape with every cell set to `value`
    pub fn filled(height: usize, width: usize, value: u8) -> BenchResult<Self> {
        if value > MAX_CELL_VALUE {
            return Err(BenchError::InvalidGrid(format!(
                "fill value {} exceeds {}",
                value, MAX_CELL_VALUE
            )));
        }
        Ok(Self {
            height,
            width,
            cells: vec![value; height * width],
        })
    }

    /// An all-zero grid with the same shape as `other`
    pub fn zeros_like(other: &Grid) -> Self {
        Self {
            height: other.height,
            width: other.width,
            cells: vec![0; other.cells.len()],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Shape as `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> BenchResult<()> {
        if value > MAX_CELL_VALUE {
            return Err(BenchError::InvalidGrid(format!(
                "value {} exceeds {}",
                value, MAX_CELL_VALUE
            )));
        }
        if row >= self.height || col >= self.width {
            return Err(BenchError::InvalidGrid(format!(
                "position ({}, {}) outside {}x{} grid",
                row, col, self.height, self.width
            )));
        }
        self.cells[row * self.width + col] = value;
        Ok(())
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() panics on a zero size, and a 0-wide grid has no cells anyway
        self.cells
            .chunks(self.width.max(1))
            .take(if self.width == 0 { 0 } else { self.height })
    }

    /// Iterate over `((row, col), value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / width, i % width), *v))
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = BenchError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::new(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
