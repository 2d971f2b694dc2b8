//! Grid comparison
//!
//! A produced grid passes only when its dimensions and every cell match the
//! expected grid exactly. There is no partial credit.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Outcome of comparing a produced grid against the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Comparison {
    /// Same shape, same cells
    Match,
    /// Shapes differ; cells were not inspected
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Same shape, at least one differing cell
    CellMismatch {
        /// Number of differing cells
        mismatched: usize,
        /// First differing `(row, col)` in row-major order
        first: (usize, usize),
    },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            Comparison::Match => "match".to_string(),
            Comparison::DimensionMismatch { expected, actual } => format!(
                "expected shape {:?}, got {:?}",
                expected, actual
            ),
            Comparison::CellMismatch { mismatched, first } => format!(
                "{} cell(s) differ, first at {:?}",
                mismatched, first
            ),
        }
    }
}

/// Compare `produced` against `expected`
pub fn compare(produced: &Grid, expected: &Grid) -> Comparison {
    if produced.dims() != expected.dims() {
        return Comparison::DimensionMismatch {
            expected: expected.dims(),
            actual: produced.dims(),
        };
    }

    let mut mismatched = 0;
    let mut first = None;
    for ((pos, a), (_, b)) in produced.cells().zip(expected.cells()) {
        if a != b {
            mismatched += 1;
            first.get_or_insert(pos);
        }
    }

    match first {
        None => Comparison::Match,
        Some(first) => Comparison::CellMismatch { mismatched, first },
    }
}

/// Boolean form of [`compare`]
pub fn grids_equal(produced: &Grid, expected: &Grid) -> bool {
    compare(produced, expected).is_match()
}
