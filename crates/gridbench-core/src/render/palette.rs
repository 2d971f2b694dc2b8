//! Cell color table

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::grid::MAX_CELL_VALUE;

const DEFAULT_COLORS: [&str; 10] = [
    "#000000", // black
    "#1e93ff", // blue
    "#fa3e31", // red
    "#4fcc30", // green
    "#ffdd00", // yellow
    "#999999", // grey
    "#e53ba3", // pink
    "#ff861c", // orange
    "#88d8f1", // light blue
    "#931131", // maroon
];

/// Maps each cell value to a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.iter().map(|c| c.to_string()).collect())
    }
}

impl Palette {
    /// Check there is one valid color per cell value
    pub fn validate(&self) -> BenchResult<()> {
        let expected = usize::from(MAX_CELL_VALUE) + 1;
        if self.0.len() != expected {
            return Err(BenchError::config(format!(
                "palette has {} colors, expected {}",
                self.0.len(),
                expected
            )));
        }
        for (value, hex) in self.0.iter().enumerate() {
            parse_hex(hex).ok_or_else(|| {
                BenchError::config(format!(
                    "palette color {:?} for value {} is not #rrggbb",
                    hex, value
                ))
            })?;
        }
        Ok(())
    }

    /// Hex string for a cell value
    pub fn hex(&self, value: u8) -> &str {
        self.0
            .get(usize::from(value))
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLORS[0])
    }

    /// RGB triple for a cell value; black if the entry is unusable
    pub fn rgb(&self, value: u8) -> (u8, u8, u8) {
        parse_hex(self.hex(value)).unwrap_or((0, 0, 0))
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Foreground that stays readable on the given background
pub fn contrast_text(rgb: (u8, u8, u8)) -> (u8, u8, u8) {
    let (r, g, b) = rgb;
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma > 128_000 { (0, 0, 0) } else { (255, 255, 255) }
}
