//! Clue numbering.

use crate::{Direction, LayoutError, PlacedWord, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// How clue numbers are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberingMode {
    /// 1-based order in which words were committed to the grid
    PlacementOrder,
    /// Conventional crossword numbering: start cells numbered top to bottom,
    /// left to right; an across and a down word starting on the same cell
    /// share a number
    ReadingOrder,
}

impl Default for NumberingMode {
    fn default() -> Self {
        Self::PlacementOrder
    }
}

impl FromStr for NumberingMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placement" | "placement-order" => Ok(NumberingMode::PlacementOrder),
            "reading" | "reading-order" => Ok(NumberingMode::ReadingOrder),
            _ => Err(LayoutError::UnknownNumbering(s.to_string())),
        }
    }
}

/// Number each placed word. Returns `(index into placed, number)` pairs in
/// output order.
pub fn assign_numbers(placed: &[PlacedWord], mode: NumberingMode) -> Vec<(usize, usize)> {
    match mode {
        NumberingMode::PlacementOrder => (0..placed.len()).map(|i| (i, i + 1)).collect(),
        NumberingMode::ReadingOrder => {
            let mut starts: BTreeMap<Position, usize> = BTreeMap::new();
            for word in placed {
                starts.insert(Position::new(word.row, word.col), 0);
            }
            for (n, number) in starts.values_mut().enumerate() {
                *number = n + 1;
            }

            let mut numbered: Vec<(usize, usize)> = placed
                .iter()
                .enumerate()
                .map(|(i, w)| (i, starts[&Position::new(w.row, w.col)]))
                .collect();
            numbered.sort_by_key(|&(i, number)| {
                let across_first = match placed[i].direction {
                    Direction::Horizontal => 0,
                    Direction::Vertical => 1,
                };
                (number, across_first, i)
            });
            numbered
        }
    }
}
