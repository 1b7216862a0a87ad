//! Placement validation.
//!
//! The same check backs the primary search, the backup scan and the
//! alternate strategy, and `verify_layout` re-runs it over a finished layout.

use crate::{Cell, Direction, Grid, PlacedWord, Placement, Position, MAX_GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Whether `word` can be written at `placement` on `grid`.
pub fn can_place(word: &[char], placement: Placement, grid: &Grid, require_intersection: bool) -> bool {
    placement_crossings(word, placement, grid, require_intersection).is_some()
}

/// Number of letters a valid placement shares with the grid, or `None` if
/// the placement is invalid.
///
/// A placement is valid when:
/// - the whole run is on the grid;
/// - the cells just before the first letter and just after the last one are
///   empty, so the word does not merge with a neighbour;
/// - every filled cell already holds the same letter and is only covered by
///   a word running the other way;
/// - every empty cell it fills has no letters on either side across the
///   axis, so no stray perpendicular fragment appears;
/// - with `require_intersection`, at least one cell is shared.
pub fn placement_crossings(
    word: &[char],
    placement: Placement,
    grid: &Grid,
    require_intersection: bool,
) -> Option<usize> {
    if word.is_empty() {
        return None;
    }

    let len = word.len() as isize;
    let (dr, dc) = placement.direction.step();
    let (dr, dc) = (dr as isize, dc as isize);
    let (row, col) = (placement.row as isize, placement.col as isize);

    if !grid.in_bounds(row, col) || !grid.in_bounds(row + dr * (len - 1), col + dc * (len - 1)) {
        return None;
    }

    if grid.get(row - dr, col - dc).is_some() || grid.get(row + dr * len, col + dc * len).is_some() {
        return None;
    }

    let mut crossings = 0;
    for (i, &letter) in word.iter().enumerate() {
        let (r, c) = (row + dr * i as isize, col + dc * i as isize);
        let cell = grid.cell_at(r, c)?;
        match cell.letter {
            Some(existing) => {
                if existing != letter || cell.runs(placement.direction) {
                    return None;
                }
                crossings += 1;
            }
            None => {
                // across the axis: (dc, dr)
                if grid.get(r - dc, c - dr).is_some() || grid.get(r + dc, c + dr).is_some() {
                    return None;
                }
            }
        }
    }

    if require_intersection && crossings == 0 {
        return None;
    }
    Some(crossings)
}

/// A defect found when re-checking a finished layout
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutViolation {
    #[error("grid size {grid_size} is outside 1..={max}", max = MAX_GRID_SIZE)]
    InvalidGridSize { grid_size: usize },

    #[error("word {word_id} runs off the {grid_size}x{grid_size} grid")]
    OutOfBounds { word_id: String, grid_size: usize },

    #[error("cell ({row}, {col}) holds both {first} and {second}")]
    LetterConflict {
        row: usize,
        col: usize,
        first: char,
        second: char,
    },

    #[error("word {word_id} overlaps another {direction} word at ({row}, {col})")]
    ParallelOverlap {
        word_id: String,
        row: usize,
        col: usize,
        direction: Direction,
    },

    #[error("word {word_id} touches a letter directly before or after it")]
    Concatenation { word_id: String },

    #[error("word {word_id} forms a stray run with a neighbouring letter")]
    StrayAdjacency { word_id: String },
}

/// Re-check every word of a finished layout against the grid built from the
/// other words. An empty result means every placement would be accepted
/// again as-is.
///
/// Connectivity is a separate property; see [`crate::is_connected`].
pub fn verify_layout(placed: &[PlacedWord], grid_size: usize) -> Vec<LayoutViolation> {
    if grid_size == 0 || grid_size > MAX_GRID_SIZE {
        return vec![LayoutViolation::InvalidGridSize { grid_size }];
    }

    let violations: Vec<LayoutViolation> = placed
        .iter()
        .filter(|word| !fits(word, grid_size))
        .map(|word| LayoutViolation::OutOfBounds {
            word_id: word.word_id.clone(),
            grid_size,
        })
        .collect();
    if !violations.is_empty() {
        return violations;
    }

    let mut violations = Vec::new();
    let mut owners: HashMap<Position, (char, Direction)> = HashMap::new();
    for word in placed {
        for (pos, letter) in word.cells() {
            match owners.get(&pos) {
                None => {
                    owners.insert(pos, (letter, word.direction));
                }
                Some(&(first, _)) if first != letter => {
                    violations.push(LayoutViolation::LetterConflict {
                        row: pos.row,
                        col: pos.col,
                        first,
                        second: letter,
                    });
                }
                Some(&(_, direction)) if direction == word.direction => {
                    violations.push(LayoutViolation::ParallelOverlap {
                        word_id: word.word_id.clone(),
                        row: pos.row,
                        col: pos.col,
                        direction,
                    });
                }
                Some(_) => {}
            }
        }
    }
    if !violations.is_empty() {
        return violations;
    }

    // One shared grid; each word is lifted off, checked against the rest and
    // put back.
    let mut grid = Grid::from_words(grid_size, placed);
    for word in placed {
        let saved = lift(&mut grid, word);

        let (dr, dc) = word.direction.step();
        let (row, col) = (word.row as isize, word.col as isize);
        let len = word.len() as isize;
        let before = grid.get(row - dr as isize, col - dc as isize);
        let after = grid.get(row + dr as isize * len, col + dc as isize * len);
        if before.is_some() || after.is_some() {
            violations.push(LayoutViolation::Concatenation {
                word_id: word.word_id.clone(),
            });
        } else if !can_place(word.letters(), word.placement(), &grid, false) {
            violations.push(LayoutViolation::StrayAdjacency {
                word_id: word.word_id.clone(),
            });
        }

        for ((pos, _), cell) in word.cells().zip(saved) {
            if let Some(slot) = grid.cell_mut(pos) {
                *slot = cell;
            }
        }
    }

    violations
}

/// Whole run on the grid, without overflowing on absurd coordinates
fn fits(word: &PlacedWord, grid_size: usize) -> bool {
    if word.is_empty() || word.row >= grid_size || word.col >= grid_size {
        return false;
    }
    match word.direction {
        Direction::Horizontal => word.len() <= grid_size - word.col,
        Direction::Vertical => word.len() <= grid_size - word.row,
    }
}

/// Remove `word` from the grid, keeping letters a crossing word still
/// covers. Returns the original cells for restoring. Assumes no two words
/// overlap in the same direction.
fn lift(grid: &mut Grid, word: &PlacedWord) -> Vec<Cell> {
    let perpendicular = word.direction.perpendicular();
    let mut saved = Vec::with_capacity(word.len());
    for (pos, _) in word.cells() {
        let Some(cell) = grid.cell_mut(pos) else {
            continue;
        };
        saved.push(*cell);
        match word.direction {
            Direction::Horizontal => cell.across = false,
            Direction::Vertical => cell.down = false,
        }
        if !cell.runs(perpendicular) {
            cell.letter = None;
        }
    }
    saved
}
