//! Letter grid bookkeeping.
//!
//! The grid is the single source of truth for conflict detection: once a
//! cell holds a letter, every placement through that cell has to supply the
//! same letter.

use crate::{Direction, PlacedWord, Position};
use serde::{Deserialize, Serialize};

/// Default side length of the square grid
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Largest grid the engine accepts
pub const MAX_GRID_SIZE: usize = 64;

/// A single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    /// A horizontal word runs through this cell
    pub across: bool,
    /// A vertical word runs through this cell
    pub down: bool,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Whether a word running in `direction` already covers this cell
    pub fn runs(&self, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.across,
            Direction::Vertical => self.down,
        }
    }
}

/// Square letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Build a grid from already placed words; later words overwrite earlier
    /// letters, so callers that care about conflicts check first.
    pub fn from_words<'a>(size: usize, words: impl IntoIterator<Item = &'a PlacedWord>) -> Self {
        let mut grid = Self::new(size);
        for word in words {
            grid.place(word);
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Cell at a signed coordinate, `None` when off the grid
    pub fn cell_at(&self, row: isize, col: isize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cell_at(pos.row as isize, pos.col as isize)
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if pos.row < self.size && pos.col < self.size {
            Some(&mut self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Letter at a signed coordinate; off-grid reads as empty
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        self.cell_at(row, col).and_then(|c| c.letter)
    }

    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos.row as isize, pos.col as isize)
    }

    /// Commit a word's letters. Cells off the grid are ignored.
    pub fn place(&mut self, word: &PlacedWord) {
        for (pos, letter) in word.cells() {
            if pos.row >= self.size || pos.col >= self.size {
                continue;
            }
            let cell = &mut self.cells[pos.row * self.size + pos.col];
            cell.letter = Some(letter);
            match word.direction {
                Direction::Horizontal => cell.across = true,
                Direction::Vertical => cell.down = true,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Row-major letter matrix for renderers
    pub fn to_rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.letter).collect())
            .collect()
    }

    /// Smallest `(top, left, bottom, right)` box holding every letter
    pub fn bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col].is_empty() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (row, col, row, col),
                    Some((t, l, b, r)) => (t.min(row), l.min(col), b.max(row), r.max(col)),
                });
            }
        }
        bounds
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map(|l| l.to_string()).unwrap_or_else(|| ".".to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
