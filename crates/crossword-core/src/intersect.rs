//! Letter-intersection finder.

use crate::{Intersection, PlacedWord, Placement, Position};
use std::collections::{HashMap, HashSet};

/// A shared letter between a candidate word and a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMatch {
    pub placed_index: usize,
    /// Offset of the letter inside the candidate word
    pub word_offset: usize,
    /// Offset of the letter inside the placed word
    pub placed_offset: usize,
}

/// Every pair of equal letters between `word` and the placed words
pub fn letter_intersections(word: &[char], placed: &[PlacedWord]) -> Vec<LetterMatch> {
    let mut matches = Vec::new();
    for (placed_index, other) in placed.iter().enumerate() {
        for (word_offset, &letter) in word.iter().enumerate() {
            for (placed_offset, &other_letter) in other.letters().iter().enumerate() {
                if letter == other_letter {
                    matches.push(LetterMatch {
                        placed_index,
                        word_offset,
                        placed_offset,
                    });
                }
            }
        }
    }
    matches
}

/// Placements that make `word` cross a placed word on a shared letter.
///
/// The new word runs perpendicular to the word it crosses. Candidates that
/// would start off the grid or run past its edge are dropped; duplicates are
/// removed while keeping first-seen order.
pub fn candidate_placements(word: &[char], placed: &[PlacedWord], grid_size: usize) -> Vec<Placement> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    if word.is_empty() {
        return candidates;
    }

    for m in letter_intersections(word, placed) {
        let other = &placed[m.placed_index];
        let crossing = other.placement().cell(m.placed_offset);
        let direction = other.direction.perpendicular();
        let (dr, dc) = direction.step();

        let (Some(row), Some(col)) = (
            crossing.row.checked_sub(dr * m.word_offset),
            crossing.col.checked_sub(dc * m.word_offset),
        ) else {
            continue;
        };

        let end_row = row + dr * (word.len() - 1);
        let end_col = col + dc * (word.len() - 1);
        if end_row >= grid_size || end_col >= grid_size {
            continue;
        }

        let placement = Placement::new(row, col, direction);
        if seen.insert(placement) {
            candidates.push(placement);
        }
    }

    candidates
}

/// All crossings of a finished set of words.
///
/// Cells shared with different letters are not intersections and are
/// skipped here; `verify_layout` reports them.
pub fn find_intersections(placed: &[PlacedWord]) -> Vec<Intersection> {
    let mut by_cell: HashMap<Position, Vec<(usize, char)>> = HashMap::new();
    for (index, word) in placed.iter().enumerate() {
        for (pos, letter) in word.cells() {
            by_cell.entry(pos).or_default().push((index, letter));
        }
    }

    let mut intersections = Vec::new();
    for (pos, occupants) in by_cell {
        for (i, &(a, letter_a)) in occupants.iter().enumerate() {
            for &(b, letter_b) in &occupants[i + 1..] {
                if letter_a == letter_b {
                    intersections.push(Intersection {
                        row: pos.row,
                        col: pos.col,
                        letter: letter_a,
                        word1_index: a.min(b),
                        word2_index: a.max(b),
                    });
                }
            }
        }
    }
    intersections.sort_by_key(|x| (x.word1_index, x.word2_index, x.row, x.col));
    intersections
}

/// Number of letter pairs two answers have in common
pub fn potential_intersections(a: &[char], b: &[char]) -> usize {
    a.iter()
        .map(|x| b.iter().filter(|y| *y == x).count())
        .sum()
}
