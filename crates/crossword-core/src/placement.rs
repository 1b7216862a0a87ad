//! Placement search.
//!
//! One search routine drives both passes; only the base-word strategy
//! differs. All state lives in a [`PlacementSession`] created per run.

use crate::intersect::{candidate_placements, potential_intersections};
use crate::validator::{can_place, placement_crossings};
use crate::{Diagnostic, Direction, Grid, PlacedWord, Placement, WordRecord};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How the anchor word is chosen and the rest are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseWordStrategy {
    /// Longest word anchors; the rest follow in length order
    Longest,
    /// The word sharing the most letters with all others anchors; each round
    /// then places whichever word crosses the most existing letters
    MaxIntersections,
}

impl std::fmt::Display for BaseWordStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseWordStrategy::Longest => write!(f, "longest-first"),
            BaseWordStrategy::MaxIntersections => write!(f, "max-intersections"),
        }
    }
}

/// A normalized input word
#[derive(Debug, Clone)]
pub(crate) struct WordEntry {
    /// Position in the (possibly shuffled) input, used for tie-breaks
    pub order: usize,
    pub word: String,
    pub letters: Vec<char>,
    pub record: WordRecord,
}

impl WordEntry {
    pub fn new(order: usize, word: String, record: WordRecord) -> Self {
        Self {
            order,
            letters: word.chars().collect(),
            word,
            record,
        }
    }
}

/// Scratch state of one placement pass
pub(crate) struct PlacementSession {
    grid: Grid,
    placed: Vec<PlacedWord>,
    diagnostics: Vec<Diagnostic>,
    strategy: BaseWordStrategy,
}

impl PlacementSession {
    pub fn new(grid_size: usize, strategy: BaseWordStrategy) -> Self {
        Self {
            grid: Grid::new(grid_size),
            placed: Vec::new(),
            diagnostics: Vec::new(),
            strategy,
        }
    }

    pub fn strategy(&self) -> BaseWordStrategy {
        self.strategy
    }

    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    pub fn into_parts(self) -> (Vec<PlacedWord>, Vec<Diagnostic>) {
        (self.placed, self.diagnostics)
    }

    /// Place every entry according to the session's strategy
    pub fn run(mut self, entries: &[WordEntry]) -> Self {
        match self.strategy {
            BaseWordStrategy::Longest => {
                let mut ordered: Vec<&WordEntry> = entries.iter().collect();
                ordered.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));
                for entry in ordered {
                    self.place_entry(entry);
                }
            }
            BaseWordStrategy::MaxIntersections => self.run_greedy(entries),
        }
        self
    }

    fn run_greedy(&mut self, entries: &[WordEntry]) {
        let mut remaining: Vec<&WordEntry> = entries.iter().collect();

        while self.placed.is_empty() && !remaining.is_empty() {
            let anchor = select_max_intersection_anchor(&remaining);
            let entry = remaining.remove(anchor);
            self.place_entry(entry);
        }

        while !remaining.is_empty() {
            let mut best: Option<(usize, Placement, usize)> = None;
            for (i, entry) in remaining.iter().enumerate() {
                let Some((placement, crossings)) = self.best_intersection_placement(&entry.letters) else {
                    continue;
                };
                let better = match best {
                    None => true,
                    Some((j, _, best_crossings)) => {
                        let incumbent = remaining[j];
                        (crossings, entry.letters.len(), std::cmp::Reverse(entry.order))
                            > (best_crossings, incumbent.letters.len(), std::cmp::Reverse(incumbent.order))
                    }
                };
                if better {
                    best = Some((i, placement, crossings));
                }
            }

            if let Some((i, placement, _)) = best {
                let entry = remaining.remove(i);
                self.commit(entry, placement);
                continue;
            }

            let backup = remaining
                .iter()
                .enumerate()
                .find_map(|(i, entry)| self.backup_placement(&entry.letters).map(|p| (i, p)));
            match backup {
                Some((i, placement)) => {
                    let entry = remaining.remove(i);
                    self.commit(entry, placement);
                }
                None => {
                    for entry in remaining.drain(..) {
                        self.reject(entry);
                    }
                }
            }
        }
    }

    /// Anchor on an empty grid, otherwise best crossing, otherwise the
    /// backup scan
    fn place_entry(&mut self, entry: &WordEntry) {
        let placement = if self.placed.is_empty() {
            self.anchor_placement(&entry.letters)
        } else {
            self.best_intersection_placement(&entry.letters)
                .map(|(placement, _)| placement)
                .or_else(|| {
                    debug!("no crossing fits {}, scanning the grid", entry.word);
                    self.backup_placement(&entry.letters)
                })
        };

        match placement {
            Some(placement) => self.commit(entry, placement),
            None => self.reject(entry),
        }
    }

    /// Horizontal and centred
    fn anchor_placement(&self, letters: &[char]) -> Option<Placement> {
        let size = self.grid.size();
        if letters.is_empty() || letters.len() > size {
            return None;
        }
        let placement = Placement::new(size / 2, (size - letters.len()) / 2, Direction::Horizontal);
        can_place(letters, placement, &self.grid, false).then_some(placement)
    }

    /// Valid crossing placement sharing the most letters with the grid.
    /// Ties go to the placement closest to the centre, then to the first one
    /// enumerated.
    pub fn best_intersection_placement(&self, letters: &[char]) -> Option<(Placement, usize)> {
        let mut best: Option<(Placement, usize, usize)> = None;
        for placement in candidate_placements(letters, &self.placed, self.grid.size()) {
            let Some(crossings) = placement_crossings(letters, placement, &self.grid, true) else {
                continue;
            };
            let distance = self.centre_distance(placement, letters.len());
            let better = match best {
                None => true,
                Some((_, best_crossings, best_distance)) => {
                    crossings > best_crossings || (crossings == best_crossings && distance < best_distance)
                }
            };
            if better {
                best = Some((placement, crossings, distance));
            }
        }
        best.map(|(placement, crossings, _)| (placement, crossings))
    }

    /// Brute-force scan: every cell, horizontal before vertical, first valid
    /// placement that crosses an existing letter (any placement on an empty
    /// grid).
    pub fn backup_placement(&self, letters: &[char]) -> Option<Placement> {
        let require_intersection = !self.placed.is_empty();
        let size = self.grid.size();
        for row in 0..size {
            for col in 0..size {
                for direction in [Direction::Horizontal, Direction::Vertical] {
                    let placement = Placement::new(row, col, direction);
                    if can_place(letters, placement, &self.grid, require_intersection) {
                        return Some(placement);
                    }
                }
            }
        }
        None
    }

    /// Doubled Manhattan distance from the word's midpoint to the grid centre
    fn centre_distance(&self, placement: Placement, len: usize) -> usize {
        let (dr, dc) = placement.direction.step();
        let centre = self.grid.size() - 1;
        let mid_row = 2 * placement.row + dr * (len - 1);
        let mid_col = 2 * placement.col + dc * (len - 1);
        mid_row.abs_diff(centre) + mid_col.abs_diff(centre)
    }

    fn commit(&mut self, entry: &WordEntry, placement: Placement) {
        debug!(
            "[{}] placed {} at ({}, {}) {:?}",
            self.strategy, entry.word, placement.row, placement.col, placement.direction
        );
        let word = PlacedWord::new(&entry.word, placement, entry.record.clone());
        self.grid.place(&word);
        self.placed.push(word);
    }

    fn reject(&mut self, entry: &WordEntry) {
        warn!("[{}] could not place {} ({})", self.strategy, entry.word, entry.record.id);
        self.diagnostics.push(Diagnostic::Unplaceable {
            word_id: entry.record.id.clone(),
            word: entry.word.clone(),
            strategy: self.strategy,
        });
    }
}

/// Index of the word with the greatest summed letter overlap with the
/// others. Ties go to the longer word, then to the earlier one.
fn select_max_intersection_anchor(entries: &[&WordEntry]) -> usize {
    let mut best = 0;
    let mut best_key = None;
    for (i, entry) in entries.iter().enumerate() {
        let total: usize = entries
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| potential_intersections(&entry.letters, &other.letters))
            .sum();
        let key = (total, entry.letters.len(), std::cmp::Reverse(entry.order));
        if best_key.map_or(true, |k| key > k) {
            best = i;
            best_key = Some(key);
        }
    }
    best
}
