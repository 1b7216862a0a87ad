//! Layout orchestrator.

use crate::placement::{PlacementSession, WordEntry};
use crate::rng::SimpleRng;
use crate::{
    assign_numbers, components, is_connected, largest_component_size, normalize_answer, verify_layout,
    BaseWordStrategy, Direction, Grid, LayoutConfig, LayoutError, LayoutViolation, NumberingMode, PlacedClue,
    PlacedWord, WordRecord,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Recoverable outcomes of a run. None of these abort the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// The answer has no letters left after normalization
    #[serde(rename_all = "camelCase")]
    InvalidAnswer { word_id: String, answer: String },
    /// No valid placement was found for the word
    #[serde(rename_all = "camelCase")]
    Unplaceable {
        word_id: String,
        word: String,
        strategy: BaseWordStrategy,
    },
    /// The placed words split into more than one group
    #[serde(rename_all = "camelCase")]
    Disconnected { components: usize },
    /// The first pass was incomplete and the alternate strategy ran
    #[serde(rename_all = "camelCase")]
    Retried {
        primary_placed: usize,
        alternate_placed: usize,
        kept: BaseWordStrategy,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidAnswer { word_id, answer } => {
                write!(f, "{}: answer {:?} has no letters", word_id, answer)
            }
            Diagnostic::Unplaceable { word_id, word, strategy } => {
                write!(f, "{}: could not place {} ({})", word_id, word, strategy)
            }
            Diagnostic::Disconnected { components } => {
                write!(f, "placed words form {} separate groups", components)
            }
            Diagnostic::Retried {
                primary_placed,
                alternate_placed,
                kept,
            } => write!(
                f,
                "retried: longest-first placed {}, max-intersections placed {}, kept {}",
                primary_placed, alternate_placed, kept
            ),
        }
    }
}

/// Result of [`LayoutEngine::place_all`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub grid_size: usize,
    /// Strategy that produced the kept placements; `None` for empty input
    pub strategy: Option<BaseWordStrategy>,
    pub numbering: NumberingMode,
    /// Placed words form a single group
    pub connected: bool,
    /// Every input record was placed
    pub complete: bool,
    pub clues: Vec<PlacedClue>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Layout {
    fn empty(config: &LayoutConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            strategy: None,
            numbering: config.numbering,
            connected: true,
            complete: true,
            clues: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Complete and connected: the crossword the caller asked for
    pub fn is_fully_connected(&self) -> bool {
        self.complete && self.connected
    }

    /// Placed words in clue order
    pub fn words(&self) -> Vec<PlacedWord> {
        self.clues.iter().map(PlacedClue::to_placed_word).collect()
    }

    pub fn grid(&self) -> Grid {
        Grid::from_words(self.grid_size, &self.words())
    }

    pub fn across(&self) -> impl Iterator<Item = &PlacedClue> {
        self.clues
            .iter()
            .filter(|c| c.position.direction == Direction::Horizontal)
    }

    pub fn down(&self) -> impl Iterator<Item = &PlacedClue> {
        self.clues
            .iter()
            .filter(|c| c.position.direction == Direction::Vertical)
    }

    /// Ids of records that did not make it onto the grid
    pub fn unplaced_ids(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::InvalidAnswer { word_id, .. } | Diagnostic::Unplaceable { word_id, .. } => {
                    Some(word_id.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Re-check the geometry of every clue
    pub fn verify(&self) -> Vec<LayoutViolation> {
        verify_layout(&self.words(), self.grid_size)
    }
}

/// Places word records on a square grid.
///
/// The engine holds only configuration; every call to
/// [`place_all`](Self::place_all) works on fresh scratch state.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place as many records as possible.
    ///
    /// Never fails for a hard word set: unplaced words show up in
    /// `diagnostics` and `complete` is false.
    pub fn place_all(&self, words: &[WordRecord]) -> Layout {
        if words.is_empty() {
            return Layout::empty(&self.config);
        }

        let (entries, mut diagnostics) = self.prepare(words);
        let size = self.config.grid_size;

        let primary = PlacementSession::new(size, BaseWordStrategy::Longest).run(&entries);
        let primary_ok = primary.placed().len() == entries.len() && is_connected(primary.placed());

        let chosen = if primary_ok || !self.config.retry_with_alternate {
            primary
        } else {
            info!(
                "longest-first placed {}/{} words, retrying with max-intersection anchor",
                primary.placed().len(),
                entries.len()
            );
            let alternate = PlacementSession::new(size, BaseWordStrategy::MaxIntersections).run(&entries);
            let primary_placed = primary.placed().len();
            let alternate_placed = alternate.placed().len();

            let kept = if score(alternate.placed()) > score(primary.placed()) {
                alternate
            } else {
                primary
            };
            diagnostics.push(Diagnostic::Retried {
                primary_placed,
                alternate_placed,
                kept: kept.strategy(),
            });
            kept
        };

        let strategy = chosen.strategy();
        let (placed, session_diagnostics) = chosen.into_parts();
        diagnostics.extend(session_diagnostics);

        let connected = is_connected(&placed);
        if !connected {
            diagnostics.push(Diagnostic::Disconnected {
                components: components(&placed).len(),
            });
        }

        let clues: Vec<PlacedClue> = assign_numbers(&placed, self.config.numbering)
            .into_iter()
            .map(|(index, number)| {
                let word = &placed[index];
                PlacedClue {
                    record: word.source.clone(),
                    word: word.word.clone(),
                    position: word.placement(),
                    number,
                }
            })
            .collect();

        info!(
            "placed {}/{} words with {} strategy (connected: {})",
            clues.len(),
            words.len(),
            strategy,
            connected
        );

        Layout {
            grid_size: size,
            strategy: Some(strategy),
            numbering: self.config.numbering,
            connected,
            complete: clues.len() == words.len(),
            clues,
            diagnostics,
        }
    }

    /// Normalize answers, drop the empty ones and apply the shuffle seed
    fn prepare(&self, words: &[WordRecord]) -> (Vec<WordEntry>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let mut records: Vec<&WordRecord> = words.iter().collect();

        if let Some(seed) = self.config.shuffle_seed {
            debug!("shuffling input with seed {}", seed);
            SimpleRng::with_seed(seed).shuffle(&mut records);
        }

        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let word = normalize_answer(&record.answer);
            if word.is_empty() {
                diagnostics.push(Diagnostic::InvalidAnswer {
                    word_id: record.id.clone(),
                    answer: record.answer.clone(),
                });
                continue;
            }
            entries.push(WordEntry::new(entries.len(), word, record.clone()));
        }

        (entries, diagnostics)
    }
}

/// Words in the largest group first, then total words placed
fn score(placed: &[PlacedWord]) -> (usize, usize) {
    (largest_component_size(placed), placed.len())
}

/// Lay out `words` on the default 15x15 grid
pub fn place_all(words: &[WordRecord]) -> Layout {
    LayoutEngine::default().place_all(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Placement;

    fn records(answers: &[&str]) -> Vec<WordRecord> {
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| WordRecord::new(format!("q{}", i + 1), *a, format!("clue {}", i + 1)))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let layout = place_all(&[]);
        assert!(layout.is_empty());
        assert!(layout.is_fully_connected());
        assert!(layout.diagnostics.is_empty());
        assert_eq!(layout.strategy, None);
    }

    #[test]
    fn test_invalid_grid_size() {
        assert!(LayoutEngine::new(LayoutConfig::default().with_grid_size(0)).is_err());
    }

    #[test]
    fn test_answers_are_normalized() {
        let layout = place_all(&records(&["Año nuevo", "sol"]));
        assert_eq!(layout.clues[0].word, "AÑONUEVO");
        assert_eq!(layout.clues[0].record.answer, "Año nuevo");
    }

    #[test]
    fn test_invalid_answer_is_reported() {
        let layout = place_all(&records(&["SOL", "123 !"]));
        assert_eq!(layout.clues.len(), 1);
        assert!(!layout.is_complete());
        assert_eq!(layout.unplaced_ids(), vec!["q2"]);
        assert!(matches!(layout.diagnostics[0], Diagnostic::InvalidAnswer { .. }));
    }

    #[test]
    fn test_placement_order_numbering() {
        let layout = place_all(&records(&["SOL", "LUNA", "TIERRA"]));
        let numbers: Vec<(String, usize)> = layout.clues.iter().map(|c| (c.word.clone(), c.number)).collect();
        assert_eq!(
            numbers,
            vec![("TIERRA".to_string(), 1), ("LUNA".to_string(), 2), ("SOL".to_string(), 3)]
        );
        assert_eq!(layout.clues[0].position, Placement::new(7, 4, Direction::Horizontal));
    }

    #[test]
    fn test_reading_order_numbering() {
        let engine =
            LayoutEngine::new(LayoutConfig::default().with_numbering(NumberingMode::ReadingOrder)).unwrap();
        let layout = engine.place_all(&records(&["SOL", "LUNA", "TIERRA"]));
        let words: Vec<&str> = layout.clues.iter().map(|c| c.word.as_str()).collect();
        // SOL starts at (4, 7), LUNA at (4, 9), TIERRA at (7, 4)
        assert_eq!(words, vec!["SOL", "LUNA", "TIERRA"]);
        assert_eq!(layout.clues.iter().map(|c| c.number).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_retry_is_recorded() {
        let layout = place_all(&records(&["ABCD", "WXYZ"]));
        assert!(!layout.is_complete());
        assert!(layout
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Retried { kept: BaseWordStrategy::Longest, .. })));

        let engine = LayoutEngine::new(LayoutConfig::default().without_retry()).unwrap();
        let layout = engine.place_all(&records(&["ABCD", "WXYZ"]));
        assert!(!layout.diagnostics.iter().any(|d| matches!(d, Diagnostic::Retried { .. })));
    }

    #[test]
    fn test_alternate_strategy_can_win() {
        let words = records(&[
            "ASTRONOMIA",
            "PLANETA",
            "GALAXIA",
            "ESTRELLA",
            "COMETA",
            "METEORITO",
            "SATELITE",
            "ORBITA",
            "ECLIPSE",
            "NEBULOSA",
            "TELESCOPIO",
            "ASTEROIDE",
            "CONSTELACION",
            "GRAVEDAD",
            "UNIVERSO",
            "LUNA",
            "SOL",
            "MARTE",
            "VENUS",
            "TIERRA",
        ]);
        let layout = place_all(&words);

        assert_eq!(layout.strategy, Some(BaseWordStrategy::MaxIntersections));
        assert!(layout.connected);
        assert!(layout.verify().is_empty());

        let (primary_placed, alternate_placed) = layout
            .diagnostics
            .iter()
            .find_map(|d| match d {
                Diagnostic::Retried {
                    primary_placed,
                    alternate_placed,
                    kept: BaseWordStrategy::MaxIntersections,
                } => Some((*primary_placed, *alternate_placed)),
                _ => None,
            })
            .expect("retry kept the alternate pass");
        assert!(alternate_placed > primary_placed);
        assert_eq!(layout.clues.len(), alternate_placed);
        assert_eq!(layout.clues.len() + layout.unplaced_ids().len(), words.len());
    }

    #[test]
    fn test_shuffle_seed_is_reproducible() {
        let words = records(&["CASA", "SALA", "ALAS", "MESA", "ASMA", "SAMA"]);
        let engine = LayoutEngine::new(LayoutConfig::default().with_shuffle_seed(99)).unwrap();
        assert_eq!(engine.place_all(&words), engine.place_all(&words));
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = place_all(&records(&["SOL", "LUNA"]));
        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
        assert!(back.verify().is_empty());
    }
}
