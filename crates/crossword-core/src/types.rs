use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty tag carried by a word record.
///
/// The layout engine never looks at it; it is passed through to the output
/// so the consumer can style or filter clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(LayoutError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A question/answer pair handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub answer: String,
    pub clue: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl WordRecord {
    pub fn new(id: impl Into<String>, answer: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            answer: answer.into(),
            clue: clue.into(),
            category: String::new(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right ("across")
    Horizontal,
    /// Top to bottom ("down")
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// (delta row, delta col) of one step along this direction
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "Across"),
            Direction::Vertical => write!(f, "Down"),
        }
    }
}

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Start cell and orientation of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self { row, col, direction }
    }

    /// Position of the `offset`-th letter of a word laid out from here
    pub fn cell(&self, offset: usize) -> Position {
        let (dr, dc) = self.direction.step();
        Position::new(self.row + dr * offset, self.col + dc * offset)
    }
}

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// Normalized answer as it appears on the grid
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word_id: String,
    pub source: WordRecord,
    letters: Vec<char>,
}

impl PlacedWord {
    pub fn new(word: &str, placement: Placement, source: WordRecord) -> Self {
        Self {
            word: word.to_string(),
            row: placement.row,
            col: placement.col,
            direction: placement.direction,
            word_id: source.id.clone(),
            source,
            letters: word.chars().collect(),
        }
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.row, self.col, self.direction)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Position of the last letter
    pub fn end(&self) -> Position {
        self.placement().cell(self.len().saturating_sub(1))
    }

    /// Iterate over `(position, letter)` for every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let placement = self.placement();
        self.letters
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (placement.cell(i), letter))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }

    /// Letter this word puts at `pos`, if it covers that cell
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.offset_of(pos).map(|i| self.letters[i])
    }

    fn offset_of(&self, pos: Position) -> Option<usize> {
        let offset = match self.direction {
            Direction::Horizontal if pos.row == self.row && pos.col >= self.col => pos.col - self.col,
            Direction::Vertical if pos.col == self.col && pos.row >= self.row => pos.row - self.row,
            _ => return None,
        };
        (offset < self.len()).then_some(offset)
    }
}

/// A cell shared by two placed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    pub row: usize,
    pub col: usize,
    pub letter: char,
    pub word1_index: usize,
    pub word2_index: usize,
}

/// Output record: the input record enriched with its grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedClue {
    #[serde(flatten)]
    pub record: WordRecord,
    /// Normalized letters written on the grid
    pub word: String,
    pub position: Placement,
    pub number: usize,
}

impl PlacedClue {
    pub fn to_placed_word(&self) -> PlacedWord {
        PlacedWord::new(&self.word, self.position, self.record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_placed_word_cells() {
        let word = PlacedWord::new(
            "LUNA",
            Placement::new(2, 3, Direction::Vertical),
            WordRecord::new("w1", "luna", "Satellite"),
        );

        let cells: Vec<_> = word.cells().collect();
        assert_eq!(cells[0], (Position::new(2, 3), 'L'));
        assert_eq!(cells[3], (Position::new(5, 3), 'A'));
        assert_eq!(word.end(), Position::new(5, 3));
        assert_eq!(word.letter_at(Position::new(4, 3)), Some('N'));
        assert_eq!(word.letter_at(Position::new(6, 3)), None);
        assert!(!word.contains(Position::new(2, 4)));
    }

    #[test]
    fn test_placed_clue_wire_format() {
        let clue = PlacedClue {
            record: WordRecord::new("q1", "Sol", "Our star").with_category("astronomy"),
            word: "SOL".to_string(),
            position: Placement::new(7, 6, Direction::Horizontal),
            number: 1,
        };

        let json = serde_json::to_value(&clue).unwrap();
        assert_eq!(json["id"], "q1");
        assert_eq!(json["answer"], "Sol");
        assert_eq!(json["position"]["direction"], "horizontal");
        assert_eq!(json["number"], 1);
        assert_eq!(json["difficulty"], "medium");

        let back: PlacedClue = serde_json::from_value(json).unwrap();
        assert_eq!(back, clue);
    }
}
