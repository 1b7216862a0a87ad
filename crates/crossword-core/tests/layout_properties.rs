//! Invariants of finished layouts.
//!
//! Covered:
//! - every shared cell holds one letter for all words through it;
//! - no word touches a letter directly before its start or after its end;
//! - every placed cell is on the grid;
//! - re-validating any accepted placement against the final grid succeeds;
//! - placed words form one connected crossword;
//! - identical input gives an identical layout.

use std::collections::HashMap;

use crossword_core::{
    is_connected, verify_layout, Layout, LayoutConfig, LayoutEngine, NumberingMode, Position, WordRecord,
};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn records(answers: &[String]) -> Vec<WordRecord> {
    answers
        .iter()
        .enumerate()
        .map(|(i, a)| WordRecord::new(format!("w{}", i), a.clone(), format!("clue {}", i)))
        .collect()
}

fn assert_letters_consistent(layout: &Layout) {
    let mut seen: HashMap<Position, char> = HashMap::new();
    for word in layout.words() {
        for (pos, letter) in word.cells() {
            if let Some(&existing) = seen.get(&pos) {
                assert_eq!(existing, letter, "letter mismatch at {:?}", pos);
            }
            seen.insert(pos, letter);
        }
    }
}

fn assert_in_bounds(layout: &Layout) {
    for word in layout.words() {
        for (pos, _) in word.cells() {
            assert!(pos.row < layout.grid_size && pos.col < layout.grid_size);
        }
    }
}

fn assert_no_concatenation(layout: &Layout) {
    let grid = layout.grid();
    for word in layout.words() {
        let (dr, dc) = word.direction.step();
        let before = grid.get(word.row as isize - dr as isize, word.col as isize - dc as isize);
        let end = word.end();
        let after = grid.get(end.row as isize + dr as isize, end.col as isize + dc as isize);
        assert!(before.is_none(), "{} has a letter before it", word.word);
        assert!(after.is_none(), "{} has a letter after it", word.word);
    }
}

proptest! {
    #[test]
    fn generated_layouts_respect_invariants(
        answers in prop::collection::vec("[A-H]{2,7}", 1..12),
        grid_size in 7usize..20,
        reading_order in any::<bool>(),
    ) {
        let numbering = if reading_order { NumberingMode::ReadingOrder } else { NumberingMode::PlacementOrder };
        let config = LayoutConfig::default().with_grid_size(grid_size).with_numbering(numbering);
        let engine = LayoutEngine::new(config).unwrap();
        let layout = engine.place_all(&records(&answers));

        assert_letters_consistent(&layout);
        assert_in_bounds(&layout);
        assert_no_concatenation(&layout);
        prop_assert!(layout.verify().is_empty());
        prop_assert!(layout.connected);
        prop_assert!(is_connected(&layout.words()));
        prop_assert_eq!(layout.clues.len() + layout.unplaced_ids().len(), answers.len());
    }

    #[test]
    fn layouts_are_deterministic(
        answers in prop::collection::vec("[A-F]{2,6}", 1..8),
        seed in proptest::option::of(any::<u64>()),
    ) {
        let mut config = LayoutConfig::default();
        config.shuffle_seed = seed;
        let engine = LayoutEngine::new(config).unwrap();
        let words = records(&answers);
        prop_assert_eq!(engine.place_all(&words), engine.place_all(&words));
    }

    #[test]
    fn arbitrary_text_never_panics(answers in prop::collection::vec(".{0,12}", 0..8)) {
        let layout = crossword_core::place_all(&records(&answers));
        prop_assert!(layout.verify().is_empty());
        prop_assert!(layout.clues.len() <= answers.len());
    }
}

#[test]
fn single_word_is_centred() {
    init_logging();
    let layout = crossword_core::place_all(&records(&["SOL".to_string()]));
    assert_eq!(layout.clues.len(), 1);
    let clue = &layout.clues[0];
    assert_eq!((clue.position.row, clue.position.col), (7, 6));
    assert_eq!(clue.number, 1);
    assert!(layout.is_fully_connected());
}

#[test]
fn two_words_share_a_letter() {
    init_logging();
    let layout = crossword_core::place_all(&records(&["SOL".to_string(), "LUNA".to_string()]));
    assert!(layout.is_fully_connected());

    let words = layout.words();
    let shared: Vec<Position> = words[0].cells().map(|(p, _)| p).filter(|p| words[1].contains(*p)).collect();
    assert_eq!(shared.len(), 1);
    assert_eq!(words[0].letter_at(shared[0]), words[1].letter_at(shared[0]));
    assert_eq!(words[0].letter_at(shared[0]), Some('L'));
}

#[test]
fn three_words_connect() {
    init_logging();
    let answers: Vec<String> = ["TIERRA", "LUNA", "SOL"].iter().map(|s| s.to_string()).collect();
    let layout = crossword_core::place_all(&records(&answers));
    assert_eq!(layout.clues.len(), 3);
    assert!(layout.is_fully_connected());
    assert_letters_consistent(&layout);
    assert!(verify_layout(&layout.words(), layout.grid_size).is_empty());
}

#[test]
fn unrelated_words_are_reported_not_hidden() {
    init_logging();
    let answers: Vec<String> = ["ABCD", "WXYZ"].iter().map(|s| s.to_string()).collect();
    let layout = crossword_core::place_all(&records(&answers));

    assert!(!layout.is_complete());
    assert!(!layout.is_fully_connected());
    assert_eq!(layout.unplaced_ids(), vec!["w1"]);

    // Forcing both words onto the grid yields islands, and the check sees it
    let forced = vec![
        layout.words()[0].clone(),
        crossword_core::PlacedWord::new(
            "WXYZ",
            crossword_core::Placement::new(0, 0, crossword_core::Direction::Horizontal),
            records(&answers)[1].clone(),
        ),
    ];
    assert!(!is_connected(&forced));
}

#[test]
fn empty_input_gives_empty_layout() {
    let layout = crossword_core::place_all(&[]);
    assert!(layout.clues.is_empty());
    assert!(layout.diagnostics.is_empty());
}

#[test]
fn duplicate_answers_do_not_overlap() {
    init_logging();
    let answers: Vec<String> = ["CASA", "CASA", "SACO"].iter().map(|s| s.to_string()).collect();
    let layout = crossword_core::place_all(&records(&answers));
    assert!(layout.verify().is_empty());

    let placements: Vec<_> = layout.clues.iter().map(|c| c.position).collect();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
