//! Crossword layout engine.
//!
//! Takes question/answer records and places every answer on a square grid so
//! that crossing words agree on their shared letters, no two words run into
//! each other, and all words form one connected crossword.
//!
//! ```
//! use crossword_core::{place_all, WordRecord};
//!
//! let layout = place_all(&[
//!     WordRecord::new("1", "sol", "Our star"),
//!     WordRecord::new("2", "luna", "Earth's satellite"),
//! ]);
//! assert!(layout.is_fully_connected());
//! assert_eq!(layout.clues.len(), 2);
//! ```

mod config;
mod connectivity;
mod error;
mod grid;
mod intersect;
mod layout;
mod normalize;
mod numbering;
mod placement;
mod rng;
mod types;
mod validator;

pub use config::LayoutConfig;
pub use connectivity::{components, connectivity_graph, is_connected, largest_component_size};
pub use error::LayoutError;
pub use grid::{Cell, Grid, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
pub use intersect::{candidate_placements, find_intersections, letter_intersections, potential_intersections, LetterMatch};
pub use layout::{place_all, Diagnostic, Layout, LayoutEngine};
pub use normalize::normalize_answer;
pub use numbering::{assign_numbers, NumberingMode};
pub use placement::BaseWordStrategy;
pub use rng::random_seed;
pub use types::{Difficulty, Direction, Intersection, PlacedClue, PlacedWord, Placement, Position, WordRecord};
pub use validator::{can_place, placement_crossings, verify_layout, LayoutViolation};
