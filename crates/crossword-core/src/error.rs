use thiserror::Error;

/// Hard errors. Words that cannot be placed are not errors; they are
/// reported as [`crate::Diagnostic`] values on the returned layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("grid size must be between 1 and {max}, got {size}")]
    InvalidGridSize { size: usize, max: usize },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown numbering mode: {0} (expected placement or reading)")]
    UnknownNumbering(String),

    #[error("unknown preset: {0} (expected compact, standard or large)")]
    UnknownPreset(String),
}
