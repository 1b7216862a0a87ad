use crate::{LayoutError, NumberingMode, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration for a layout run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// How clue numbers are assigned
    pub numbering: NumberingMode,
    /// Shuffle the input before the length sort, for reproducible variations
    pub shuffle_seed: Option<u64>,
    /// Re-run with the max-intersection anchor when the first pass drops a
    /// word or leaves islands
    pub retry_with_alternate: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            numbering: NumberingMode::PlacementOrder,
            shuffle_seed: None,
            retry_with_alternate: true,
        }
    }
}

impl LayoutConfig {
    pub fn compact() -> Self {
        Self {
            grid_size: 11,
            ..Self::default()
        }
    }

    pub fn standard() -> Self {
        Self::default()
    }

    pub fn large() -> Self {
        Self {
            grid_size: 21,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self, LayoutError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::compact()),
            "standard" => Ok(Self::standard()),
            "large" => Ok(Self::large()),
            _ => Err(LayoutError::UnknownPreset(name.to_string())),
        }
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_numbering(mut self, numbering: NumberingMode) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry_with_alternate = false;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(LayoutError::InvalidGridSize {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }
}
