//! Engine configuration
//!
//! Board dimensions, palette and ramp settings are passed into the engine at
//! construction instead of living in process-wide globals.

use thiserror::Error;

use crate::speed::{RampPolicy, SpeedBracket, DEFAULT_BRACKETS};
use crate::types::{
    Color, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_PALETTE, DEFAULT_PREVIEW_COLUMNS,
    DEFAULT_PREVIEW_ROWS,
};

/// Smallest main board that still fits every spawn position.
pub const MIN_GRID_ROWS: u16 = 4;
pub const MIN_GRID_COLUMNS: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {rows}x{columns} is smaller than the spawn area (4x8)")]
    BoardTooSmall { rows: u16, columns: u16 },

    #[error("preview board {rows}x{columns} cannot hold a piece (need 4x3)")]
    PreviewTooSmall { rows: u16, columns: u16 },

    #[error("piece palette is empty")]
    EmptyPalette,

    #[error("speed brackets are empty")]
    NoBrackets,

    #[error("speed brackets must be sorted by descending score floor (at index {index})")]
    UnsortedBrackets { index: usize },

    #[error("last speed bracket must start at score 0, found {min_score}")]
    OpenBottomBracket { min_score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub rows: u16,
    pub columns: u16,
    pub preview_rows: u16,
    pub preview_columns: u16,
    pub palette: Vec<Color>,
    /// Main board background.
    pub grid_color: Color,
    /// Main board background once the game is over.
    pub game_over_color: Color,
    pub preview_color: Color,
    pub seed: u32,
    pub ramp: RampPolicy,
    pub brackets: Vec<SpeedBracket>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            columns: DEFAULT_GRID_COLUMNS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            preview_columns: DEFAULT_PREVIEW_COLUMNS,
            palette: DEFAULT_PALETTE.to_vec(),
            grid_color: Color::WHITE,
            game_over_color: Color::GRAY,
            preview_color: Color::Transparent,
            seed: 0,
            ramp: RampPolicy::default(),
            brackets: DEFAULT_BRACKETS.to_vec(),
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ramp(mut self, ramp: RampPolicy) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_GRID_ROWS || self.columns < MIN_GRID_COLUMNS {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.preview_rows < DEFAULT_PREVIEW_ROWS || self.preview_columns < DEFAULT_PREVIEW_COLUMNS {
            return Err(ConfigError::PreviewTooSmall {
                rows: self.preview_rows,
                columns: self.preview_columns,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let last = self.brackets.last().ok_or(ConfigError::NoBrackets)?;
        if let Some(index) = self
            .brackets
            .windows(2)
            .position(|pair| pair[0].min_score <= pair[1].min_score)
        {
            return Err(ConfigError::UnsortedBrackets { index: index + 1 });
        }
        if last.min_score != 0 {
            return Err(ConfigError::OpenBottomBracket {
                min_score: last.min_score,
            });
        }
        Ok(())
    }
}
