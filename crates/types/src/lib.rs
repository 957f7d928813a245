//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal renderer and the input layer alike.
//!
//! # Coordinates
//!
//! Board coordinates are **1-based**: `row_id` runs from 1 (top) to the board's
//! row count, `col_id` from 1 (left) to the column count. Candidate positions
//! computed during movement may step outside that range (e.g. `col_id == 0`);
//! they are only ever stored on the board after passing the legality checks.
//!
//! # Default Dimensions
//!
//! | Board | Rows | Columns |
//! |-------|------|---------|
//! | Main | 20 | 11 |
//! | Preview | 4 | 3 |
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{Cell, Color, GameCommand, PieceType, Rotation};
//!
//! assert_eq!(PieceType::UppercaseT.as_str(), "uppercase-T");
//!
//! assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
//!
//! let cell = Cell::empty(1, 1, Color::WHITE);
//! assert!(!cell.occupied);
//!
//! assert_eq!(GameCommand::MoveLeft.as_str(), "moveLeft");
//! ```

/// Main board row count.
pub const DEFAULT_GRID_ROWS: u16 = 20;

/// Main board column count.
pub const DEFAULT_GRID_COLUMNS: u16 = 11;

/// Preview board row count.
pub const DEFAULT_PREVIEW_ROWS: u16 = 4;

/// Preview board column count.
pub const DEFAULT_PREVIEW_COLUMNS: u16 = 3;

/// Points per cleared cell before the multi-line multiplier.
pub const POINTS_PER_CELL: u32 = 100;

/// Gravity interval before the first score threshold (milliseconds per row).
pub const BASE_SPEED_MS: u32 = 1000;

/// Terminal frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Piece palette; colors are picked uniformly at spawn.
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb(0xF7, 0xA0, 0x4A),
    Color::rgb(0xAD, 0x6A, 0x6C),
    Color::rgb(0xFF, 0xC9, 0xC9),
    Color::rgb(0xCC, 0xAD, 0xC5),
    Color::rgb(0x4F, 0x51, 0x7D),
];

/// Display color of a cell.
///
/// `Transparent` is used by the preview board background; renderers map it to
/// whatever surrounds the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Transparent,
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// The five piece variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    UppercaseL,
    UppercaseI,
    Square,
    UppercaseT,
    Z,
}

impl PieceType {
    pub const ALL: [PieceType; 5] = [
        PieceType::UppercaseL,
        PieceType::UppercaseI,
        PieceType::Square,
        PieceType::UppercaseT,
        PieceType::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceType::UppercaseL => "uppercase-L",
            PieceType::UppercaseI => "uppercase-I",
            PieceType::Square => "square",
            PieceType::UppercaseT => "uppercase-T",
            PieceType::Z => "Z",
        }
    }
}

/// Discrete piece orientation in degrees.
///
/// The cycle goes: 0 → 90 → 180 → 270 → 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Advance by 90°, wrapping 360° back to 0°
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Deg0.next(), Rotation::Deg90);
    /// assert_eq!(Rotation::Deg90.next(), Rotation::Deg180);
    /// assert_eq!(Rotation::Deg180.next(), Rotation::Deg270);
    /// assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Table index (0..4) for per-orientation lookups.
    pub fn index(&self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }
}

/// One board slot, or one square of a piece.
///
/// Cells are immutable values: every change produces a new `Cell` through the
/// `with_*`/`shifted` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row_id: i16,
    pub col_id: i16,
    pub color: Color,
    pub occupied: bool,
    pub rotation: Rotation,
    pub piece_type: Option<PieceType>,
}

impl Cell {
    /// An unoccupied background cell.
    pub const fn empty(row_id: i16, col_id: i16, color: Color) -> Self {
        Self {
            row_id,
            col_id,
            color,
            occupied: false,
            rotation: Rotation::Deg0,
            piece_type: None,
        }
    }

    /// An occupied cell belonging to a piece.
    pub const fn piece(
        row_id: i16,
        col_id: i16,
        color: Color,
        piece_type: PieceType,
        rotation: Rotation,
    ) -> Self {
        Self {
            row_id,
            col_id,
            color,
            occupied: true,
            rotation,
            piece_type: Some(piece_type),
        }
    }

    pub fn shifted(&self, d_row: i16, d_col: i16) -> Self {
        Self {
            row_id: self.row_id + d_row,
            col_id: self.col_id + d_col,
            ..*self
        }
    }

    /// Same slot, reset to an unoccupied background cell.
    pub fn cleared(&self, color: Color) -> Self {
        Self::empty(self.row_id, self.col_id, color)
    }

    pub fn same_slot(&self, other: &Cell) -> bool {
        self.row_id == other.row_id && self.col_id == other.col_id
    }
}

/// Commands accepted by the engine
///
/// These are produced by the input layer and dispatched through
/// `Engine::apply`. All of them are fire-and-forget: effects become visible
/// through the engine's state streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Start the game (no-op while already running)
    Start,
    /// Reinitialize every store and begin a fresh game
    Reset,
    /// Rotate the active piece by 90°
    Rotate,
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Move the active piece one row down (locks when it cannot)
    MoveDown,
}

impl GameCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Start => "start",
            GameCommand::Reset => "reset",
            GameCommand::Rotate => "rotate",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::MoveDown => "moveDown",
        }
    }
}
