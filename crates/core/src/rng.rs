//! RNG module - weighted piece selection and palette picks
//!
//! Piece types are drawn from a fixed 21-entry weighted list rather than a
//! uniform choice over the five types, so T and L pieces show up most often.
//! Colors are drawn uniformly from the configured palette.
//!
//! Everything is driven by a small seeded LCG so a game is reproducible from
//! its seed.

use crate::types::{Color, PieceType};

/// Weighted draw list for piece types (6×T, 6×L, 4×Z, 3×square, 2×I).
pub const PIECE_TYPE_WEIGHTS: [PieceType; 21] = [
    PieceType::UppercaseT,
    PieceType::UppercaseI,
    PieceType::Square,
    PieceType::UppercaseL,
    PieceType::Z,
    PieceType::UppercaseT,
    PieceType::Square,
    PieceType::UppercaseL,
    PieceType::Z,
    PieceType::UppercaseT,
    PieceType::UppercaseL,
    PieceType::UppercaseT,
    PieceType::UppercaseI,
    PieceType::Square,
    PieceType::UppercaseL,
    PieceType::Z,
    PieceType::UppercaseT,
    PieceType::UppercaseL,
    PieceType::Z,
    PieceType::UppercaseT,
    PieceType::UppercaseL,
];

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws piece types and colors for newly generated pieces.
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick a piece type from the weighted list.
    pub fn piece_type(&mut self) -> PieceType {
        let idx = self.rng.next_range(PIECE_TYPE_WEIGHTS.len() as u32) as usize;
        PIECE_TYPE_WEIGHTS[idx]
    }

    /// Pick a palette color uniformly. An empty palette falls back to white.
    pub fn color(&mut self, palette: &[Color]) -> Color {
        if palette.is_empty() {
            return Color::WHITE;
        }
        let idx = self.rng.next_range(palette.len() as u32) as usize;
        palette[idx]
    }
}
