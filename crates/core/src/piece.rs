//! Pieces module - tetromino instances and the ordered piece list
//!
//! A [`Piece`] holds up to four cells sharing one piece type and color. Fresh
//! pieces always have four cells; settled pieces lose cells when rows clear.
//!
//! [`Pieces`] is the authoritative placement of everything on the board.
//! Index 0 is the active (falling) piece, everything after it is settled.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, PieceType, Rotation};

/// Cells per piece.
pub const PIECE_CELLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: ArrayVec<Cell, PIECE_CELLS>,
}

impl Piece {
    /// Build a piece from cells. Extra cells beyond four are ignored.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().take(PIECE_CELLS).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn piece_type(&self) -> Option<PieceType> {
        self.cells.first().and_then(|cell| cell.piece_type)
    }

    pub fn color(&self) -> Option<Color> {
        self.cells.first().map(|cell| cell.color)
    }

    pub fn rotation(&self) -> Rotation {
        self.cells
            .first()
            .map(|cell| cell.rotation)
            .unwrap_or_default()
    }

    /// The cell with the minimum row, ties broken by minimum column.
    pub fn pivot(&self) -> Option<Cell> {
        self.cells
            .iter()
            .min_by_key(|cell| (cell.row_id, cell.col_id))
            .copied()
    }

    /// A new piece with `f` applied to every cell.
    pub fn map_cells(&self, f: impl Fn(&Cell) -> Cell) -> Self {
        Self {
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn shifted(&self, d_row: i16, d_col: i16) -> Self {
        self.map_cells(|cell| cell.shifted(d_row, d_col))
    }

    pub fn occupies(&self, row_id: i16, col_id: i16) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.row_id == row_id && cell.col_id == col_id)
    }
}

/// Ordered piece list: active piece first, settled pieces after.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pieces {
    pieces: Vec<Piece>,
}

impl Pieces {
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// A list holding only an active piece.
    pub fn single(active: Piece) -> Self {
        Self {
            pieces: vec![active],
        }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn active(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    pub fn settled(&self) -> &[Piece] {
        self.pieces.get(1..).unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    /// Every cell of every piece, active piece first.
    pub fn all_cells(&self) -> impl Iterator<Item = &Cell> {
        self.pieces.iter().flat_map(|piece| piece.cells().iter())
    }

    pub fn settled_cells(&self) -> impl Iterator<Item = &Cell> {
        self.settled().iter().flat_map(|piece| piece.cells().iter())
    }

    /// Replace the active piece, keeping settled pieces as they are.
    pub fn with_active(mut self, active: Piece) -> Self {
        match self.pieces.first_mut() {
            Some(slot) => *slot = active,
            None => self.pieces.push(active),
        }
        self
    }

    /// Put `next` in front; the previous active piece becomes settled in place.
    pub fn with_promoted(mut self, next: Piece) -> Self {
        self.pieces.insert(0, next);
        self
    }
}

impl From<Vec<Piece>> for Pieces {
    fn from(pieces: Vec<Piece>) -> Self {
        Self::new(pieces)
    }
}

impl<'a> IntoIterator for &'a Pieces {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_piece() -> Piece {
        let c = |r, col| Cell::piece(r, col, Color::GRAY, PieceType::UppercaseT, Rotation::Deg0);
        Piece::from_cells([c(1, 6), c(2, 5), c(2, 6), c(2, 7)])
    }

    #[test]
    fn test_pivot_is_min_row_then_min_col() {
        let c = |r, col| Cell::piece(r, col, Color::GRAY, PieceType::Z, Rotation::Deg90);
        let piece = Piece::from_cells([c(2, 6), c(1, 8), c(1, 7), c(3, 6)]);
        let pivot = piece.pivot().unwrap();
        assert_eq!((pivot.row_id, pivot.col_id), (1, 7));

        let pivot = t_piece().pivot().unwrap();
        assert_eq!((pivot.row_id, pivot.col_id), (1, 6));
        assert!(Piece::from_cells([]).pivot().is_none());
    }

    #[test]
    fn test_piece_caps_at_four_cells() {
        let c = |col| Cell::piece(1, col, Color::GRAY, PieceType::UppercaseI, Rotation::Deg90);
        let piece = Piece::from_cells((1..=6).map(c));
        assert_eq!(piece.len(), PIECE_CELLS);
    }

    #[test]
    fn test_shifted_keeps_identity() {
        let moved = t_piece().shifted(1, -1);
        assert!(moved.occupies(2, 5));
        assert!(moved.occupies(3, 4));
        assert_eq!(moved.piece_type(), Some(PieceType::UppercaseT));
        assert_eq!(moved.color(), Some(Color::GRAY));
    }

    #[test]
    fn test_active_and_settled_split() {
        let settled = t_piece().shifted(10, 0);
        let pieces = Pieces::single(settled.clone()).with_promoted(t_piece());

        assert_eq!(pieces.active(), Some(&t_piece()));
        assert_eq!(pieces.settled(), &[settled]);
        assert_eq!(pieces.all_cells().count(), 8);
        assert_eq!(pieces.settled_cells().count(), 4);

        let empty = Pieces::default();
        assert!(empty.active().is_none());
        assert!(empty.settled().is_empty());
    }

    #[test]
    fn test_with_active_replaces_only_index_zero() {
        let settled = t_piece().shifted(10, 0);
        let pieces = Pieces::new(vec![t_piece(), settled.clone()]);
        let pieces = pieces.with_active(t_piece().shifted(1, 0));

        assert_eq!(pieces.active(), Some(&t_piece().shifted(1, 0)));
        assert_eq!(pieces.settled(), &[settled]);
    }
}
