//! Spawn geometry and preview framing
//!
//! Every piece type starts from fixed absolute cells near the top-center of
//! the main board, in orientation 0°. The preview board reuses the same piece
//! values shifted by a per-type offset so they sit inside the small board.

use crate::piece::Piece;
use crate::types::{Cell, Color, PieceType, Rotation};

/// Absolute `(row_id, col_id)` spawn cells per piece type.
pub fn spawn_cells(piece_type: PieceType) -> [(i16, i16); 4] {
    match piece_type {
        PieceType::UppercaseL => [(1, 6), (1, 7), (2, 6), (3, 6)],
        PieceType::UppercaseI => [(1, 6), (2, 6), (3, 6), (4, 6)],
        PieceType::Square => [(1, 5), (1, 6), (2, 5), (2, 6)],
        PieceType::UppercaseT => [(1, 6), (2, 5), (2, 6), (2, 7)],
        PieceType::Z => [(1, 6), (1, 7), (2, 7), (2, 8)],
    }
}

/// A fresh piece at its spawn position.
pub fn spawn_piece(piece_type: PieceType, color: Color) -> Piece {
    Piece::from_cells(
        spawn_cells(piece_type)
            .into_iter()
            .map(|(row_id, col_id)| Cell::piece(row_id, col_id, color, piece_type, Rotation::Deg0)),
    )
}

/// Display shift applied to a spawned piece on the preview board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOffset {
    pub top: i16,
    pub left: i16,
}

pub fn preview_offset(piece_type: PieceType) -> PreviewOffset {
    match piece_type {
        PieceType::UppercaseL => PreviewOffset { top: 0, left: -5 },
        PieceType::UppercaseI => PreviewOffset { top: 0, left: -5 },
        PieceType::Square => PreviewOffset { top: 0, left: -4 },
        PieceType::UppercaseT => PreviewOffset { top: 0, left: -4 },
        PieceType::Z => PreviewOffset { top: 0, left: -5 },
    }
}

/// The piece as drawn on the preview board.
pub fn preview_projection(piece: &Piece) -> Piece {
    match piece.piece_type() {
        Some(piece_type) => {
            let PreviewOffset { top, left } = preview_offset(piece_type);
            piece.shifted(top, left)
        }
        None => piece.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_GRID_COLUMNS, DEFAULT_PREVIEW_COLUMNS, DEFAULT_PREVIEW_ROWS};

    #[test]
    fn test_spawn_cells_touch_row_one() {
        for piece_type in PieceType::ALL {
            let piece = spawn_piece(piece_type, Color::GRAY);
            assert_eq!(piece.len(), 4);
            assert_eq!(piece.pivot().unwrap().row_id, 1, "{piece_type:?}");
            assert!(piece
                .cells()
                .iter()
                .all(|c| c.col_id >= 1 && c.col_id <= DEFAULT_GRID_COLUMNS as i16));
        }
    }

    #[test]
    fn test_preview_projection_fits_preview_board() {
        for piece_type in PieceType::ALL {
            let preview = preview_projection(&spawn_piece(piece_type, Color::GRAY));
            for cell in preview.cells() {
                assert!(
                    (1..=DEFAULT_PREVIEW_ROWS as i16).contains(&cell.row_id)
                        && (1..=DEFAULT_PREVIEW_COLUMNS as i16).contains(&cell.col_id),
                    "{piece_type:?} cell {:?} outside preview board",
                    (cell.row_id, cell.col_id)
                );
            }
        }
    }
}
