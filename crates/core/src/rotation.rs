//! Rotation tables
//!
//! Each piece type has four orientations. An orientation is a list of four
//! `(row, col)` offsets from the pivot of the piece *being rotated* (its
//! minimum-row, then minimum-column cell). Rotating looks up the next
//! orientation and places the new cells at `pivot + offset`.
//!
//! Because offsets are anchored on the previous shape's pivot, some entries
//! carry negative column offsets (e.g. T at 0° starts one column left of the
//! 270° pivot). Every table closes: four rotations return the original cells.

use crate::piece::Piece;
use crate::types::{Cell, PieceType, Rotation};

/// Offset of one cell from the rotation pivot, `(d_row, d_col)`.
pub type CellOffset = (i16, i16);

/// Offsets for one orientation.
pub type Orientation = [CellOffset; 4];

const L_TABLE: [Orientation; 4] = [
    [(0, 0), (0, 1), (1, 0), (2, 0)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
];

const I_TABLE: [Orientation; 4] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const SQUARE_TABLE: [Orientation; 4] = [[(0, 0), (0, 1), (1, 0), (1, 1)]; 4];

const T_TABLE: [Orientation; 4] = [
    [(0, -1), (1, -2), (1, -1), (1, 0)],
    [(0, -1), (1, -1), (2, -1), (1, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(0, 2), (1, 2), (2, 2), (1, 1)],
];

const Z_TABLE: [Orientation; 4] = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

/// Offsets placing `piece_type` in `rotation`, relative to the pivot of the
/// shape it rotates out of.
pub fn orientation(piece_type: PieceType, rotation: Rotation) -> &'static Orientation {
    let table = match piece_type {
        PieceType::UppercaseL => &L_TABLE,
        PieceType::UppercaseI => &I_TABLE,
        PieceType::Square => &SQUARE_TABLE,
        PieceType::UppercaseT => &T_TABLE,
        PieceType::Z => &Z_TABLE,
    };
    &table[rotation.index()]
}

/// The piece turned to its next orientation, preserving type and color.
///
/// Returns `None` for a piece with no cells or no piece type.
pub fn rotated(piece: &Piece) -> Option<Piece> {
    let pivot = piece.pivot()?;
    let piece_type = piece.piece_type()?;
    let next = piece.rotation().next();

    let cells = orientation(piece_type, next).iter().map(|&(d_row, d_col)| {
        Cell::piece(
            pivot.row_id + d_row,
            pivot.col_id + d_col,
            pivot.color,
            piece_type,
            next,
        )
    });
    Some(Piece::from_cells(cells))
}
