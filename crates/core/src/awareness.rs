//! Piece awareness - collision and boundary checks for a candidate move
//!
//! Given the piece list and a pure per-piece transform, [`generate_piece_awareness`]
//! computes the candidate position of the active piece and reports which
//! boundaries or settled cells it would run into. It never mutates anything;
//! the movement policies decide what to do with the answer.

use crate::piece::{Piece, Pieces};

/// Board extent the candidate is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub rows: u16,
    pub columns: u16,
}

/// Derived facts about moving the active piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Awareness {
    /// The active piece before the transform.
    pub active: Piece,
    /// The transformed active piece.
    pub candidate: Piece,
    /// Some candidate cell lies below the last row.
    pub will_hit_bottom: bool,
    /// Some candidate cell has `col_id <= 0`.
    pub will_hit_left_side: bool,
    /// Some candidate cell lies right of the last column.
    pub will_hit_right_side: bool,
    /// Some candidate cell shares a slot with a settled cell.
    pub will_hit_another_piece: bool,
}

impl Awareness {
    pub fn hits_anything(&self) -> bool {
        self.will_hit_bottom
            || self.will_hit_left_side
            || self.will_hit_right_side
            || self.will_hit_another_piece
    }
}

/// Evaluate `transform` on the active piece (index 0).
///
/// Returns `None` when there is no active piece.
pub fn generate_piece_awareness(
    pieces: &Pieces,
    bounds: Bounds,
    transform: impl FnOnce(&Piece) -> Piece,
) -> Option<Awareness> {
    let active = pieces.active()?.clone();
    let candidate = transform(&active);

    let cells = candidate.cells();
    let will_hit_bottom = cells.iter().any(|c| c.row_id > bounds.rows as i16);
    let will_hit_left_side = cells.iter().any(|c| c.col_id <= 0);
    let will_hit_right_side = cells.iter().any(|c| c.col_id > bounds.columns as i16);
    let will_hit_another_piece = cells
        .iter()
        .any(|c| pieces.settled_cells().any(|settled| settled.same_slot(c)));

    Some(Awareness {
        active,
        candidate,
        will_hit_bottom,
        will_hit_left_side,
        will_hit_right_side,
        will_hit_another_piece,
    })
}
