//! Line clearing and scoring
//!
//! A row is complete when every column holds a piece cell. Completed rows are
//! removed from every piece, then each surviving cell above a removed row
//! drops one row per removed row below it.

use std::collections::{BTreeMap, BTreeSet};

use crate::piece::{Piece, Pieces};
use crate::types::POINTS_PER_CELL;

/// Outcome of a row-completion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// Pieces after removal and collapse.
    pub pieces: Pieces,
    /// Completed row ids, ascending.
    pub flagged_rows: Vec<i16>,
}

impl LineClear {
    pub fn cleared_count(&self) -> usize {
        self.flagged_rows.len()
    }
}

/// Row ids whose distinct occupied columns cover the whole board width.
pub fn completed_rows(pieces: &Pieces, columns: u16) -> Vec<i16> {
    let mut by_row: BTreeMap<i16, BTreeSet<i16>> = BTreeMap::new();
    for cell in pieces.all_cells().filter(|cell| cell.occupied) {
        by_row.entry(cell.row_id).or_default().insert(cell.col_id);
    }
    by_row
        .into_iter()
        .filter(|(_, cols)| cols.len() == columns as usize)
        .map(|(row_id, _)| row_id)
        .collect()
}

/// Remove completed rows and collapse the rows above them.
///
/// With no completed rows the pieces come back unchanged.
pub fn clear_completed_rows(pieces: &Pieces, columns: u16) -> LineClear {
    let flagged_rows = completed_rows(pieces, columns);
    if flagged_rows.is_empty() {
        return LineClear {
            pieces: pieces.clone(),
            flagged_rows,
        };
    }

    let collapsed = pieces
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            let survivors = piece
                .cells()
                .iter()
                .filter(|cell| !flagged_rows.contains(&cell.row_id))
                .copied();
            let mut piece = Piece::from_cells(survivors);
            // Ascending order: a cell above several cleared rows moves once per row.
            for &row_id in &flagged_rows {
                piece = piece.map_cells(|cell| {
                    if cell.row_id < row_id {
                        cell.shifted(1, 0)
                    } else {
                        *cell
                    }
                });
            }
            (index, piece)
        })
        // settled pieces with no cells left are dropped; index 0 keeps its slot
        .filter(|(index, piece)| *index == 0 || !piece.is_empty())
        .map(|(_, piece)| piece)
        .collect::<Vec<_>>();

    LineClear {
        pieces: Pieces::new(collapsed),
        flagged_rows,
    }
}

/// Points for clearing `rows` rows at once: `100 × columns × rows²`.
pub fn score_for_rows(rows: usize, columns: u16) -> u32 {
    let rows = rows as u32;
    rows * columns as u32 * POINTS_PER_CELL * rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color, PieceType, Rotation};

    fn row_piece(row_id: i16, cols: impl IntoIterator<Item = i16>) -> Piece {
        Piece::from_cells(
            cols.into_iter()
                .map(|c| Cell::piece(row_id, c, Color::GRAY, PieceType::UppercaseI, Rotation::Deg90)),
        )
    }

    /// Fill `row_id` completely on an 11-wide board using three pieces.
    fn full_row(row_id: i16) -> Vec<Piece> {
        vec![
            row_piece(row_id, 1..=4),
            row_piece(row_id, 5..=8),
            row_piece(row_id, 9..=11),
        ]
    }

    #[test]
    fn test_no_completed_rows_is_identity() {
        let pieces = Pieces::new(vec![row_piece(20, 1..=4), row_piece(19, 1..=4)]);
        let result = clear_completed_rows(&pieces, 11);
        assert!(result.flagged_rows.is_empty());
        assert_eq!(result.pieces, pieces);
    }

    #[test]
    fn test_single_row_clear_shifts_rows_above() {
        let mut list = full_row(20);
        list.push(row_piece(19, [3]));
        let result = clear_completed_rows(&Pieces::new(list), 11);

        assert_eq!(result.flagged_rows, vec![20]);
        let cells: Vec<_> = result.pieces.all_cells().collect();
        assert_eq!(cells.len(), 1);
        assert_eq!((cells[0].row_id, cells[0].col_id), (20, 3));
    }

    #[test]
    fn test_multiple_rows_shift_by_count_below() {
        let mut list = full_row(20);
        list.extend(full_row(18));
        list.push(row_piece(19, [1]));
        list.push(row_piece(17, [2]));
        let result = clear_completed_rows(&Pieces::new(list), 11);

        assert_eq!(result.flagged_rows, vec![18, 20]);
        let mut cells: Vec<_> = result
            .pieces
            .all_cells()
            .map(|c| (c.row_id, c.col_id))
            .collect();
        cells.sort();
        // row 19 sits above one cleared row, row 17 above two
        assert_eq!(cells, vec![(19, 2), (20, 1)]);
    }

    #[test]
    fn test_emptied_settled_pieces_are_dropped() {
        let mut list = full_row(20);
        list.push(row_piece(19, [4]));
        let result = clear_completed_rows(&Pieces::new(list), 11);

        // the first slot survives even when emptied, the other two go
        assert_eq!(result.pieces.len(), 2);
        assert!(result.pieces.active().is_some_and(Piece::is_empty));
        assert_eq!(result.pieces.settled()[0].cells()[0].row_id, 20);
    }

    #[test]
    fn test_piece_list_stays_short_over_many_clears() {
        let mut pieces = Pieces::default();
        for _ in 0..50 {
            let mut list = pieces.iter().cloned().collect::<Vec<_>>();
            list.extend(full_row(20));
            pieces = clear_completed_rows(&Pieces::new(list), 11).pieces;
        }
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_duplicate_slots_do_not_complete_a_row() {
        let pieces = Pieces::new(vec![row_piece(20, 1..=4), row_piece(20, 1..=4), row_piece(20, 5..=7)]);
        assert!(completed_rows(&pieces, 11).is_empty());
    }

    #[test]
    fn test_score_is_quadratic_in_rows() {
        assert_eq!(score_for_rows(0, 11), 0);
        assert_eq!(score_for_rows(1, 11), 1100);
        assert_eq!(score_for_rows(2, 11), 4400);
        assert_eq!(score_for_rows(3, 11), 9900);
        assert_eq!(score_for_rows(4, 11), 17600);
    }
}
