//! Grid module - the rendering projection of the pieces
//!
//! A grid maps every `(row_id, col_id)` pair of a board to exactly one
//! [`Cell`]. It is never sparse: it is created fully populated and writes can
//! only replace existing slots. Cells are stored in a flat row-major vector.
//!
//! The grid is not authoritative for piece positions; the engine rewrites it
//! from the piece list after every change.

use crate::types::{Cell, Color};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u16,
    columns: u16,
    /// Row-major: index = (row_id - 1) * columns + (col_id - 1)
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid where every slot is an unoccupied cell of `color`.
    pub fn filled(rows: u16, columns: u16, color: Color) -> Self {
        let mut cells = Vec::with_capacity(rows as usize * columns as usize);
        for row_id in 1..=rows as i16 {
            for col_id in 1..=columns as i16 {
                cells.push(Cell::empty(row_id, col_id, color));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, row_id: i16, col_id: i16) -> Option<usize> {
        if self.is_out_of_bounds(row_id, col_id) {
            return None;
        }
        Some((row_id as usize - 1) * self.columns as usize + (col_id as usize - 1))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_out_of_bounds(&self, row_id: i16, col_id: i16) -> bool {
        row_id < 1 || row_id > self.rows as i16 || col_id < 1 || col_id > self.columns as i16
    }

    /// Cell at `(row_id, col_id)`, or `None` outside the board.
    pub fn get(&self, row_id: i16, col_id: i16) -> Option<&Cell> {
        self.index(row_id, col_id).map(|idx| &self.cells[idx])
    }

    /// Write `cell` into the slot named by its own coordinates.
    ///
    /// Returns false (and leaves the grid untouched) when the slot is outside
    /// the board.
    pub fn set(&mut self, cell: Cell) -> bool {
        match self.index(cell.row_id, cell.col_id) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Builder-style [`Grid::set`], convenient inside store actions.
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.set(cell);
        self
    }

    /// One row of cells, left to right.
    pub fn row(&self, row_id: i16) -> Option<&[Cell]> {
        let start = self.index(row_id, 1)?;
        Some(&self.cells[start..start + self.columns as usize])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceType, Rotation};

    #[test]
    fn test_filled_grid_is_total() {
        let grid = Grid::filled(20, 11, Color::WHITE);
        assert_eq!(grid.len(), 220);
        for row_id in 1..=20 {
            for col_id in 1..=11 {
                let cell = grid.get(row_id, col_id).unwrap();
                assert_eq!((cell.row_id, cell.col_id), (row_id, col_id));
                assert!(!cell.occupied);
                assert_eq!(cell.color, Color::WHITE);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_and_writes() {
        let mut grid = Grid::filled(4, 3, Color::Transparent);
        assert!(grid.get(0, 1).is_none());
        assert!(grid.get(1, 0).is_none());
        assert!(grid.get(5, 1).is_none());
        assert!(grid.get(1, 4).is_none());

        let stray = Cell::piece(1, 0, Color::GRAY, PieceType::Square, Rotation::Deg0);
        assert!(!grid.set(stray));
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_set_replaces_slot() {
        let mut grid = Grid::filled(20, 11, Color::WHITE);
        let cell = Cell::piece(20, 11, Color::GRAY, PieceType::Z, Rotation::Deg90);
        assert!(grid.set(cell));
        assert_eq!(grid.get(20, 11), Some(&cell));
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.row(20).unwrap()[10], cell);
    }
}
