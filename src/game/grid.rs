//! Grid geometry.
//!
//! Pure coordinate math over a fixed `height x width` board.

use crate::game::types::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True iff `row` is in `[0, height)` and `col` is in `[0, width)`.
    pub fn contains(&self, cell: Coordinate) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coordinate::new(row, col)))
    }
}
