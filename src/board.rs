//! Board state and text rendering.

use crate::error::GameError;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One grid position, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell on the board.
///
/// `Empty` is a real sentinel, never one of the player symbols, so an empty
/// cell can never accidentally satisfy a symbol check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No one has claimed this cell.
    Empty,
    /// Claimed by the player owning this symbol.
    Occupied(char),
}

impl Cell {
    /// The single glyph used when rendering this cell.
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(symbol) => symbol,
        }
    }
}

/// An NxN grid of cells.
///
/// Dimensions are fixed at construction. The board itself never clears or
/// refuses an overwrite; occupancy enforcement belongs to the move
/// validator (`moves::commit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    ///
    /// `GameConfig` guarantees a size of at least 1 on the binary path; a
    /// zero-size board is still well-defined here (no cells, full, renders
    /// to nothing) so no direct caller can underflow the renderer.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    /// Cell at the given coordinate, `None` out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets a cell to the given symbol.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if the coordinate is off the grid.
    pub fn mark(&mut self, coord: Coord, symbol: char) -> Result<(), GameError> {
        let index = self.index(coord).ok_or(GameError::OutOfBounds {
            col: coord.col as i64 + 1,
            row: coord.row as i64 + 1,
            size: self.size,
        })?;
        self.cells[index] = Cell::Occupied(symbol);
        Ok(())
    }

    /// True if the coordinate is on the board and unclaimed.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// True once every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as a text grid.
    ///
    /// Cells within a row are separated by `|` and padded with `padding`
    /// spaces on both sides; rows are separated by a dash rule of length
    /// `size * (2 * padding + 1) + (size - 1)`, with no rule after the last
    /// row. Pure function of board contents.
    pub fn render(&self, padding: usize) -> String {
        let rule_len = self.size * (2 * padding + 1) + self.size.saturating_sub(1);
        let pad = " ".repeat(padding);
        let mut lines = Vec::with_capacity((2 * self.size).saturating_sub(1));

        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let glyph = self.cells[row * self.size + col].glyph();
                    format!("{pad}{glyph}{pad}")
                })
                .collect();
            lines.push(cells.join("|"));
            if row != self.size - 1 {
                lines.push("-".repeat(rule_len));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.is_empty_at(Coord::new(row, col)));
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_mark_and_get() {
        let mut board = Board::new(3);
        board.mark(Coord::new(1, 2), 'X').unwrap();
        assert_eq!(board.get(Coord::new(1, 2)), Some(Cell::Occupied('X')));
        assert!(!board.is_empty_at(Coord::new(1, 2)));
    }

    #[test]
    fn test_mark_out_of_bounds() {
        let mut board = Board::new(3);
        let err = board.mark(Coord::new(3, 0), 'X').unwrap_err();
        assert!(matches!(err, crate::error::GameError::OutOfBounds { .. }));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new(3);
        assert_eq!(board.get(Coord::new(0, 3)), None);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        for row in 0..2 {
            for col in 0..2 {
                board.mark(Coord::new(row, col), 'X').unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_render_default_grid() {
        let mut board = Board::new(3);
        board.mark(Coord::new(0, 0), 'X').unwrap();
        board.mark(Coord::new(1, 1), 'O').unwrap();
        let expected = [
            "  X  |     |     ",
            "-----------------",
            "     |  O  |     ",
            "-----------------",
            "     |     |     ",
        ]
        .join("\n");
        assert_eq!(board.render(2), expected);
    }

    #[test]
    fn test_zero_size_board_is_inert() {
        let board = Board::new(0);
        assert!(board.is_full());
        assert_eq!(board.get(Coord::new(0, 0)), None);
        assert_eq!(board.render(2), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut board = Board::new(3);
        board.mark(Coord::new(2, 0), '#').unwrap();
        assert_eq!(board.render(2), board.render(2));
    }

    proptest! {
        #[test]
        fn prop_render_geometry(size in 1usize..6, padding in 0usize..4) {
            let board = Board::new(size);
            let rendered = board.render(padding);
            let lines: Vec<&str> = rendered.lines().collect();
            let expected_len = size * (2 * padding + 1) + (size - 1);

            prop_assert_eq!(lines.len(), 2 * size - 1);
            for line in lines {
                prop_assert_eq!(line.chars().count(), expected_len);
            }
        }
    }
}
