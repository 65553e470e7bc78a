//! Move parsing, validation, and recording.

use crate::board::{Board, Coord};
use crate::error::GameError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One accepted move, in commit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRecord {
    /// Where the mark was placed.
    pub coord: Coord,
    /// Whose symbol was placed.
    pub symbol: char,
}

/// Append-only history of accepted moves.
///
/// Kept for auditing and end-of-game review; the board is the sole source
/// of truth for occupancy (`is_occupied` never consults this log).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vec<MoveRecord>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All accepted moves, oldest first.
    pub fn entries(&self) -> &[MoveRecord] {
        &self.entries
    }

    /// Number of accepted moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first accepted move.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses raw move text into a 0-indexed coordinate.
///
/// Expects two whitespace-separated integers in `"<column> <row>"` order,
/// 1-indexed as the player sees the grid.
///
/// # Errors
///
/// `MalformedInput` if the text does not split into exactly two integer
/// tokens; `OutOfBounds` if either value falls outside `1..=size`.
pub fn parse_move(raw: &str, size: usize) -> Result<Coord, GameError> {
    let malformed = || GameError::MalformedInput {
        input: raw.trim().to_string(),
    };

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [col_text, row_text] = tokens.as_slice() else {
        return Err(malformed());
    };
    let col: i64 = col_text.parse().map_err(|_| malformed())?;
    let row: i64 = row_text.parse().map_err(|_| malformed())?;

    if col < 1 || row < 1 || col > size as i64 || row > size as i64 {
        return Err(GameError::OutOfBounds { col, row, size });
    }
    // Subtract one to account for indexing.
    Ok(Coord::new(row as usize - 1, col as usize - 1))
}

/// True if the cell is already claimed. The board is the single source of
/// truth; the move log is never consulted.
pub fn is_occupied(board: &Board, coord: Coord) -> bool {
    !board.is_empty_at(coord)
}

/// Records an accepted move: marks the board and appends to the log.
///
/// Atomic from the caller's perspective: on any error neither the board nor
/// the log has changed.
///
/// # Errors
///
/// `SpotOccupied` if the cell is already claimed; `OutOfBounds` if the
/// coordinate is off the grid.
pub fn commit(
    board: &mut Board,
    log: &mut MoveLog,
    coord: Coord,
    symbol: char,
) -> Result<(), GameError> {
    if board.get(coord).is_none() {
        return Err(GameError::OutOfBounds {
            col: coord.col as i64 + 1,
            row: coord.row as i64 + 1,
            size: board.size(),
        });
    }
    if is_occupied(board, coord) {
        return Err(GameError::SpotOccupied { coord });
    }
    board.mark(coord, symbol)?;
    log.entries.push(MoveRecord::new(coord, symbol));
    debug!(%coord, symbol = %symbol, turn = log.len(), "move committed");
    Ok(())
}
