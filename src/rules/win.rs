//! Win detection: streak-of-threshold along rows, columns, and diagonals.

use crate::board::{Board, Cell, Coord};
use tracing::instrument;

/// True once a run of `threshold` consecutive `true`s appears.
///
/// This is a streak check, not an all-true check: on a board larger than
/// the threshold a partial run along a route is enough.
pub fn enough_in_a_row(hits: impl IntoIterator<Item = bool>, threshold: usize) -> bool {
    let mut streak = 0;
    for hit in hits {
        if hit {
            streak += 1;
            if streak >= threshold {
                return true;
            }
        } else {
            streak = 0;
        }
    }
    false
}

/// All diagonal routes touching the top edge of an NxN board.
///
/// For every starting column `c`: the south-east run from `(0, c)` of
/// length `N - c`, and the south-west run from `(0, c)` of length `c + 1`.
/// That is `2N` routes in total, including both full corner-to-corner
/// diagonals and every shorter broken-corner sub-diagonal.
pub fn diagonal_routes(size: usize) -> Vec<Vec<Coord>> {
    let mut routes = Vec::with_capacity(2 * size);
    for start_col in 0..size {
        routes.push(
            (0..size - start_col)
                .map(|step| Coord::new(step, start_col + step))
                .collect(),
        );
        routes.push(
            (0..=start_col)
                .map(|step| Coord::new(step, start_col - step))
                .collect(),
        );
    }
    routes
}

/// Checks whether the given symbol has a winning streak anywhere on the
/// board. Read-only; evaluated from the mover's perspective only.
#[instrument(skip(board), level = "debug")]
pub fn has_won(board: &Board, symbol: char, threshold: usize) -> bool {
    let size = board.size();
    let owns = |coord: Coord| board.get(coord) == Some(Cell::Occupied(symbol));

    let any_row = (0..size).any(|row| {
        enough_in_a_row((0..size).map(|col| owns(Coord::new(row, col))), threshold)
    });
    if any_row {
        return true;
    }

    let any_col = (0..size).any(|col| {
        enough_in_a_row((0..size).map(|row| owns(Coord::new(row, col))), threshold)
    });
    if any_col {
        return true;
    }

    diagonal_routes(size)
        .into_iter()
        .any(|route| enough_in_a_row(route.into_iter().map(owns), threshold))
}
