//! Error types for the game engine and console surface.

use crate::board::Coord;
use derive_more::{Display, Error};

/// Everything that can go wrong during setup or play.
///
/// The first four variants are recoverable: the actor that produced them is
/// simply asked again. `PoolExhausted` and `Io` end the session.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Move text did not parse into two integers.
    #[display("could not read '{input}': expected two numbers like '2 3'")]
    MalformedInput {
        /// The rejected raw input.
        input: String,
    },

    /// A coordinate landed outside the grid. Values are as the user typed
    /// them (1-indexed).
    #[display("spot {col} {row} is off the board (columns and rows run 1 to {size})")]
    OutOfBounds {
        /// Column as entered.
        col: i64,
        /// Row as entered.
        row: i64,
        /// Board size.
        size: usize,
    },

    /// The targeted cell is already taken.
    #[display("spot {} {} is already taken", coord.col + 1, coord.row + 1)]
    SpotOccupied {
        /// The occupied cell (0-indexed).
        coord: Coord,
    },

    /// A requested player name or symbol collides with an existing player.
    #[display("that {what} ('{value}') is already taken")]
    DuplicateIdentity {
        /// Which identity field collided ("name" or "symbol").
        what: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A game needs at least two participants.
    #[display("a game needs at least two players, got {count}")]
    NotEnoughPlayers {
        /// How many players were supplied.
        count: usize,
    },

    /// No candidate left in a computer identity pool after exclusions.
    #[display("no unused {what} left in the computer player pool")]
    PoolExhausted {
        /// Which pool ran dry ("name" or "symbol").
        what: &'static str,
    },

    /// The input or output stream failed (closed stdin, broken pipe).
    #[display("console stream failed: {_0}")]
    Io(#[error(source)] std::io::Error),
}

impl GameError {
    /// True for rejections that should reprompt the same actor rather than
    /// end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::MalformedInput { .. }
                | GameError::OutOfBounds { .. }
                | GameError::SpotOccupied { .. }
                | GameError::DuplicateIdentity { .. }
        )
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_recoverable_split() {
        assert!(
            GameError::MalformedInput {
                input: "x".to_string()
            }
            .is_recoverable()
        );
        assert!(
            GameError::SpotOccupied {
                coord: Coord::new(0, 0)
            }
            .is_recoverable()
        );
        assert!(!GameError::PoolExhausted { what: "name" }.is_recoverable());
        assert!(
            !GameError::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))
                .is_recoverable()
        );
    }

    #[test]
    fn test_occupied_message_is_one_indexed() {
        let err = GameError::SpotOccupied {
            coord: Coord::new(0, 1),
        };
        assert_eq!(err.to_string(), "spot 2 1 is already taken");
    }
}
