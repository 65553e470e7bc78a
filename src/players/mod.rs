//! Player identities, turn rotation, and the move-source seam.

mod computer;
mod human;

pub use computer::{RandomSource, random_identity};
pub use human::HumanSource;

use crate::board::{Board, Coord};
use crate::error::GameError;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// How a player's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Moves generated at random.
    Computer,
}

/// A participant: display name, board symbol, and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name, unique within a game.
    name: String,
    /// Single-character board marker, unique within a game.
    symbol: char,
    /// Human or computer.
    kind: PlayerKind,
}

/// Capability seam for producing moves.
///
/// The engine's commencement loop calls `next_move` until a legal move
/// arrives, reporting each rejection back through `notify_rejected` so the
/// actor that produced the bad move sees the reason.
pub trait MoveSource {
    /// Produces the next move attempt as a 0-indexed coordinate.
    ///
    /// # Errors
    ///
    /// Recoverable errors (`MalformedInput`, `OutOfBounds`) make the engine
    /// retry; anything else abandons the game.
    fn next_move(&mut self, board: &Board) -> Result<Coord, GameError>;

    /// Called when the engine rejects the previous attempt.
    fn notify_rejected(&mut self, _err: &GameError) {}
}

/// Ordered, fixed set of participants plus whose turn it is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    current: usize,
}

impl Roster {
    /// Creates a roster; the player at index 0 moves first.
    ///
    /// # Errors
    ///
    /// `NotEnoughPlayers` for fewer than two players; `DuplicateIdentity`
    /// if any two players share a name (case-insensitively) or a symbol.
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        for (i, player) in players.iter().enumerate() {
            for earlier in &players[..i] {
                if earlier.name().eq_ignore_ascii_case(player.name()) {
                    return Err(GameError::DuplicateIdentity {
                        what: "name",
                        value: player.name().clone(),
                    });
                }
                if earlier.symbol() == player.symbol() {
                    return Err(GameError::DuplicateIdentity {
                        what: "symbol",
                        value: player.symbol().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            players,
            current: 0,
        })
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Rotates to the next player, wrapping to index 0 after the last.
    /// Pure rotation: no skipping, no elimination.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}
