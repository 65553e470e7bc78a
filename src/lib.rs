//! Kinarow - console N-in-a-row tic-tac-toe.
//!
//! The engine plays "threshold-in-a-row on an NxN board": a move wins as
//! soon as the mover has `threshold` consecutive marks along any row,
//! column, or diagonal (including the broken-corner diagonals touching the
//! top edge). The canonical game is 3x3 with threshold 3.
//!
//! # Architecture
//!
//! - **board**: grid state and text rendering
//! - **moves**: input parsing, occupancy validation, atomic move recording
//! - **rules**: win detection (streak scan over all routes)
//! - **players**: identities, turn rotation, and the `MoveSource` seam
//! - **game**: the turn state machine
//! - **console**: the only module with terminal I/O
//!
//! # Example
//!
//! ```
//! use kinarow::{Game, GameConfig, Player, PlayerKind, Roster};
//!
//! # fn example() -> anyhow::Result<()> {
//! let roster = Roster::new(vec![
//!     Player::new("Ann".to_string(), 'X', PlayerKind::Human),
//!     Player::new("Ben".to_string(), 'O', PlayerKind::Human),
//! ])?;
//! let game = Game::new(GameConfig::default(), roster);
//! assert_eq!(game.current_player().name(), "Ann");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod moves;
pub mod players;
pub mod rules;

pub use board::{Board, Cell, Coord};
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::Console;
pub use error::GameError;
pub use game::{Game, Outcome};
pub use moves::{MoveLog, MoveRecord};
pub use players::{HumanSource, MoveSource, Player, PlayerKind, RandomSource, Roster};
