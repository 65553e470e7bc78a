//! The turn-by-turn game engine.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::moves::{self, MoveLog};
use crate::players::{MoveSource, Player, Roster};
use crate::rules::win;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More moves to come.
    InProgress,
    /// Won by the player at this roster index.
    WonBy(usize),
    /// Board exhausted with no winner.
    Draw,
    /// A move source failed fatally mid-game.
    Abandoned,
}

/// One game session: board, roster, move history, and outcome.
///
/// Created once per session and mutated turn-by-turn. The turn cycle is
/// `AwaitingMove -> CheckingWin -> AwaitingMove` for the next player, until
/// a win, a draw, or abandonment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    roster: Roster,
    log: MoveLog,
    outcome: Outcome,
}

impl Game {
    /// Starts a session; the roster's player at index 0 moves first.
    pub fn new(config: GameConfig, roster: Roster) -> Self {
        let board = Board::new(*config.size());
        info!(
            size = config.size(),
            threshold = config.threshold(),
            players = roster.players().len(),
            "game started"
        );
        Self {
            config,
            board,
            roster,
            log: MoveLog::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Accepted moves so far.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.roster.current()
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Outcome::WonBy(index) => self.roster.players().get(index),
            _ => None,
        }
    }

    /// The board rendered with the configured padding.
    pub fn render(&self) -> String {
        self.board.render(*self.config.padding())
    }

    /// Plays one full turn for the current player.
    ///
    /// Runs the commencement loop: asks `source` for a move until one
    /// parses, is in bounds, and targets an empty cell; every recoverable
    /// rejection goes back to the source and is retried. After the commit
    /// the mover's win is checked, then a full board means a draw,
    /// otherwise the turn rotates. Calling this on a finished game is a
    /// no-op returning the standing outcome.
    ///
    /// # Errors
    ///
    /// A non-recoverable source error (closed input stream) marks the game
    /// `Abandoned` and is passed through.
    #[instrument(skip(self, source), fields(player = %self.roster.current().name()))]
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<Outcome, GameError> {
        if self.outcome != Outcome::InProgress {
            return Ok(self.outcome);
        }
        let mover = self.roster.current_index();
        let symbol = *self.roster.current().symbol();

        loop {
            let attempt = source
                .next_move(&self.board)
                .and_then(|coord| {
                    moves::commit(&mut self.board, &mut self.log, coord, symbol).map(|()| coord)
                });
            match attempt {
                Ok(coord) => {
                    debug!(%coord, "turn committed");
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "move rejected");
                    source.notify_rejected(&err);
                }
                Err(err) => {
                    warn!(%err, "move source failed, abandoning game");
                    self.outcome = Outcome::Abandoned;
                    return Err(err);
                }
            }
        }

        if win::has_won(&self.board, symbol, *self.config.threshold()) {
            info!(winner = %self.roster.current().name(), "game won");
            self.outcome = Outcome::WonBy(mover);
        } else if self.board.is_full() {
            info!("board exhausted, draw");
            self.outcome = Outcome::Draw;
        } else {
            self.roster.advance();
        }
        Ok(self.outcome)
    }
}
