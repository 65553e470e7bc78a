//! Console surface: setup prompts, the session loop, and announcements.
//!
//! The only place with terminal I/O. Generic over the underlying streams so
//! every prompt sequence can be tested with in-memory buffers.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, Outcome};
use crate::players::{
    HumanSource, Player, PlayerKind, RandomSource, Roster, random_identity,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Interactive console wrapping a prompt/read stream pair.
///
/// Doubles as the move source for human players: hot-seat games share the
/// one terminal, so every human turn prompts through the same streams.
#[derive(Debug)]
pub struct Console<R: BufRead, W: Write> {
    io: HumanSource<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: HumanSource::new(input, output),
        }
    }

    /// Prints a line.
    pub fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.io.say(text)
    }

    /// Consumes the console, returning the output stream. Used by tests to
    /// inspect everything that was printed.
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        Ok(self.io.prompt_line(prompt)?.trim().to_string())
    }

    /// Prompts for one human player's name and symbol.
    ///
    /// Reprompts on an empty name, a multi-character symbol, or a collision
    /// with any earlier player. Only a dead stream errors out.
    pub fn fetch_player(
        &mut self,
        number: usize,
        taken_names: &[String],
        taken_symbols: &[char],
    ) -> Result<Player, GameError> {
        let name = loop {
            let name = self.ask(&format!("What's player {number}'s name? "))?;
            if name.is_empty() {
                self.say("A name cannot be empty.")?;
                continue;
            }
            if taken_names.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
                let err = GameError::DuplicateIdentity {
                    what: "name",
                    value: name,
                };
                self.say(&format!("Whoops! {err}."))?;
                continue;
            }
            break name;
        };

        let symbol = loop {
            let text = self.ask(&format!("What's player {number}'s symbol? "))?;
            let mut chars = text.chars();
            let Some(symbol) = chars.next() else {
                self.say("A symbol must be a single character.")?;
                continue;
            };
            if chars.next().is_some() {
                self.say("A symbol must be a single character.")?;
                continue;
            }
            if taken_symbols.contains(&symbol) {
                let err = GameError::DuplicateIdentity {
                    what: "symbol",
                    value: symbol.to_string(),
                };
                self.say(&format!("Whoops! {err}."))?;
                continue;
            }
            break symbol;
        };

        info!(%name, %symbol, "human player registered");
        Ok(Player::new(name, symbol, PlayerKind::Human))
    }

    /// Asks whether the opponent should be the computer, reprompting until
    /// the answer is `y` or `n`.
    pub fn wants_computer(&mut self) -> Result<bool, GameError> {
        loop {
            let answer = self.ask("Do you want a computer opponent? y/n ")?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Runs player setup: first human, then either a computer opponent
    /// drawn from the config pools or a second human.
    ///
    /// # Errors
    ///
    /// `PoolExhausted` if the computer identity pools have no unused
    /// candidate left; `Io` if the console stream dies.
    pub fn setup_roster<G: Rng>(
        &mut self,
        config: &GameConfig,
        rng: &mut G,
        force_computer: bool,
    ) -> Result<Roster, GameError> {
        let first = self.fetch_player(1, &[], &[])?;
        let taken_names = [first.name().clone()];
        let taken_symbols = [*first.symbol()];

        let second = if force_computer || self.wants_computer()? {
            let opponent = random_identity(rng, config, &taken_names, &taken_symbols)?;
            self.say(&format!(
                "You're playing against {} ({}).",
                opponent.name(),
                opponent.symbol()
            ))?;
            opponent
        } else {
            self.fetch_player(2, &taken_names, &taken_symbols)?
        };

        Roster::new(vec![first, second])
    }

    /// Plays the session to completion: rotates turns, prints the board
    /// after every committed move, and announces the result.
    ///
    /// A mid-game fatal stream failure is reported as `Outcome::Abandoned`
    /// rather than an error; setup-level stream failures still error.
    pub fn run<G: Rng>(&mut self, game: &mut Game, rng: G) -> Result<Outcome, GameError> {
        let mut computer = RandomSource::new(rng);

        loop {
            let player = game.current_player().clone();
            self.say(&format!("{} ({}) to move.", player.name(), player.symbol()))?;

            let turn = match player.kind() {
                PlayerKind::Human => game.play_turn(&mut self.io),
                PlayerKind::Computer => game.play_turn(&mut computer),
            };

            let outcome = match turn {
                Ok(outcome) => outcome,
                Err(err) if *game.outcome() == Outcome::Abandoned => {
                    warn!(%err, "session abandoned");
                    let _ = self.say("Game abandoned.");
                    return Ok(Outcome::Abandoned);
                }
                Err(err) => return Err(err),
            };

            self.say(&game.render())?;
            match outcome {
                Outcome::InProgress => {}
                Outcome::WonBy(_) => {
                    let winner = game
                        .winner()
                        .map(|p| p.name().clone())
                        .unwrap_or_default();
                    self.say(&format!("{winner} won!"))?;
                    return Ok(outcome);
                }
                Outcome::Draw => {
                    self.say("The board is full with no winner. It's a draw!")?;
                    return Ok(outcome);
                }
                Outcome::Abandoned => return Ok(outcome),
            }
        }
    }
}
