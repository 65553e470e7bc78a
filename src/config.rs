//! Immutable game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Default names the computer opponent may pick from.
pub const DEFAULT_NAME_POOL: [&str; 6] = ["Hal", "Marvin", "Robbie", "Data", "Gort", "Bender"];

/// Default symbols the computer opponent may pick from.
pub const DEFAULT_SYMBOL_POOL: [char; 6] = ['#', '@', '&', '%', '*', '+'];

/// Invalid configuration rejected at construction.
#[derive(Debug, Clone, Display, Error)]
pub enum ConfigError {
    /// Board size must be at least 1.
    #[display("board size must be at least 1")]
    ZeroSize,
    /// Threshold must fit on the board.
    #[display("win threshold {threshold} must be between 1 and the board size {size}")]
    BadThreshold {
        /// Requested threshold.
        threshold: usize,
        /// Board size it must fit within.
        size: usize,
    },
}

/// Tunables for a game session, fixed once the session starts.
///
/// Passed explicitly to the board, the computer identity draw, and the win
/// detector rather than living in globals.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N.
    size: usize,
    /// Consecutive same-symbol run length required to win.
    threshold: usize,
    /// Spaces on each side of a cell glyph when rendering.
    padding: usize,
    /// Candidate names for computer players.
    name_pool: Vec<String>,
    /// Candidate symbols for computer players.
    symbol_pool: Vec<char>,
}

impl GameConfig {
    /// Creates a configuration with the default computer identity pools.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `size` is zero or `threshold` is zero or
    /// larger than `size`.
    pub fn new(size: usize, threshold: usize, padding: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if threshold == 0 || threshold > size {
            return Err(ConfigError::BadThreshold { threshold, size });
        }
        Ok(Self {
            size,
            threshold,
            padding,
            name_pool: DEFAULT_NAME_POOL.iter().map(|s| s.to_string()).collect(),
            symbol_pool: DEFAULT_SYMBOL_POOL.to_vec(),
        })
    }

    /// Replaces the computer identity pools.
    pub fn with_pools(mut self, names: Vec<String>, symbols: Vec<char>) -> Self {
        self.name_pool = names;
        self.symbol_pool = symbols;
        self
    }
}

impl Default for GameConfig {
    /// The canonical 3x3, three-in-a-row, padding-2 game.
    fn default() -> Self {
        Self {
            size: 3,
            threshold: 3,
            padding: 2,
            name_pool: DEFAULT_NAME_POOL.iter().map(|s| s.to_string()).collect(),
            symbol_pool: DEFAULT_SYMBOL_POOL.to_vec(),
        }
    }
}
