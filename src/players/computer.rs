//! Random computer opponent: move generation and identity drawing.

use super::{MoveSource, Player, PlayerKind};
use crate::board::{Board, Coord};
use crate::config::GameConfig;
use crate::error::GameError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Move source that proposes uniformly random in-bounds coordinates.
///
/// It does not look at occupancy: proposing a taken cell is expected, comes
/// back as an ordinary `SpotOccupied` rejection, and is retried with a
/// fresh draw.
#[derive(Debug)]
pub struct RandomSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Creates a source over the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomSource<R> {
    fn next_move(&mut self, board: &Board) -> Result<Coord, GameError> {
        let size = board.size();
        let coord = Coord::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
        debug!(%coord, "computer proposes move");
        Ok(coord)
    }

    fn notify_rejected(&mut self, err: &GameError) {
        debug!(%err, "computer move rejected, redrawing");
    }
}

/// Draws a computer player identity uniformly from the config pools,
/// excluding every name and symbol already taken by earlier players.
///
/// # Errors
///
/// `PoolExhausted` if every candidate name or symbol is already taken.
pub fn random_identity<R: Rng>(
    rng: &mut R,
    config: &GameConfig,
    taken_names: &[String],
    taken_symbols: &[char],
) -> Result<Player, GameError> {
    let names: Vec<&String> = config
        .name_pool()
        .iter()
        .filter(|candidate| !taken_names.iter().any(|t| t.eq_ignore_ascii_case(candidate)))
        .collect();
    let name = names
        .choose(rng)
        .ok_or(GameError::PoolExhausted { what: "name" })?;

    let symbols: Vec<char> = config
        .symbol_pool()
        .iter()
        .copied()
        .filter(|candidate| !taken_symbols.contains(candidate))
        .collect();
    let symbol = symbols
        .choose(rng)
        .ok_or(GameError::PoolExhausted { what: "symbol" })?;

    debug!(name = %name, symbol = %symbol, "computer identity drawn");
    Ok(Player::new((*name).clone(), *symbol, PlayerKind::Computer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_moves_are_in_bounds() {
        let board = Board::new(3);
        let mut source = RandomSource::new(StdRng::seed_from_u64(7));
        for _ in 0..200 {
            let coord = source.next_move(&board).unwrap();
            assert!(coord.row < 3 && coord.col < 3);
        }
    }

    #[test]
    fn test_identity_avoids_all_earlier_players() {
        let config = GameConfig::default().with_pools(
            vec!["Hal".to_string(), "Marvin".to_string()],
            vec!['#', '@'],
        );
        let mut rng = StdRng::seed_from_u64(42);
        // Exclusions cover both earlier players, not just the latest one.
        let taken_names = ["hal".to_string()];
        let taken_symbols = ['@'];

        for _ in 0..50 {
            let player =
                random_identity(&mut rng, &config, &taken_names, &taken_symbols).unwrap();
            assert_eq!(player.name(), "Marvin");
            assert_eq!(*player.symbol(), '#');
            assert_eq!(*player.kind(), PlayerKind::Computer);
        }
    }

    #[test]
    fn test_exhausted_pool_errors() {
        let config =
            GameConfig::default().with_pools(vec!["Hal".to_string()], vec!['#']);
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_identity(&mut rng, &config, &["Hal".to_string()], &[]).unwrap_err();
        assert!(matches!(err, GameError::PoolExhausted { what: "name" }));

        let err = random_identity(&mut rng, &config, &[], &['#']).unwrap_err();
        assert!(matches!(err, GameError::PoolExhausted { what: "symbol" }));
    }
}
