//! Kinarow console binary.

use anyhow::Result;
use clap::Parser;
use kinarow::{Cli, Console, Game, GameConfig};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.size, cli.threshold, cli.padding)?;
    info!(
        size = cli.size,
        threshold = cli.threshold,
        "starting kinarow"
    );

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let mut rng = rand::thread_rng();

    let roster = console.setup_roster(&config, &mut rng, cli.computer)?;
    let mut game = Game::new(config, roster);
    let outcome = console.run(&mut game, &mut rng)?;

    info!(?outcome, moves = game.log().len(), "session ended");
    Ok(())
}
