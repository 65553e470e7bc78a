//! Command-line interface.

use clap::Parser;

/// Kinarow - console N-in-a-row tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "kinarow")]
#[command(about = "Play N-in-a-row tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size N (the grid is N x N)
    #[arg(short, long, default_value = "3")]
    pub size: usize,

    /// Consecutive marks needed to win (must not exceed the board size)
    #[arg(short, long, default_value = "3")]
    pub threshold: usize,

    /// Spaces on each side of a cell when printing the board
    #[arg(short, long, default_value = "2")]
    pub padding: usize,

    /// Play against the computer without being asked
    #[arg(short, long)]
    pub computer: bool,
}
