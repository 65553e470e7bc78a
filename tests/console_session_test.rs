//! End-to-end console sessions driven by scripted input.

use kinarow::{Console, Game, GameConfig, Outcome, Player, PlayerKind, Roster};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

#[test]
fn test_two_humans_diagonal_win() {
    let script = "Ann\nX\nn\nBen\nO\n1 1\n1 2\n2 2\n1 3\n3 3\n";
    let config = GameConfig::default();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let roster = console.setup_roster(&config, &mut rng, false).unwrap();
    let mut game = Game::new(config, roster);
    let outcome = console.run(&mut game, &mut rng).unwrap();

    assert_eq!(outcome, Outcome::WonBy(0));
    assert_eq!(game.winner().unwrap().name(), "Ann");
    assert_eq!(game.log().len(), 5);

    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("Ann won!"));
    // Board printed after each of the five committed moves.
    assert_eq!(printed.matches("-----------------").count(), 10);
}

#[test]
fn test_occupied_spot_reprompts_mid_session() {
    // Ben tries Ann's opening cell before playing a legal one.
    let script = "Ann\nX\nn\nBen\nO\n1 1\n1 1\n1 2\n2 2\n1 3\n3 3\n";
    let config = GameConfig::default();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let roster = console.setup_roster(&config, &mut rng, false).unwrap();
    let mut game = Game::new(config, roster);
    let outcome = console.run(&mut game, &mut rng).unwrap();

    assert_eq!(outcome, Outcome::WonBy(0));
    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("already taken"));
}

#[test]
fn test_two_humans_draw() {
    let script = "Ann\nX\nn\nBen\nO\n\
                  1 1\n2 1\n3 1\n1 2\n2 2\n1 3\n3 2\n3 3\n2 3\n";
    let config = GameConfig::default();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let roster = console.setup_roster(&config, &mut rng, false).unwrap();
    let mut game = Game::new(config, roster);
    let outcome = console.run(&mut game, &mut rng).unwrap();

    assert_eq!(outcome, Outcome::Draw);
    assert!(game.board().is_full());
    assert!(game.winner().is_none());

    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("draw"));
}

#[test]
fn test_input_ending_mid_game_abandons() {
    let script = "Ann\nX\nn\nBen\nO\n1 1\n";
    let config = GameConfig::default();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let roster = console.setup_roster(&config, &mut rng, false).unwrap();
    let mut game = Game::new(config, roster);
    let outcome = console.run(&mut game, &mut rng).unwrap();

    assert_eq!(outcome, Outcome::Abandoned);
    assert_eq!(*game.outcome(), Outcome::Abandoned);
    assert_eq!(game.log().len(), 1);

    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("Game abandoned."));
}

#[test]
fn test_computer_versus_computer_terminates() {
    // No human input at all: both players draw random legal-looking
    // coordinates until someone wins or the board fills.
    let roster = Roster::new(vec![
        Player::new("Hal".to_string(), '#', PlayerKind::Computer),
        Player::new("Marvin".to_string(), '@', PlayerKind::Computer),
    ])
    .unwrap();
    let mut game = Game::new(GameConfig::default(), roster);
    let mut console = Console::new(Cursor::new(String::new()), Vec::new());

    let outcome = console
        .run(&mut game, StdRng::seed_from_u64(9))
        .unwrap();

    assert_ne!(outcome, Outcome::InProgress);
    assert_ne!(outcome, Outcome::Abandoned);
    // A 3x3 threshold-3 game takes at least 5 and at most 9 moves.
    assert!((5..=9).contains(&game.log().len()));
}

#[test]
fn test_forced_computer_skips_question() {
    // No "y/n" line in the script: --computer style setup goes straight to
    // the opponent draw.
    let config = GameConfig::default();
    let mut console = Console::new(Cursor::new("Ann\nX\n".to_string()), Vec::new());
    let mut rng = StdRng::seed_from_u64(5);

    let roster = console.setup_roster(&config, &mut rng, true).unwrap();
    assert_eq!(*roster.players()[1].kind(), PlayerKind::Computer);

    let printed = String::from_utf8(console.into_output()).unwrap();
    assert!(printed.contains("You're playing against"));
}
