//! Scripted sessions through the console loop.

use bridgeit::{Console, GameEnd, GameSettings};
use std::io::Cursor;

fn settings() -> GameSettings {
    GameSettings::default()
        .with_board(3, 3)
        .with_names("Ann", "Bo")
}

fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn text(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_player_one_wins_in_three_moves() {
    let mut game = settings().new_game().unwrap();
    let mut session = console("0,0 1,0\n0,2-1,2\n(1,0)-(2,0)\n");

    let end = session.play(&mut game).unwrap();
    assert_eq!(end, GameEnd::Won);
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ann"));

    let out = text(session);
    assert!(out.contains("Bridge It Game - 3x3 Board"));
    assert!(out.contains("Ann's turn (Red)"));
    assert!(out.contains("✅ Ann placed bridge: (0,0) → (1,0)"));
    assert!(out.contains("✅ Bo placed bridge: (0,2) → (1,2)"));
    assert!(out.contains("🎉 GAME OVER! 🎉"));
    assert!(out.contains("Winner: Ann (Red)"));
    assert!(out.contains("Total moves: 3"));
}

#[test]
fn test_rejections_leave_turn_unchanged() {
    let mut game = settings().new_game().unwrap();
    let mut session = console("0,0 1,1\n0,2 0,3\nhello\nundo\n0,0 0,1\n0,1 0,0\nquit\n");

    let end = session.play(&mut game).unwrap();
    assert_eq!(end, GameEnd::Quit);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Bo"));

    let out = text(session);
    assert!(out.contains("❌ Nodes must be adjacent (horizontally or vertically)."));
    assert!(out.contains("❌ Nodes must be within board bounds (0-2, 0-2)."));
    assert!(out.contains("❌ Invalid move format. Type 'help' for examples."));
    assert!(out.contains("❌ No moves to undo."));
    assert!(out.contains("❌ Invalid move. That position is already occupied."));
    assert!(out.contains("Thanks for playing Bridge It! 👋"));
}

#[test]
fn test_undo_info_and_reset() {
    let mut game = settings().new_game().unwrap();
    let script = "0,0 0,1\nu\n1,1 2,1\ninfo\nreset\nn\nr\nyes\ni\nhelp\nq\n";
    let mut session = console(script);

    assert_eq!(session.play(&mut game).unwrap(), GameEnd::Quit);
    assert!(game.history().is_empty());

    let out = text(session);
    assert!(out.contains("✅ Last move undone."));
    assert!(out.contains("📊 Game Information:"));
    assert!(out.contains("State: playing\nMoves made: 1\nBoard size: 3x3"));
    assert!(out.contains("  Ann: 1 moves - Connect Top-Bottom"));
    assert_eq!(out.matches("🔄 Game reset!").count(), 1);
    assert!(out.contains("Moves made: 0"));
    assert!(out.contains("MOVE INPUT FORMATS:"));
}

#[test]
fn test_end_of_input_ends_session() {
    let mut session = console("0,0 0,1\n");
    session.run(&settings()).unwrap();

    let out = text(session);
    assert!(out.contains("🎮 Starting 3x3 Bridge It Game!"));
    assert!(out.contains("Players: Ann (Red ═══) vs Bo (Blue ───)"));
    assert!(out.contains("Bo's turn (Blue)"));
}

#[test]
fn test_play_again_starts_fresh_game() {
    let win = "0,0 1,0\n0,2 1,2\n1,0 2,0\n";
    let mut session = console(&format!("{win}y\n{win}n\n"));
    session.run(&settings()).unwrap();

    let out = text(session);
    assert_eq!(out.matches("🎮 Starting 3x3 Bridge It Game!").count(), 2);
    assert_eq!(out.matches("🎉 GAME OVER! 🎉").count(), 2);
    assert_eq!(out.matches("Would you like to play again? (y/N): ").count(), 2);
}
