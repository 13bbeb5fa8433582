//! Move counter invariant: each player's counter matches their bridges.

use super::super::Game;
use super::Invariant;

/// Invariant: every player's move counter equals the number of history
/// entries made by that player.
pub struct MoveCountsInvariant;

impl Invariant<Game> for MoveCountsInvariant {
    fn holds(game: &Game) -> bool {
        game.players().iter().all(|player| {
            let made = game
                .history()
                .iter()
                .filter(|mv| mv.player == *player.id())
                .count();
            *player.moves_made() as usize == made
        })
    }

    fn description() -> &'static str {
        "Player move counters match their history entries"
    }
}
