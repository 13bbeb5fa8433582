//! History consistency invariant: one history entry per bridge.

use super::super::Game;
use super::Invariant;

/// Invariant: history length equals the number of claimed edges, and every
/// history entry's edge is owned by its mover.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let grid = game.grid();
        game.history().len() == grid.claimed_count()
            && game.history().iter().all(|mv| {
                grid.state(mv.a, mv.b).and_then(|state| state.owner()) == Some(mv.player)
            })
    }

    fn description() -> &'static str {
        "History length matches number of claimed edges"
    }
}
