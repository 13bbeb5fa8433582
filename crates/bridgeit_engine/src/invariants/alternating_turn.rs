//! Alternating turn invariant: seat one, seat two, seat one, ...

use super::super::{Game, Phase, PlayerId};
use super::Invariant;

/// Invariant: history strictly alternates starting with seat one, and while
/// playing the seat to move is the one the history length implies.
///
/// Undo pops from the end, so the pattern survives any run of undos.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mv| mv.player != PlayerId::One) {
            return false;
        }
        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match game.phase() {
            Phase::Playing => {
                let expected = if history.len() % 2 == 0 {
                    PlayerId::One
                } else {
                    PlayerId::Two
                };
                game.current_turn() == expected
            }
            // The winner keeps the turn.
            Phase::Finished => history.last().map(|mv| mv.player) == Some(game.current_turn()),
            Phase::Setup => history.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...)"
    }
}
