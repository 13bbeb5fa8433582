//! Properties the engine maintains across every operation.
//!
//! Each invariant can be checked on its own; together they are asserted in
//! debug builds after every move, undo and reset.

use super::Game;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod move_counts;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use move_counts::MoveCountsInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    MoveCountsInvariant,
);

/// Panics in debug builds if any engine invariant is broken.
#[instrument(skip(game))]
pub(crate) fn assert_invariants(game: &Game) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = EngineInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        panic!("Engine invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, PlayerId, PlayerType};

    fn started() -> Game {
        let mut game = Game::new(4, 4);
        game.add_player("Red", "Red", PlayerType::Human).unwrap();
        game.add_player("Blue", "Blue", PlayerType::Human).unwrap();
        game.start_game().unwrap();
        game
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&started()).is_ok());
        assert!(EngineInvariants::check_all(&Game::new(3, 3)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_undo() {
        let mut game = started();
        game.make_move(Node::new(0, 0), Node::new(1, 0)).unwrap();
        game.make_move(Node::new(0, 1), Node::new(0, 2)).unwrap();
        game.make_move(Node::new(3, 3), Node::new(2, 3)).unwrap();
        game.undo_last_move().unwrap();
        game.undo_last_move().unwrap();
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = started();
        game.make_move(Node::new(0, 0), Node::new(1, 0)).unwrap();

        // A bridge with no history entry behind it.
        game.grid
            .place_edge(Node::new(3, 0), Node::new(3, 1), PlayerId::Two)
            .unwrap();

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, HistoryConsistentInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&started()).is_ok());
    }
}
