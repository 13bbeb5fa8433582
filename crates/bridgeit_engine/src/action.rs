//! Move records and the error taxonomy of the engine.
//!
//! Moves are kept as first-class records so the history can be undone
//! and inspected.

use super::{Edge, Node, Phase, PlayerId};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A bridge placed by a player, as entered (not canonicalised).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// First node as given by the caller.
    pub a: Node,
    /// Second node as given by the caller.
    pub b: Node,
    /// Who built the bridge.
    pub player: PlayerId,
}

impl Move {
    /// The canonical edge this move claimed.
    pub fn edge(&self) -> Edge {
        Edge::new(self.a, self.b)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} → {}", self.player, self.a, self.b)
    }
}

/// Reasons an engine operation can be refused.
///
/// A refused operation never changes any state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The pair is not two adjacent in-bounds nodes.
    #[display("No edge between {} and {}", a, b)]
    InvalidEdge {
        /// First node given.
        a: Node,
        /// Second node given.
        b: Node,
    },

    /// Somebody already built on this edge.
    #[display("Edge {} is already occupied", _0)]
    EdgeOccupied(Edge),

    /// The operation is not allowed in the current phase.
    #[display("Cannot {} while the game is in the {} phase", operation, phase)]
    WrongPhase {
        /// Name of the refused operation.
        operation: &'static str,
        /// Phase at the time of the call.
        phase: Phase,
    },

    /// Both seats are already taken.
    #[display("Game already has 2 players")]
    RosterFull,

    /// The game needs two players to start.
    #[display("Need 2 players to start, have {}", _0)]
    RosterIncomplete(usize),

    /// There is no move to undo.
    #[display("No moves to undo")]
    EmptyHistory,
}

impl std::error::Error for GameError {}
