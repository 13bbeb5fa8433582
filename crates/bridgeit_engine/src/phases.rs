//! Game phases and move outcomes.

use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Lifecycle of a match.
///
/// `Setup` until both players are registered and the game is started,
/// `Playing` while moves are accepted, `Finished` once a path is complete.
/// Only a reset leaves `Finished`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Waiting for players.
    #[default]
    Setup,
    /// Moves are being played.
    Playing,
    /// Someone has connected their sides.
    Finished,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No winner yet; the contained player moves next.
    Continue(PlayerId),
    /// The mover completed a path and won.
    Won(PlayerId),
}

impl MoveOutcome {
    /// Returns the winner if the move ended the game.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MoveOutcome::Won(player) => Some(*player),
            MoveOutcome::Continue(_) => None,
        }
    }

    /// True if the move ended the game.
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Won(_))
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Continue(next) => write!(f, "{} to move", next),
            MoveOutcome::Won(player) => write!(f, "{} wins", player),
        }
    }
}
