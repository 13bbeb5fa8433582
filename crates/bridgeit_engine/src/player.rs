//! Player records.

use super::{Goal, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who is sitting in a seat.
///
/// Recorded for display only; the engine treats both kinds the same.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerType {
    /// Moves typed in by a person.
    #[default]
    Human,
    /// Moves chosen by a program.
    Ai,
}

/// A registered player and their move counter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Seat, fixed for the match.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Color label.
    color: String,
    /// Human or program.
    player_type: PlayerType,
    /// Bridges this player currently has on the board.
    moves_made: u32,
}

impl Player {
    pub(crate) fn new(
        id: PlayerId,
        name: impl Into<String>,
        color: impl Into<String>,
        player_type: PlayerType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            player_type,
            moves_made: 0,
        }
    }

    /// The sides this player must connect.
    pub fn goal(&self) -> Goal {
        self.id.goal()
    }

    pub(crate) fn record_move(&mut self) {
        self.moves_made += 1;
    }

    pub(crate) fn revert_move(&mut self) {
        self.moves_made = self.moves_made.saturating_sub(1);
    }

    pub(crate) fn reset_moves(&mut self) {
        self.moves_made = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - {}", self.id, self.name, self.color)
    }
}
