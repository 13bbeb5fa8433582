//! Serialisable snapshot of a game for front ends.

use super::{Game, Phase, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Per-player part of a [`GameInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Seat.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Color label.
    color: String,
    /// Bridges currently on the board.
    moves: u32,
    /// Goal description.
    goal: String,
}

/// What a front end needs to describe the state of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameInfo {
    /// Current phase.
    state: Phase,
    /// Name of the player to move, while playing.
    current_player: Option<String>,
    /// Seat of the player to move, while playing.
    current_player_id: Option<PlayerId>,
    /// Name of the winner, once finished.
    winner: Option<String>,
    /// Bridges on the board.
    moves_made: usize,
    /// Board size as `RxC`.
    board_size: String,
    /// Registered players, seat one first.
    players: Vec<PlayerInfo>,
}

impl GameInfo {
    pub(crate) fn from_game(game: &Game) -> Self {
        let current = game.current_player();
        Self {
            state: game.phase(),
            current_player: current.map(|p| p.name().clone()),
            current_player_id: current.map(|p| *p.id()),
            winner: game.winner().map(|p| p.name().clone()),
            moves_made: game.history().len(),
            board_size: format!("{}x{}", game.rows(), game.cols()),
            players: game
                .players()
                .iter()
                .map(|p| PlayerInfo {
                    id: *p.id(),
                    name: p.name().clone(),
                    color: p.color().clone(),
                    moves: *p.moves_made(),
                    goal: p.goal().label().to_string(),
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for GameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "Moves made: {}", self.moves_made)?;
        write!(f, "Board size: {}", self.board_size)?;
        for player in &self.players {
            write!(
                f,
                "\n  {}: {} moves - {}",
                player.name, player.moves, player.goal
            )?;
        }
        Ok(())
    }
}
