//! The match engine: registration, turns, moves, win detection and undo.

use super::invariants::assert_invariants;
use super::rules::has_winning_path;
use super::{
    Edge, EdgeGrid, GameError, GameInfo, Move, MoveOutcome, Node, Phase, Player, PlayerId,
    PlayerType,
};
use tracing::{debug, info, instrument, warn};

/// Bridge-it game engine.
///
/// Owns the board, both players and the move history. Every operation
/// either succeeds completely or returns an error and leaves the game
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) grid: EdgeGrid,
    pub(crate) players: Vec<Player>,
    pub(crate) phase: Phase,
    pub(crate) current: PlayerId,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game in the setup phase with an empty `rows x cols` board.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: EdgeGrid::new(rows, cols),
            players: Vec::with_capacity(2),
            phase: Phase::Setup,
            current: PlayerId::One,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Registers the next player. The first call takes seat one, the
    /// second seat two.
    ///
    /// # Errors
    ///
    /// `RosterFull` if both seats are taken.
    #[instrument(skip(self))]
    pub fn add_player(
        &mut self,
        name: &str,
        color: &str,
        player_type: PlayerType,
    ) -> Result<&Player, GameError> {
        let id = match self.players.len() {
            0 => PlayerId::One,
            1 => PlayerId::Two,
            _ => {
                warn!("Game already has 2 players");
                return Err(GameError::RosterFull);
            }
        };
        info!(%id, "Registering player");
        self.players.push(Player::new(id, name, color, player_type));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Moves from setup to playing with player one to move.
    ///
    /// # Errors
    ///
    /// `WrongPhase` outside setup, `RosterIncomplete` without two players.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase {
                operation: "start the game",
                phase: self.phase,
            });
        }
        if self.players.len() != 2 {
            return Err(GameError::RosterIncomplete(self.players.len()));
        }
        self.phase = Phase::Playing;
        self.current = PlayerId::One;
        info!("Game started");
        Ok(())
    }

    /// Builds a bridge between `a` and `b` for the player whose turn it is.
    ///
    /// On a win the game finishes and the turn stays with the winner;
    /// otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// `WrongPhase` unless playing, `InvalidEdge` or `EdgeOccupied` from the
    /// board. Nothing changes on error.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, a: Node, b: Node) -> Result<MoveOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::WrongPhase {
                operation: "make a move",
                phase: self.phase,
            });
        }

        let mover = self.current;
        let edge = self.grid.place_edge(a, b, mover).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;
        self.history.push(Move::new(a, b, mover));
        if let Some(player) = self.player_mut(mover) {
            player.record_move();
        }
        debug!(%edge, "Bridge placed");

        let outcome = if has_winning_path(&self.grid, mover) {
            self.winner = Some(mover);
            self.phase = Phase::Finished;
            info!(winner = %mover, moves = self.history.len(), "Game won");
            MoveOutcome::Won(mover)
        } else {
            self.current = mover.opponent();
            MoveOutcome::Continue(self.current)
        };

        assert_invariants(self);
        Ok(outcome)
    }

    /// Takes back the most recent bridge and gives the turn back to the
    /// player who built it.
    ///
    /// # Errors
    ///
    /// `EmptyHistory` if there is nothing to undo, `WrongPhase` once the
    /// game is finished: a winning move is final.
    #[instrument(skip(self), fields(phase = %self.phase, history = self.history.len()))]
    pub fn undo_last_move(&mut self) -> Result<Move, GameError> {
        let Some(last) = self.history.last().copied() else {
            return Err(GameError::EmptyHistory);
        };
        if self.phase == Phase::Finished {
            return Err(GameError::WrongPhase {
                operation: "undo",
                phase: self.phase,
            });
        }

        self.grid.clear_edge(last.a, last.b)?;
        self.history.pop();
        if let Some(player) = self.player_mut(last.player) {
            player.revert_move();
        }
        self.current = last.player;
        debug!(undone = %last, "Move undone");

        assert_invariants(self);
        Ok(last)
    }

    /// Starts over on a fresh board of the same size, keeping the players.
    ///
    /// Lands in playing if both players are registered, otherwise in setup.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.grid = EdgeGrid::new(self.grid.rows(), self.grid.cols());
        self.history.clear();
        self.winner = None;
        self.current = PlayerId::One;
        for player in &mut self.players {
            player.reset_moves();
        }
        self.phase = if self.players.len() == 2 {
            Phase::Playing
        } else {
            Phase::Setup
        };
        info!(phase = %self.phase, "Game reset");
        assert_invariants(self);
    }

    /// True if `a`-`b` is an empty edge of the board.
    pub fn is_valid_move(&self, a: Node, b: Node) -> bool {
        self.grid.is_valid_move(a, b)
    }

    /// Every edge still free.
    pub fn available_moves(&self) -> Vec<Edge> {
        self.grid.empty_edges()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose turn it is (or was, once finished).
    pub fn current_turn(&self) -> PlayerId {
        self.current
    }

    /// The player to move, only while playing.
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.player(self.current)
    }

    /// Winning player, once finished.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Registered player in a seat.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| *p.id() == id)
    }

    /// All registered players, seat one first.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Moves on the board, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The board.
    pub fn grid(&self) -> &EdgeGrid {
        &self.grid
    }

    /// Number of node rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of node columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Snapshot of the game for display or serialisation.
    #[instrument(skip(self))]
    pub fn info(&self) -> GameInfo {
        GameInfo::from_game(self)
    }

    /// The board with a header naming the players, their goals and whose
    /// turn it is.
    pub fn display_board(&self) -> String {
        let mut lines = vec![
            format!("Bridge It Game - {}x{} Board", self.rows(), self.cols()),
            "=".repeat(40),
        ];

        let to_move = self.current_player().map(|p| *p.id());
        for player in &self.players {
            let (symbol, goal) = match player.id() {
                PlayerId::One => ("═══", "Top↔Bottom"),
                PlayerId::Two => ("───", "Left↔Right"),
            };
            let marker = if to_move == Some(*player.id()) { "→" } else { " " };
            lines.push(format!(
                "{} {} ({}) {} Goal: {}",
                marker,
                player.name(),
                player.color(),
                symbol,
                goal
            ));
        }
        lines.push(String::new());

        if let Some(winner) = self.winner() {
            lines.push(format!("Winner: {} ({})!", winner.name(), winner.color()));
        } else if let Some(current) = self.current_player() {
            lines.push(format!("Current turn: {} ({})", current.name(), current.color()));
        }
        lines.push(String::new());

        format!("{}\n{}", lines.join("\n"), self.grid)
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| *p.id() == id)
    }
}
