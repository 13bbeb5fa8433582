//! Bridge-it game engine.
//!
//! Two players take turns building bridges between neighbouring nodes of a
//! rectangular grid. Player one wins by joining the top row to the bottom
//! row with their own bridges, player two by joining the left column to the
//! right column.
//!
//! # Architecture
//!
//! - **EdgeGrid**: every placeable edge and who owns it
//! - **Rules**: path detection over one player's bridges
//! - **Game**: registration, turn order, moves, win detection, undo, reset
//! - **Invariants**: properties asserted after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use bridgeit_engine::{Game, MoveOutcome, Node, PlayerId, PlayerType};
//!
//! let mut game = Game::new(3, 3);
//! game.add_player("Red", "Red", PlayerType::Human).unwrap();
//! game.add_player("Blue", "Blue", PlayerType::Human).unwrap();
//! game.start_game().unwrap();
//!
//! let outcome = game.make_move(Node::new(0, 0), Node::new(1, 0)).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue(PlayerId::Two));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod grid;
mod info;
pub mod invariants;
mod phases;
mod player;
pub mod rules;
mod types;

pub use action::{GameError, Move};
pub use game::Game;
pub use grid::EdgeGrid;
pub use info::{GameInfo, PlayerInfo};
pub use phases::{MoveOutcome, Phase};
pub use player::{Player, PlayerType};
pub use rules::{find_winning_path, has_winning_path};
pub use types::{Edge, EdgeState, Goal, Node, PlayerId};
