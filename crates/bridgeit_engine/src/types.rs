//! Core domain types for Bridge-it.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the two seats in a match.
///
/// Player one always connects top to bottom, player two always
/// connects left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum PlayerId {
    /// First player (moves first).
    One,
    /// Second player.
    Two,
}

impl PlayerId {
    /// Returns the opponent.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the 1-based seat number.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Maps a 1-based seat number back to an id.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The pair of sides this player has to join.
    pub fn goal(self) -> Goal {
        match self {
            PlayerId::One => Goal::TopToBottom,
            PlayerId::Two => Goal::LeftToRight,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Which two opposite sides of the board a player must connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// Row 0 to the last row.
    TopToBottom,
    /// Column 0 to the last column.
    LeftToRight,
}

impl Goal {
    /// Human readable description of the goal.
    pub fn label(self) -> &'static str {
        match self {
            Goal::TopToBottom => "Connect Top-Bottom",
            Goal::LeftToRight => "Connect Left-Right",
        }
    }

    /// Nodes on the side a path starts from.
    pub fn start_nodes(self, rows: usize, cols: usize) -> Vec<Node> {
        match self {
            Goal::TopToBottom if rows > 0 => (0..cols).map(|col| Node::new(0, col)).collect(),
            Goal::LeftToRight if cols > 0 => (0..rows).map(|row| Node::new(row, 0)).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `node` lies on the side a path must reach.
    pub fn is_target(self, node: Node, rows: usize, cols: usize) -> bool {
        match self {
            Goal::TopToBottom => rows > 0 && node.row == rows - 1 && node.col < cols,
            Goal::LeftToRight => cols > 0 && node.col == cols - 1 && node.row < rows,
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A grid intersection, addressed by row (downward) and column (rightward).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Node {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Node {
    /// Creates a node.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the two nodes differ by exactly one in exactly one coordinate.
    pub fn is_adjacent(self, other: Node) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Node {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// An unordered pair of nodes, stored smaller-first.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` are equal, so either orientation
/// addresses the same slot on the grid. Construction does not check
/// adjacency; only the grid knows which pairs are real edges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Edge {
    a: Node,
    b: Node,
}

impl Edge {
    /// Creates the canonical edge between two nodes.
    pub fn new(x: Node, y: Node) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// The smaller endpoint.
    pub fn a(&self) -> Node {
        self.a
    }

    /// The larger endpoint.
    pub fn b(&self) -> Node {
        self.b
    }

    /// Both endpoints, smaller first.
    pub fn nodes(&self) -> (Node, Node) {
        (self.a, self.b)
    }

    /// True if both endpoints share a row.
    pub fn is_horizontal(&self) -> bool {
        self.a.row == self.b.row
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Occupancy of a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeState {
    /// Nobody has built here yet.
    #[default]
    Empty,
    /// A bridge owned by a player.
    Claimed(PlayerId),
}

impl EdgeState {
    /// True if the edge is free.
    pub fn is_empty(self) -> bool {
        matches!(self, EdgeState::Empty)
    }

    /// Owner of the bridge, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            EdgeState::Empty => None,
            EdgeState::Claimed(player) => Some(player),
        }
    }
}
