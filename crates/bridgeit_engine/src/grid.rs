//! Edge storage for a rectangular board of nodes.

use super::{Edge, EdgeState, GameError, Node, PlayerId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

/// Every placeable edge of an `rows x cols` board and who owns it.
///
/// The edge set is fixed at construction: all horizontal and vertical
/// neighbour pairs, nothing else. Edges are recoloured, never added or
/// removed. Iteration follows the canonical edge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeGrid {
    rows: usize,
    cols: usize,
    edges: BTreeMap<Edge, EdgeState>,
}

impl EdgeGrid {
    /// Creates a board with every edge empty.
    ///
    /// Any size is accepted; 3..=20 per axis is the recommended range and
    /// is checked by callers.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut edges = BTreeMap::new();
        for row in 0..rows {
            for col in 0..cols {
                let here = Node::new(row, col);
                if col + 1 < cols {
                    edges.insert(Edge::new(here, Node::new(row, col + 1)), EdgeState::Empty);
                }
                if row + 1 < rows {
                    edges.insert(Edge::new(here, Node::new(row + 1, col)), EdgeState::Empty);
                }
            }
        }
        debug!(edge_count = edges.len(), "Built edge grid");
        Self { rows, cols, edges }
    }

    /// Number of node rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of node columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of edges, claimed or not.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges owned by either player.
    pub fn claimed_count(&self) -> usize {
        self.edges.values().filter(|s| !s.is_empty()).count()
    }

    /// True if the node lies on the board.
    pub fn contains(&self, node: Node) -> bool {
        node.row < self.rows && node.col < self.cols
    }

    /// State of the edge between two nodes, `None` if they are not an edge.
    pub fn state(&self, a: Node, b: Node) -> Option<EdgeState> {
        self.edges.get(&Edge::new(a, b)).copied()
    }

    /// True iff `a`-`b` is an edge of this board and nobody owns it.
    pub fn is_valid_move(&self, a: Node, b: Node) -> bool {
        matches!(self.state(a, b), Some(EdgeState::Empty))
    }

    /// Claims the edge for `player`.
    ///
    /// # Errors
    ///
    /// `InvalidEdge` if the pair is not an edge, `EdgeOccupied` if it is
    /// already owned. The grid is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_edge(&mut self, a: Node, b: Node, player: PlayerId) -> Result<Edge, GameError> {
        let edge = Edge::new(a, b);
        let slot = self
            .edges
            .get_mut(&edge)
            .ok_or(GameError::InvalidEdge { a, b })?;
        if !slot.is_empty() {
            return Err(GameError::EdgeOccupied(edge));
        }
        *slot = EdgeState::Claimed(player);
        Ok(edge)
    }

    /// Returns an edge to the empty state.
    ///
    /// # Errors
    ///
    /// `InvalidEdge` if the pair is not an edge.
    #[instrument(skip(self))]
    pub fn clear_edge(&mut self, a: Node, b: Node) -> Result<EdgeState, GameError> {
        let slot = self
            .edges
            .get_mut(&Edge::new(a, b))
            .ok_or(GameError::InvalidEdge { a, b })?;
        Ok(std::mem::take(slot))
    }

    /// In-bounds neighbours of a node, in the order up, down, left, right.
    pub fn neighbors(&self, node: Node) -> Vec<Node> {
        let Node { row, col } = node;
        let candidates = [
            row.checked_sub(1).map(|r| Node::new(r, col)),
            Some(Node::new(row + 1, col)),
            col.checked_sub(1).map(|c| Node::new(row, c)),
            Some(Node::new(row, col + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// All edges currently owned by `player`.
    pub fn edges_owned_by(&self, player: PlayerId) -> BTreeSet<Edge> {
        self.edges
            .iter()
            .filter(|(_, state)| **state == EdgeState::Claimed(player))
            .map(|(edge, _)| *edge)
            .collect()
    }

    /// All edges nobody owns yet.
    pub fn empty_edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|(_, state)| state.is_empty())
            .map(|(edge, _)| *edge)
            .collect()
    }

    /// Every edge with its state.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, EdgeState)> + '_ {
        self.edges.iter().map(|(edge, state)| (*edge, *state))
    }
}

impl std::fmt::Display for EdgeGrid {
    /// Draws nodes as `●`, player one's bridges as `═══`/`║` and player
    /// two's as `───`/`|`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut lines = Vec::with_capacity(self.rows * 2);
        for row in 0..self.rows {
            let mut line = String::new();
            for col in 0..self.cols {
                line.push('●');
                if col + 1 < self.cols {
                    let span = match self.state(Node::new(row, col), Node::new(row, col + 1)) {
                        Some(EdgeState::Claimed(PlayerId::One)) => "═══",
                        Some(EdgeState::Claimed(PlayerId::Two)) => "───",
                        _ => "   ",
                    };
                    line.push_str(span);
                }
            }
            lines.push(line);

            if row + 1 < self.rows {
                let mut line = String::new();
                for col in 0..self.cols {
                    let mark = match self.state(Node::new(row, col), Node::new(row + 1, col)) {
                        Some(EdgeState::Claimed(PlayerId::One)) => '║',
                        Some(EdgeState::Claimed(PlayerId::Two)) => '|',
                        _ => ' ',
                    };
                    line.push(mark);
                    if col + 1 < self.cols {
                        line.push_str("   ");
                    }
                }
                lines.push(line);
            }
        }
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(row: usize, col: usize) -> Node {
        Node::new(row, col)
    }

    #[test]
    fn test_edge_count() {
        let grid = EdgeGrid::new(3, 4);
        assert_eq!(grid.edge_count(), 3 * 3 + 4 * 2);
        assert_eq!(grid.claimed_count(), 0);
        assert_eq!(grid.empty_edges().len(), grid.edge_count());
    }

    #[test]
    fn test_place_and_reject_repeat() {
        let mut grid = EdgeGrid::new(3, 3);
        assert!(grid.place_edge(n(0, 0), n(0, 1), PlayerId::One).is_ok());
        assert_eq!(
            grid.place_edge(n(0, 1), n(0, 0), PlayerId::Two),
            Err(GameError::EdgeOccupied(Edge::new(n(0, 0), n(0, 1))))
        );
        assert_eq!(
            grid.state(n(0, 1), n(0, 0)),
            Some(EdgeState::Claimed(PlayerId::One))
        );
    }

    #[test]
    fn test_invalid_pairs_rejected() {
        let mut grid = EdgeGrid::new(3, 3);
        let before = grid.clone();
        for (a, b) in [
            (n(0, 0), n(1, 1)),
            (n(0, 0), n(0, 2)),
            (n(2, 2), n(2, 3)),
            (n(5, 5), n(5, 6)),
            (n(1, 1), n(1, 1)),
        ] {
            assert!(!grid.is_valid_move(a, b));
            assert_eq!(
                grid.place_edge(a, b, PlayerId::One),
                Err(GameError::InvalidEdge { a, b })
            );
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_restores_legality() {
        let mut grid = EdgeGrid::new(3, 3);
        grid.place_edge(n(1, 1), n(2, 1), PlayerId::Two).unwrap();
        assert!(!grid.is_valid_move(n(1, 1), n(2, 1)));
        assert_eq!(
            grid.clear_edge(n(2, 1), n(1, 1)),
            Ok(EdgeState::Claimed(PlayerId::Two))
        );
        assert!(grid.is_valid_move(n(1, 1), n(2, 1)));
        assert!(grid.place_edge(n(1, 1), n(2, 1), PlayerId::One).is_ok());
    }

    #[test]
    fn test_neighbors_order() {
        let grid = EdgeGrid::new(3, 3);
        assert_eq!(grid.neighbors(n(1, 1)), vec![n(0, 1), n(2, 1), n(1, 0), n(1, 2)]);
        assert_eq!(grid.neighbors(n(0, 0)), vec![n(1, 0), n(0, 1)]);
        assert_eq!(grid.neighbors(n(2, 2)), vec![n(1, 2), n(2, 1)]);
    }

    #[test]
    fn test_edges_owned_by() {
        let mut grid = EdgeGrid::new(3, 3);
        grid.place_edge(n(0, 0), n(1, 0), PlayerId::One).unwrap();
        grid.place_edge(n(0, 1), n(0, 2), PlayerId::Two).unwrap();
        grid.place_edge(n(1, 0), n(2, 0), PlayerId::One).unwrap();

        let owned = grid.edges_owned_by(PlayerId::One);
        assert_eq!(owned.len(), 2);
        assert!(owned.contains(&Edge::new(n(1, 0), n(0, 0))));
        assert_eq!(grid.edges_owned_by(PlayerId::Two).len(), 1);
        assert_eq!(grid.claimed_count(), 3);
    }

    #[test]
    fn test_display() {
        let mut grid = EdgeGrid::new(2, 2);
        grid.place_edge(n(0, 0), n(0, 1), PlayerId::One).unwrap();
        grid.place_edge(n(0, 1), n(1, 1), PlayerId::Two).unwrap();
        assert_eq!(grid.to_string(), "●═══●\n    |\n●   ●");
    }
}
