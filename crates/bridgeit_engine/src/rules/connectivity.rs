//! Win detection: is one side of the board joined to the other by a
//! single player's bridges?

use super::super::{EdgeGrid, EdgeState, Node, PlayerId};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// True if `player`'s bridges connect their start side to their target side.
#[instrument(skip(grid))]
pub fn has_winning_path(grid: &EdgeGrid, player: PlayerId) -> bool {
    find_winning_path(grid, player).is_some()
}

/// Finds one chain of nodes joined by `player`'s bridges that runs from the
/// player's start side to their target side.
///
/// Breadth-first search seeded with every start-side node at once, so the
/// start side behaves as one virtual source. Each node is visited at most
/// once. The returned path begins on the start side and ends on the target
/// side; a single node is returned when both sides coincide.
#[instrument(skip(grid))]
pub fn find_winning_path(grid: &EdgeGrid, player: PlayerId) -> Option<Vec<Node>> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let goal = player.goal();
    let index = |node: Node| node.row * cols + node.col;

    let mut came_from: Vec<Option<Node>> = vec![None; rows * cols];
    let mut visited = vec![false; rows * cols];
    let mut queue = VecDeque::new();

    for start in goal.start_nodes(rows, cols) {
        visited[index(start)] = true;
        queue.push_back(start);
    }

    while let Some(node) = queue.pop_front() {
        if goal.is_target(node, rows, cols) {
            let path = trace_back(node, &came_from, index);
            debug!(%player, length = path.len(), "Winning path found");
            return Some(path);
        }

        for next in grid.neighbors(node) {
            if visited[index(next)] {
                continue;
            }
            if grid.state(node, next) == Some(EdgeState::Claimed(player)) {
                visited[index(next)] = true;
                came_from[index(next)] = Some(node);
                queue.push_back(next);
            }
        }
    }

    None
}

fn trace_back(end: Node, came_from: &[Option<Node>], index: impl Fn(Node) -> usize) -> Vec<Node> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = came_from[index(current)] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
