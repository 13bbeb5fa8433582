//! Property tests over board sizes and random move sequences.

use bridgeit_engine::{EdgeGrid, Game, Node, Phase, PlayerId, PlayerType, has_winning_path};
use proptest::prelude::*;

fn started(rows: usize, cols: usize) -> Game {
    let mut game = Game::new(rows, cols);
    game.add_player("Red", "Red", PlayerType::Human).unwrap();
    game.add_player("Blue", "Blue", PlayerType::Human).unwrap();
    game.start_game().unwrap();
    game
}

fn assert_counts_consistent(game: &Game) {
    let total: u32 = game.players().iter().map(|p| *p.moves_made()).sum();
    assert_eq!(game.history().len(), total as usize);
    assert_eq!(game.history().len(), game.grid().claimed_count());
}

/// A move request as raw coordinates, possibly invalid for the board.
fn raw_pair() -> impl Strategy<Value = (Node, Node)> {
    (0usize..8, 0usize..8, 0usize..8, 0usize..8)
        .prop_map(|(r1, c1, r2, c2)| (Node::new(r1, c1), Node::new(r2, c2)))
}

proptest! {
    #[test]
    fn edge_count_matches_formula(rows in 3usize..=20, cols in 3usize..=20) {
        let grid = EdgeGrid::new(rows, cols);
        prop_assert_eq!(grid.edge_count(), rows * (cols - 1) + cols * (rows - 1));
        prop_assert_eq!(grid.claimed_count(), 0);
        prop_assert!(!has_winning_path(&grid, PlayerId::One));
        prop_assert!(!has_winning_path(&grid, PlayerId::Two));
    }

    #[test]
    fn non_adjacent_pairs_are_never_edges(rows in 3usize..=8, cols in 3usize..=8, (a, b) in raw_pair()) {
        let mut grid = EdgeGrid::new(rows, cols);
        let is_edge = grid.contains(a) && grid.contains(b) && a.is_adjacent(b);
        prop_assert_eq!(grid.is_valid_move(a, b), is_edge);

        let before = grid.clone();
        let placed = grid.place_edge(a, b, PlayerId::Two).is_ok();
        prop_assert_eq!(placed, is_edge);
        if !placed {
            prop_assert_eq!(&grid, &before);
        }
    }

    #[test]
    fn random_play_keeps_history_and_counters_in_step(
        requests in proptest::collection::vec((raw_pair(), any::<bool>()), 0..60)
    ) {
        let mut game = started(5, 5);
        for ((a, b), undo) in requests {
            if game.phase() == Phase::Finished {
                break;
            }
            if undo {
                let turn_before = game.current_turn();
                match game.undo_last_move() {
                    Ok(mv) => prop_assert_eq!(game.current_turn(), mv.player),
                    Err(_) => prop_assert_eq!(game.current_turn(), turn_before),
                }
            } else {
                let mover = game.current_turn();
                match game.make_move(a, b) {
                    Ok(outcome) if outcome.is_win() => {
                        prop_assert_eq!(game.current_turn(), mover);
                    }
                    Ok(_) => prop_assert_eq!(game.current_turn(), mover.opponent()),
                    Err(_) => prop_assert_eq!(game.current_turn(), mover),
                }
            }
            assert_counts_consistent(&game);
        }
    }

    #[test]
    fn undo_right_after_move_restores_everything(
        first in proptest::collection::vec(raw_pair(), 0..10),
        (a, b) in raw_pair()
    ) {
        let mut game = started(6, 6);
        for (x, y) in first {
            let _ = game.make_move(x, y);
        }
        prop_assume!(game.phase() == Phase::Playing);

        let grid = game.grid().clone();
        let turn = game.current_turn();
        let history = game.history().to_vec();

        if let Ok(outcome) = game.make_move(a, b) {
            prop_assume!(!outcome.is_win());
            prop_assert!(game.undo_last_move().is_ok());
        }
        prop_assert_eq!(game.grid(), &grid);
        prop_assert_eq!(game.current_turn(), turn);
        prop_assert_eq!(game.history(), history.as_slice());
    }
}
