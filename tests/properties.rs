//! Property-based tests over boards reachable by alternating play.

use oxo::{
    Board, Cell, MinimaxSolver, MoveEngine, Player, PlayoutEstimator,
    tictactoe::{CELL_COUNT, WINNING_LINES},
};
use proptest::prelude::*;

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// A board reached by random alternating moves, stopping early once the
/// game is over, together with the player whose turn it is.
fn arb_reachable() -> impl Strategy<Value = (Board, Player)> {
    (arb_player(), proptest::collection::vec(0usize..CELL_COUNT, 0..=CELL_COUNT)).prop_map(
        |(first, picks)| {
            let mut board = Board::new();
            let mut to_move = first;
            for pick in picks {
                if board.is_terminal() {
                    break;
                }
                let empty = board.empty_cells();
                board = board
                    .place(empty[pick % empty.len()], to_move)
                    .expect("picked an empty cell");
                to_move = to_move.opponent();
            }
            (board, to_move)
        },
    )
}

/// Non-terminal reachable positions only
fn arb_open() -> impl Strategy<Value = (Board, Player)> {
    arb_reachable().prop_filter("game over", |(board, _)| !board.is_terminal())
}

fn has_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells[i] == player.to_cell()))
}

proptest! {
    #[test]
    fn winner_matches_a_line_scan((board, _) in arb_reachable()) {
        let x = has_line(&board, Player::X);
        let o = has_line(&board, Player::O);
        prop_assert!(!(x && o), "alternating play never completes two winners");
        match board.winner() {
            Some(Player::X) => prop_assert!(x),
            Some(Player::O) => prop_assert!(o),
            None => prop_assert!(!x && !o),
        }
        prop_assert_eq!(board.is_terminal(), x || o || board.is_full());
    }

    #[test]
    fn place_is_pure((board, to_move) in arb_open(), pick in 0usize..CELL_COUNT) {
        let before = board;
        let empty = board.empty_cells();
        let target = empty[pick % empty.len()];
        let after = board.place(target, to_move).unwrap();

        prop_assert_eq!(board, before);
        prop_assert_eq!(after.get(target), to_move.to_cell());
        for i in (0..CELL_COUNT).filter(|&i| i != target.index()) {
            prop_assert_eq!(after.cells[i], board.cells[i]);
        }
        prop_assert_eq!(
            after.cells.iter().filter(|&&c| c == Cell::Empty).count(),
            empty.len() - 1
        );
    }

    #[test]
    fn estimator_picks_an_empty_cell((board, to_move) in arb_open(), seed in any::<u64>()) {
        let mut estimator = PlayoutEstimator::seeded(10, seed).unwrap();
        let chosen = estimator.best_move(&board, to_move).unwrap();
        prop_assert!(board.is_empty(chosen));
    }

    #[test]
    fn solver_is_deterministic((board, to_move) in arb_open(), maximizer in arb_player()) {
        let mut solver = MinimaxSolver::new(maximizer);
        let first = solver.best_move_with_score(&board, to_move).unwrap();
        let again = solver.best_move_with_score(&board, to_move).unwrap();
        let fresh = MinimaxSolver::new(maximizer)
            .best_move_with_score(&board, to_move)
            .unwrap();

        prop_assert!(board.is_empty(first.0));
        prop_assert_eq!(first, again);
        prop_assert_eq!(first, fresh);
    }
}
