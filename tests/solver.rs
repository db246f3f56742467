//! Exact solver: optimality, determinism and the transposition key

use oxo::{
    Board, CacheLifetime, MatchRunner, MinimaxSolver, Move, MoveEngine, Opener, Outcome, Player,
    solver::{DRAW, LOSS, PositionKey, WIN},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

#[test]
fn forced_win_under_both_sign_conventions() {
    let position = board("XX./OO./...");

    let mut x_max = MinimaxSolver::new(Player::X);
    assert_eq!(
        x_max.best_move_with_score(&position, Player::X).unwrap(),
        (mv(0, 2), WIN)
    );

    let mut o_max = MinimaxSolver::new(Player::O);
    assert_eq!(
        o_max.best_move_with_score(&position, Player::X).unwrap(),
        (mv(0, 2), LOSS)
    );
}

#[test]
fn per_move_scores_for_a_double_threat() {
    let position = board("XX./OO./...");
    let mut solver = MinimaxSolver::new(Player::X);
    let scores: Vec<(usize, i32)> = solver
        .evaluate_moves(&position, Player::X)
        .unwrap()
        .into_iter()
        .map(|(m, s)| (m.index(), s))
        .collect();
    assert_eq!(scores, vec![(2, 1), (5, 0), (6, -1), (7, -1), (8, -1)]);
}

#[test]
fn first_of_equal_wins_is_chosen() {
    // Blocking at (0,2) still wins later and ties the immediate win at
    // (1,2); row-major order picks the block.
    let mut solver = MinimaxSolver::new(Player::O);
    let (chosen, score) = solver
        .best_move_with_score(&board("XX./OO./..."), Player::O)
        .unwrap();
    assert_eq!(chosen, mv(0, 2));
    assert_eq!(score, WIN);
}

#[test]
fn blocks_the_open_row() {
    let position = board("OO./.X./...");
    for maximizer in [Player::X, Player::O] {
        let mut solver = MinimaxSolver::new(maximizer);
        assert_eq!(solver.best_move(&position, Player::X).unwrap(), mv(0, 2));
    }
}

#[test]
fn warm_and_cold_tables_agree() {
    let positions = [
        (Board::new(), Player::X),
        (board("X../.../..."), Player::O),
        (board("X../.O./..X"), Player::O),
        (board("OO./.X./..."), Player::X),
        (board("XO./.X./..O"), Player::X),
    ];

    let mut warm = MinimaxSolver::new(Player::O);
    let mut cold = MinimaxSolver::new(Player::O).with_cache_lifetime(CacheLifetime::PerSearch);
    for (position, to_move) in positions {
        let first = warm.best_move_with_score(&position, to_move).unwrap();
        let again = warm.best_move_with_score(&position, to_move).unwrap();
        let fresh = cold.best_move_with_score(&position, to_move).unwrap();
        assert_eq!(first, again, "{position}");
        assert_eq!(first, fresh, "{position}");
    }
}

#[test]
fn empty_board_is_a_draw_for_every_first_move() {
    let mut solver = MinimaxSolver::new(Player::O);
    let scores = solver.evaluate_moves(&Board::new(), Player::X).unwrap();
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|&(_, s)| s == DRAW));
}

#[test]
fn table_holds_each_reachable_position_once() {
    let mut solver = MinimaxSolver::new(Player::O);
    solver.best_move(&Board::new(), Player::X).unwrap();
    // Every position reachable with X opening, apart from the empty root.
    assert_eq!(solver.table().len(), 5477);
    assert!(solver.table().len() < 5500);
}

#[test]
fn within_one_search_the_cells_fix_the_mover() {
    let mut solver = MinimaxSolver::new(Player::O);
    solver.best_move(&Board::new(), Player::X).unwrap();
    for key in solver.table().keys() {
        let position = key.board().unwrap();
        assert_eq!(position.implied_to_move(Player::X), Some(key.to_move()));
    }
}

#[test]
fn same_cells_with_different_movers_score_differently() {
    let position = board("XO./.../...");
    let mut solver = MinimaxSolver::new(Player::O);

    assert_eq!(solver.evaluate(&position, Player::X).unwrap(), LOSS);
    assert_eq!(solver.evaluate(&position, Player::O).unwrap(), DRAW);
    assert_ne!(
        PositionKey::new(&position, Player::X),
        PositionKey::new(&position, Player::O)
    );
    assert_eq!(solver.table().get(&PositionKey::new(&position, Player::X)), Some(LOSS));
    assert_eq!(solver.table().get(&PositionKey::new(&position, Player::O)), Some(DRAW));
}

#[test]
fn solver_against_itself_always_draws() {
    let mut runner = MatchRunner::new(
        Box::new(MinimaxSolver::new(Player::X)),
        Box::new(MinimaxSolver::new(Player::O)),
    )
    .with_opener(Opener::Alternate);

    for game_num in 0..2 {
        let game = runner.play_game(game_num, &mut []).unwrap();
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.moves().len(), 9);
    }
}

#[test]
fn finished_boards_are_refused() {
    let mut solver = MinimaxSolver::new(Player::X);
    assert!(matches!(
        solver.best_move(&board("OOO/XX./X.."), Player::X),
        Err(oxo::Error::GameOver)
    ));
    assert!(matches!(
        solver.best_move(&board("XOX/XOO/OXX"), Player::X),
        Err(oxo::Error::NoValidMoves)
    ));
}
