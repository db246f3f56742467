//! Playout estimator: exact grids under scripted randomness and the
//! statistical behaviour of seeded runs

use oxo::{
    App, Board, EngineConfig, EngineKind, Move, MoveEngine, Player, PlayoutEstimator,
    ScriptedRandom,
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

fn scripted(trials: usize, script: &[usize]) -> PlayoutEstimator<ScriptedRandom> {
    PlayoutEstimator::new(trials, ScriptedRandom::new(script.to_vec())).unwrap()
}

#[test]
fn single_trial_credits_the_winning_line() {
    // O opens the playout at (0,2), X answers at (1,2), O takes (2,0) and
    // wins on the anti-diagonal.
    let mut estimator = scripted(1, &[0]);
    let (chosen, grid) = estimator
        .best_move_with_grid(&board("XX./OO./..."), Player::X)
        .unwrap();

    assert_eq!(grid.as_array(), [-1, -1, 1, 1, 1, -1, 1, 0, 0]);
    assert_eq!(chosen, mv(0, 2));
    assert_eq!(estimator.rng().calls(), 3);
}

#[test]
fn grid_accumulates_across_trials() {
    let mut estimator = scripted(2, &[0, 0, 1]);
    let (chosen, grid) = estimator
        .best_move_with_grid(&board("XX./OO./..."), Player::X)
        .unwrap();

    assert_eq!(grid.as_array(), [-1, -1, 0, 1, 1, 1, 0, 0, 0]);
    assert_eq!(chosen, mv(1, 2));
    assert_eq!(estimator.rng().calls(), 6);
}

#[test]
fn mixed_outcomes_on_the_blocking_board() {
    let mut estimator = scripted(4, &[0, 3, 1, 2]);
    let (chosen, grid) = estimator
        .best_move_with_grid(&board("OO./.X./..."), Player::X)
        .unwrap();

    assert_eq!(grid.as_array(), [4, 4, 0, -1, -4, 0, 1, 2, 2]);
    assert_eq!(chosen, mv(2, 1));
    assert_eq!(estimator.rng().calls(), 14);
}

#[test]
fn usually_blocks_the_open_row() {
    let position = board("OO./.X./...");
    let runs = 200;
    let blocked = (0..runs)
        .filter(|&seed| {
            PlayoutEstimator::seeded(100, seed)
                .unwrap()
                .best_move(&position, Player::X)
                .unwrap()
                == mv(0, 2)
        })
        .count();
    assert!(blocked >= 180, "blocked in {blocked} of {runs} runs");
}

#[test]
fn never_returns_an_occupied_cell() {
    let positions = [
        (Board::new(), Player::X),
        (board("XO./.../..."), Player::X),
        (board("XOX/OXO/..."), Player::O),
        (board("XOX/XOO/OX."), Player::X),
    ];
    for seed in 0..20 {
        for (position, to_move) in positions {
            let chosen = PlayoutEstimator::seeded(10, seed)
                .unwrap()
                .best_move(&position, to_move)
                .unwrap();
            assert!(position.is_empty(chosen), "{chosen} on\n{position}");
        }
    }
}

#[test]
fn last_empty_cell_is_the_only_answer() {
    let position = board("XOX/XOO/OX.");
    let mut estimator = scripted(5, &[0]);
    assert_eq!(estimator.best_move(&position, Player::X).unwrap(), mv(2, 2));
}

#[test]
fn app_injects_the_random_source() {
    let app = App::for_testing()
        .with_random_source(|_seed| Box::new(ScriptedRandom::new(vec![1])))
        .build();
    let config = EngineConfig::new(EngineKind::Playout)
        .with_agent(Player::X)
        .with_trials(3);
    let mut estimator = app.create_estimator(&config).unwrap();
    let (chosen, grid) = estimator
        .best_move_with_grid(&board("XX./OO./..."), Player::X)
        .unwrap();

    assert_eq!(grid.as_array(), [-3, -3, 0, 3, 3, 3, 0, 0, 0]);
    assert_eq!(chosen, mv(1, 2));
}

#[test]
fn zero_trials_are_rejected_by_config_and_constructor() {
    let config = EngineConfig::new(EngineKind::Playout).with_trials(0);
    assert!(matches!(
        App::new().create_engine(&config),
        Err(oxo::Error::InvalidTrials { trials: 0 })
    ));
    assert!(PlayoutEstimator::seeded(0, 1).is_err());
}
