//! Monte Carlo playout estimator

use tracing::debug;

use super::score_grid::ScoreGrid;
use crate::{
    Result,
    adapters::StdRandom,
    ports::{MoveEngine, RandomSource, engine::ensure_decidable},
    tictactoe::{Board, Move, Player},
};

/// Number of playouts per decision when none is configured
pub const DEFAULT_TRIALS: usize = 100;

/// Picks moves by scoring cells over random playouts.
///
/// Each trial copies the board and lets both sides play uniformly at random
/// until someone wins or the board fills. The first simulated placement
/// belongs to the opponent of the player to move: the estimator asks how the
/// game tends to go once the current decision has been made. Cells held by
/// the winner of a trial gain a point and cells held by the loser lose one.
/// The move is the empty cell with the highest total.
///
/// This is a noisy proxy for move quality. More trials make the estimate
/// more stable but never guarantee the optimal move.
#[derive(Debug, Clone)]
pub struct PlayoutEstimator<R: RandomSource = StdRandom> {
    name: String,
    trials: usize,
    rng: R,
}

impl PlayoutEstimator<StdRandom> {
    /// Estimator with a seeded standard RNG
    pub fn seeded(trials: usize, seed: u64) -> Result<Self> {
        Self::new(trials, StdRandom::with_seed(seed))
    }
}

impl<R: RandomSource> PlayoutEstimator<R> {
    /// Create an estimator running `trials` playouts per decision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTrials`](crate::Error::InvalidTrials) when
    /// `trials` is zero.
    pub fn new(trials: usize, rng: R) -> Result<Self> {
        if trials == 0 {
            return Err(crate::Error::InvalidTrials { trials });
        }
        Ok(Self {
            name: "playout".to_string(),
            trials,
            rng,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Play one random game from `board` with `first` placing first.
    ///
    /// Returns the final board, which is either won or full.
    pub fn playout(&mut self, board: &Board, first: Player) -> Result<Board> {
        let mut current = *board;
        let mut player = first;
        loop {
            let empty = current.empty_cells();
            if empty.is_empty() {
                return Ok(current);
            }
            let index = self.rng.choose_index(empty.len());
            let pick = empty
                .get(index)
                .copied()
                .ok_or_else(|| crate::Error::InvalidConfiguration {
                    message: format!(
                        "random source chose index {index} among {} empty cells",
                        empty.len()
                    ),
                })?;
            current = current.place(pick, player)?;
            if current.winner().is_some() {
                return Ok(current);
            }
            player = player.opponent();
        }
    }

    /// Accumulate a fresh score grid over all trials.
    pub fn score_grid(&mut self, board: &Board, to_move: Player) -> Result<ScoreGrid> {
        ensure_decidable(board)?;

        let mut grid = ScoreGrid::new();
        let mut wins_for_mover = 0usize;
        let mut wins_for_opponent = 0usize;
        for _ in 0..self.trials {
            let final_board = self.playout(board, to_move.opponent())?;
            match grid.record(&final_board) {
                Some(winner) if winner == to_move => wins_for_mover += 1,
                Some(_) => wins_for_opponent += 1,
                None => {}
            }
        }

        debug!(
            engine = %self.name,
            trials = self.trials,
            wins_for_mover,
            wins_for_opponent,
            "playouts finished"
        );
        Ok(grid)
    }

    /// Best move for `to_move` together with the grid it was read from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) if the board has a
    /// winner and [`Error::NoValidMoves`](crate::Error::NoValidMoves) if it
    /// is full.
    pub fn best_move_with_grid(&mut self, board: &Board, to_move: Player) -> Result<(Move, ScoreGrid)> {
        let grid = self.score_grid(board, to_move)?;
        let mv = grid.best_empty(board).ok_or(crate::Error::NoValidMoves)?;
        debug!(engine = %self.name, %to_move, chosen = %mv, score = grid.get(mv), "playout decision");
        Ok((mv, grid))
    }
}

impl<R: RandomSource> MoveEngine for PlayoutEstimator<R> {
    fn best_move(&mut self, board: &Board, to_move: Player) -> Result<Move> {
        self.best_move_with_grid(board, to_move).map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }
}
