//! Memoized minimax over the full game tree

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::transposition::{DRAW, LOSS, PositionKey, Score, TranspositionTable, WIN};
use crate::{
    Result,
    ports::{MoveEngine, engine::ensure_decidable},
    tictactoe::{Board, Move, Player},
};

/// How long a solver keeps its transposition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheLifetime {
    /// Cleared at the start of every `best_move` call
    PerSearch,
    /// Kept for as long as the solver value lives
    #[default]
    PerSolver,
}

/// Counters describing the work done by a solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions expanded (table misses that were computed)
    pub nodes: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub table_size: usize,
}

/// Exact solver.
///
/// Scores are always taken from the point of view of one fixed
/// `maximizer`: +1 when it wins, -1 when its opponent wins, 0 for a draw.
/// When the maximizer is to move the solver picks the first move with the
/// highest score in row-major order, otherwise the first with the lowest, so
/// the same solver plays either side perfectly.
///
/// The transposition table belongs to the solver. With
/// [`CacheLifetime::PerSolver`] it survives across calls, which is safe
/// because the maximizer never changes for a given solver and the key
/// includes the player to move.
#[derive(Debug, Clone)]
pub struct MinimaxSolver {
    name: String,
    maximizer: Player,
    lifetime: CacheLifetime,
    table: TranspositionTable,
    nodes: u64,
}

impl MinimaxSolver {
    pub fn new(maximizer: Player) -> Self {
        Self {
            name: "minimax".to_string(),
            maximizer,
            lifetime: CacheLifetime::default(),
            table: TranspositionTable::new(),
            nodes: 0,
        }
    }

    pub fn with_cache_lifetime(mut self, lifetime: CacheLifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    pub fn cache_lifetime(&self) -> CacheLifetime {
        self.lifetime
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            cache_hits: self.table.hits(),
            cache_misses: self.table.misses(),
            table_size: self.table.len(),
        }
    }

    /// Score of a finished game, `None` while it is still in progress.
    pub fn terminal_score(&self, board: &Board) -> Option<Score> {
        match board.winner() {
            Some(winner) if winner == self.maximizer => Some(WIN),
            Some(_) => Some(LOSS),
            None if board.is_full() => Some(DRAW),
            None => None,
        }
    }

    /// Minimax value of `board` with `to_move` about to play.
    pub fn evaluate(&mut self, board: &Board, to_move: Player) -> Result<Score> {
        let key = PositionKey::new(board, to_move);
        if let Some(score) = self.table.probe(&key) {
            return Ok(score);
        }
        self.nodes += 1;

        let score = match self.terminal_score(board) {
            Some(score) => score,
            None => {
                let maximizing = to_move == self.maximizer;
                let mut best = if maximizing { LOSS } else { WIN };
                for mv in board.empty_cells() {
                    let child = board.place(mv, to_move)?;
                    let value = self.evaluate(&child, to_move.opponent())?;
                    best = if maximizing {
                        best.max(value)
                    } else {
                        best.min(value)
                    };
                }
                best
            }
        };

        self.table.insert(key, score);
        Ok(score)
    }

    /// Score every empty cell of `board` for `to_move`, in row-major order.
    pub fn evaluate_moves(&mut self, board: &Board, to_move: Player) -> Result<Vec<(Move, Score)>> {
        ensure_decidable(board)?;
        if self.lifetime == CacheLifetime::PerSearch {
            self.table.clear();
            self.nodes = 0;
        }

        let mut scored = Vec::new();
        for mv in board.empty_cells() {
            let child = board.place(mv, to_move)?;
            let score = self.evaluate(&child, to_move.opponent())?;
            scored.push((mv, score));
        }
        Ok(scored)
    }

    /// Best move for `to_move` together with its score.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) if the board has a
    /// winner and [`Error::NoValidMoves`](crate::Error::NoValidMoves) if it
    /// is full.
    pub fn best_move_with_score(&mut self, board: &Board, to_move: Player) -> Result<(Move, Score)> {
        let scored = self.evaluate_moves(board, to_move)?;
        let best = self.choose(&scored, to_move);

        let (mv, score) = best.ok_or(crate::Error::NoValidMoves)?;
        let stats = self.stats();
        debug!(
            engine = %self.name,
            %to_move,
            maximizer = %self.maximizer,
            chosen = %mv,
            score,
            "minimax decision"
        );
        trace!(
            nodes = stats.nodes,
            hits = stats.cache_hits,
            misses = stats.cache_misses,
            table_size = stats.table_size,
            "minimax table"
        );
        Ok((mv, score))
    }

    /// Pick from already scored moves: the first maximum when `to_move` is
    /// the maximizer, otherwise the first minimum.
    pub fn choose(&self, scored: &[(Move, Score)], to_move: Player) -> Option<(Move, Score)> {
        let maximizing = to_move == self.maximizer;
        let mut best: Option<(Move, Score)> = None;
        for &(mv, score) in scored {
            let better = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if better {
                best = Some((mv, score));
            }
        }
        best
    }
}

impl MoveEngine for MinimaxSolver {
    fn best_move(&mut self, board: &Board, to_move: Player) -> Result<Move> {
        self.best_move_with_score(board, to_move).map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn terminal_scores_follow_maximizer() {
        let x_won = board("XXX/OO./...");
        assert_eq!(MinimaxSolver::new(Player::X).terminal_score(&x_won), Some(WIN));
        assert_eq!(MinimaxSolver::new(Player::O).terminal_score(&x_won), Some(LOSS));
        assert_eq!(
            MinimaxSolver::new(Player::O).terminal_score(&board("XOXXOOOXX")),
            Some(DRAW)
        );
        assert_eq!(MinimaxSolver::new(Player::O).terminal_score(&Board::new()), None);
    }

    #[test]
    fn completes_own_row() {
        let mut solver = MinimaxSolver::new(Player::X);
        let (chosen, score) = solver
            .best_move_with_score(&board("XX./OO./..."), Player::X)
            .unwrap();
        assert_eq!(chosen, mv(0, 2));
        assert_eq!(score, WIN);
    }

    #[test]
    fn minimizing_side_takes_the_lowest_score() {
        let mut solver = MinimaxSolver::new(Player::O);
        let (chosen, score) = solver
            .best_move_with_score(&board("XX./OO./..."), Player::X)
            .unwrap();
        assert_eq!(chosen, mv(0, 2));
        assert_eq!(score, LOSS);
    }

    #[test]
    fn refuses_finished_boards() {
        let mut solver = MinimaxSolver::new(Player::O);
        assert!(matches!(
            solver.best_move(&board("XXX/OO./..."), Player::O),
            Err(crate::Error::GameOver)
        ));
        assert!(matches!(
            solver.best_move(&board("XOXXOOOXX"), Player::O),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn per_search_lifetime_starts_cold() {
        let mut solver = MinimaxSolver::new(Player::O).with_cache_lifetime(CacheLifetime::PerSearch);
        let position = board("X........");
        solver.best_move(&position, Player::O).unwrap();
        let first = solver.stats();
        solver.best_move(&position, Player::O).unwrap();
        assert_eq!(solver.stats(), first);
    }

    #[test]
    fn per_solver_lifetime_reuses_entries() {
        let mut solver = MinimaxSolver::new(Player::O);
        let position = board("X........");
        solver.best_move(&position, Player::O).unwrap();
        let size = solver.table().len();
        let nodes = solver.stats().nodes;

        solver.best_move(&position, Player::O).unwrap();
        assert_eq!(solver.table().len(), size);
        assert_eq!(solver.stats().nodes, nodes, "warm search expands nothing");
        assert!(solver.stats().cache_hits > 0);
    }

    #[test]
    fn choose_takes_first_extreme_for_each_side() {
        let solver = MinimaxSolver::new(Player::X);
        let scored = [(mv(0, 2), DRAW), (mv(1, 2), WIN), (mv(2, 0), WIN), (mv(2, 2), LOSS)];
        assert_eq!(solver.choose(&scored, Player::X), Some((mv(1, 2), WIN)));
        assert_eq!(solver.choose(&scored, Player::O), Some((mv(2, 2), LOSS)));
        assert_eq!(solver.choose(&[], Player::X), None);
    }

    #[test]
    fn table_only_holds_game_scores() {
        let mut solver = MinimaxSolver::new(Player::X);
        assert_eq!(solver.evaluate(&board("X../.O./..."), Player::X).unwrap(), DRAW);
        assert!(solver.table().len() > 1);
        assert!(solver.table().iter().all(|(_, &score)| (LOSS..=WIN).contains(&score)));
    }
}
