//! Engine port - the contract every move selector fulfils

use crate::{
    Result,
    tictactoe::{Board, Move, Player},
};

/// A decision engine: given a board and the player to move, choose a move.
///
/// Implementations never mutate the caller's board and always return a move
/// that references an empty cell of the board they were given.
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::MoveEngine,
///     solver::MinimaxSolver,
///     tictactoe::{Board, Player},
/// };
///
/// let mut engine = MinimaxSolver::new(Player::X);
/// let board = Board::from_string("XX./OO./...")?;
/// let mv = engine.best_move(&board, Player::X)?;
/// assert_eq!((mv.row(), mv.col()), (0, 2));
/// # Ok::<(), oxo::Error>(())
/// ```
pub trait MoveEngine: Send {
    /// Select a move for `to_move` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) if the board
    /// already has a winner and [`Error::NoValidMoves`](crate::Error::NoValidMoves)
    /// if it is full.
    fn best_move(&mut self, board: &Board, to_move: Player) -> Result<Move>;

    /// Human-readable engine name, used in logs and match tables.
    fn name(&self) -> &str;

    /// Reseed any randomness the engine uses.
    ///
    /// Deterministic engines ignore this.
    fn reseed(&mut self, _seed: u64) {}
}

/// Reject boards on which no decision can be made.
pub(crate) fn ensure_decidable(board: &Board) -> Result<()> {
    if board.winner().is_some() {
        return Err(crate::Error::GameOver);
    }
    if board.is_full() {
        return Err(crate::Error::NoValidMoves);
    }
    Ok(())
}
