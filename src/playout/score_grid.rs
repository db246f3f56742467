//! Per-cell score accumulator for playout estimation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, Player};

/// One signed accumulator per cell.
///
/// Every decision starts from a fresh grid; nothing is carried between
/// decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreGrid {
    scores: [i32; CELL_COUNT],
}

impl ScoreGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mv: Move) -> i32 {
        self.scores[mv.index()]
    }

    /// Scores in row-major order
    pub fn as_array(&self) -> [i32; CELL_COUNT] {
        self.scores
    }

    /// Credit a finished playout.
    ///
    /// On a win every cell held by the winner gains one point and every cell
    /// held by the loser loses one. Empty cells and drawn games change
    /// nothing. Returns the winner, if any.
    pub fn record(&mut self, final_board: &Board) -> Option<Player> {
        let winner = final_board.winner()?;
        let winning = winner.to_cell();
        for (score, &cell) in self.scores.iter_mut().zip(final_board.cells.iter()) {
            if cell == winning {
                *score += 1;
            } else if cell != Cell::Empty {
                *score -= 1;
            }
        }
        Some(winner)
    }

    /// Highest-scoring cell among those empty on `board`.
    ///
    /// Ties go to the first cell in row-major order. `None` when the board
    /// has no empty cell.
    pub fn best_empty(&self, board: &Board) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for mv in board.empty_cells() {
            let score = self.get(mv);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

impl fmt::Display for ScoreGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.scores.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk.iter().map(|score| format!("{score:>5}")).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
