//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, Outcome, PieceCount, Player};
pub use game::{Game, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES, evaluate_line};
