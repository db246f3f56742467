//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A game in progress or finished, with its history.
///
/// `Game` is the driver-side bookkeeping: it tracks whose turn it is and
/// refuses moves once the board is terminal. Engines never see it; they are
/// handed the current [`Board`] and the player to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    first_player: Player,
    board: Board,
    to_move: Player,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Start a game on an empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Start a game on an empty board with the given player opening
    pub fn new_with_player(first_player: Player) -> Self {
        Game {
            first_player,
            board: Board::new(),
            to_move: first_player,
            moves: Vec::new(),
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once the board is
    /// terminal, and [`Error::Occupied`](crate::Error::Occupied) if the cell
    /// is taken.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, crate::Error> {
        if self.board.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        self.board = self.board.place(mv, self.to_move)?;
        self.moves.push(PlayedMove {
            mv,
            player: self.to_move,
        });
        self.to_move = self.to_move.opponent();

        Ok(self.board.outcome())
    }

    /// Play a move on behalf of `player`, checking that it is their turn.
    pub fn play_as(&mut self, player: Player, mv: Move) -> Result<Outcome, crate::Error> {
        if player != self.to_move {
            return Err(crate::Error::WrongTurn {
                expected: self.to_move,
                got: player,
            });
        }
        self.play(mv)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Board after each move, starting with the empty board
    pub fn board_sequence(&self) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        boards.push(board);
        for played in &self.moves {
            // Every recorded move was validated by `play`.
            board.cells[played.mv.index()] = played.player.to_cell();
            boards.push(board);
        }
        boards
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
