//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    /// Base-3 digit used by [`Board::key`]
    fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }
}

/// A player in the game.
///
/// `X` moves first in a standard game and is the human side by default;
/// `O` is the automated agent by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// A board coordinate, 0-indexed.
///
/// A `Move` is always in range; whether the cell is free is a property of a
/// particular board and is checked by [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a move, rejecting coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(crate::Error::OutOfBounds { row, col });
        }
        Ok(Move { row, col })
    }

    /// Create a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= CELL_COUNT {
            return Err(crate::Error::OutOfBounds {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            });
        }
        Ok(Move {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// All nine coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..CELL_COUNT).map(|index| Move {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal status of a board, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl PieceCount {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// The 3x3 grid of cells, stored row-major.
///
/// `Board` is a small `Copy` value. Every operation that changes it returns a
/// new board and leaves the original untouched, so engines can explore
/// freely without affecting the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell empty
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Parse a board from a string of nine cells.
    ///
    /// Whitespace, `/` and `|` are ignored, so `"XX./OO./..."` and
    /// `"XX.OO...."` describe the same board. Empty cells may be written as
    /// `.` or `_`.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly nine cells or
    /// contains a character that is not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get the cell at a coordinate
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Place a mark and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Occupied`](crate::Error::Occupied) if the cell
    /// already holds a mark.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, mv: Move, player: Player) -> Result<Board, crate::Error> {
        if !self.is_empty(mv) {
            return Err(crate::Error::Occupied {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = player.to_cell();
        Ok(next)
    }

    /// All empty coordinates in row-major order. Empty when the board is full.
    pub fn empty_cells(&self) -> Vec<Move> {
        Move::all().filter(|&mv| self.is_empty(mv)).collect()
    }

    /// Count pieces on the board
    pub fn counts(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Owner of the first complete line (rows, then columns, then diagonals)
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_line(&self.cells).map(|(player, _)| player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// The player to move under alternating play, given who opened.
    ///
    /// Returns `None` when the piece counts cannot come from alternating
    /// play with `first` opening.
    pub fn implied_to_move(&self, first: Player) -> Option<Player> {
        let count = self.counts();
        let opened = count.of(first);
        let replied = count.of(first.opponent());
        if opened == replied {
            Some(first)
        } else if opened == replied + 1 {
            Some(first.opponent())
        } else {
            None
        }
    }

    /// Check the alternation invariant and that at most one side has a line.
    pub fn is_valid_position(&self, first: Player) -> bool {
        if self.implied_to_move(first).is_none() {
            return false;
        }
        !(self.has_won(Player::X) && self.has_won(Player::O))
    }

    /// Base-3 packing of the cell contents, row-major, cell 0 least significant.
    ///
    /// Two boards have the same key exactly when their cells are equal. The
    /// key carries no turn information.
    pub fn key(&self) -> u32 {
        self.cells
            .iter()
            .rev()
            .fold(0, |acc, cell| acc * 3 + cell.digit())
    }

    /// Inverse of [`key`](Self::key). `None` for values past `3^9 - 1`.
    pub fn from_key(key: u32) -> Option<Board> {
        if key >= 3u32.pow(CELL_COUNT as u32) {
            return None;
        }
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut rest = key;
        for cell in &mut cells {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            rest /= 3;
        }
        Some(Board { cells })
    }

    /// Nine-character string of the cells, e.g. `"XX.OO...."`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            } else if i < CELL_COUNT - 1 {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}
