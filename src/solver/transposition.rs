//! Transposition table for the exact solver

use std::collections::HashMap;

use crate::tictactoe::{Board, Player};

/// Minimax score from the maximizer's point of view
pub type Score = i32;

/// Score of a position the maximizer has won
pub const WIN: Score = 1;
/// Score of a drawn position
pub const DRAW: Score = 0;
/// Score of a position the maximizer has lost
pub const LOSS: Score = -1;

/// Cache key: packed cell contents plus the player to move.
///
/// Under strictly alternating play from a fixed opener the cells alone
/// determine the mover. The same cells can still be reached with either
/// player to move once the opener varies, so the mover is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    cells: u32,
    to_move: Player,
}

impl PositionKey {
    pub fn new(board: &Board, to_move: Player) -> Self {
        Self {
            cells: board.key(),
            to_move,
        }
    }

    /// Packed cell contents, see [`Board::key`]
    pub fn cells(&self) -> u32 {
        self.cells
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Rebuild the board this key was made from
    pub fn board(&self) -> Option<Board> {
        Board::from_key(self.cells)
    }
}

/// Append-only map from position to minimax score.
///
/// Scores depend only on the position and the solver's fixed maximizer, so
/// an entry never goes stale. The table only grows; [`clear`](Self::clear)
/// is the single way to drop entries and is used by per-search solvers.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, Score>,
    hits: u64,
    misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a score, counting the hit or miss.
    pub fn probe(&mut self, key: &PositionKey) -> Option<Score> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Look up a score without touching the counters.
    pub fn get(&self, key: &PositionKey) -> Option<Score> {
        self.entries.get(key).copied()
    }

    /// Record a score. An existing entry is kept as is.
    pub fn insert(&mut self, key: PositionKey, score: Score) {
        let stored = *self.entries.entry(key).or_insert(score);
        debug_assert_eq!(
            stored, score,
            "position {key:?} re-evaluated to a different score"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn keys(&self) -> impl Iterator<Item = &PositionKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PositionKey, &Score)> {
        self.entries.iter()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
