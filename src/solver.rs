//! Exact solver: memoized minimax

pub mod minimax;
pub mod transposition;

pub use minimax::{CacheLifetime, MinimaxSolver, SearchStats};
pub use transposition::{DRAW, LOSS, PositionKey, Score, TranspositionTable, WIN};
