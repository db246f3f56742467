//! Decision engines for 3×3 noughts and crosses
//!
//! This crate provides:
//! - A pure board model with win/draw detection
//! - An exact solver (memoized minimax) that never loses
//! - A Monte Carlo playout estimator with pluggable randomness
//! - A match runner and observers for engine-versus-engine games
//! - A command-line interface (`oxo`)
//!
//! ```
//! use oxo::{Board, MinimaxSolver, MoveEngine, Player};
//!
//! let board = Board::from_string("OO./.X./...")?;
//! let mut solver = MinimaxSolver::new(Player::X);
//! let mv = solver.best_move(&board, Player::X)?;
//! assert_eq!((mv.row(), mv.col()), (0, 2));
//! # Ok::<(), oxo::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod playout;
pub mod ports;
pub mod solver;
pub mod tictactoe;

pub use adapters::{ScriptedRandom, StdRandom};
pub use app::{App, EngineConfig, EngineKind};
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{MatchResult, MatchRunner, Opener};
pub use playout::{PlayoutEstimator, ScoreGrid};
pub use ports::{GameObserver, MoveEngine, RandomSource};
pub use solver::{CacheLifetime, MinimaxSolver, SearchStats};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Player};
