//! Playout estimator: Monte Carlo move scoring

pub mod estimator;
pub mod score_grid;

pub use estimator::{DEFAULT_TRIALS, PlayoutEstimator};
pub use score_grid::ScoreGrid;
