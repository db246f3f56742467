//! Match pipeline: engine-versus-engine games and their observers

pub mod match_runner;
pub mod observers;

pub use match_runner::{MatchResult, MatchRunner, Opener};
pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver, TracingObserver};

pub use crate::ports::{GameObserver, MoveEngine};
