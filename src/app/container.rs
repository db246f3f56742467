//! Engine container: builds configured engines and owns injectable
//! infrastructure (the random source factory).

use std::sync::Arc;

use tracing::debug;

use super::config::{EngineConfig, EngineKind};
use crate::{
    Result,
    adapters::StdRandom,
    playout::PlayoutEstimator,
    ports::{MoveEngine, RandomSource},
    solver::MinimaxSolver,
};

/// Factory producing a random source from an optional seed
pub type RandomSourceFactory = Arc<dyn Fn(Option<u64>) -> Box<dyn RandomSource> + Send + Sync>;

fn std_random_factory() -> RandomSourceFactory {
    Arc::new(|seed: Option<u64>| -> Box<dyn RandomSource> { Box::new(StdRandom::new(seed)) })
}

/// Application container.
///
/// # Examples
///
/// ```
/// use oxo::app::{App, EngineConfig, EngineKind};
/// use oxo::tictactoe::{Board, Player};
///
/// let app = App::for_testing().with_default_seed(42).build();
/// let mut engine = app.create_engine(&EngineConfig::new(EngineKind::Minimax))?;
/// let mv = engine.best_move(&Board::from_string("XX./OO./...")?, Player::O)?;
/// assert!(Board::from_string("XX./OO./...")?.is_empty(mv));
/// # Ok::<(), oxo::Error>(())
/// ```
pub struct App {
    random_factory: RandomSourceFactory,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults: `StdRandom`, no default seed.
    pub fn new() -> Self {
        Self {
            random_factory: std_random_factory(),
            default_seed: None,
        }
    }

    /// Create a builder for an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn default_seed(&self) -> Option<u64> {
        self.default_seed
    }

    /// Build the engine described by `config`.
    ///
    /// The config's seed takes precedence over the app's default seed.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn create_engine(&self, config: &EngineConfig) -> Result<Box<dyn MoveEngine>> {
        config.validate()?;
        debug!(kind = %config.kind, agent = %config.agent, "creating engine");
        match config.kind {
            EngineKind::Minimax => Ok(Box::new(self.create_solver(config))),
            EngineKind::Playout => Ok(Box::new(self.create_estimator(config)?)),
        }
    }

    /// Build a minimax solver maximizing for the configured agent.
    pub fn create_solver(&self, config: &EngineConfig) -> MinimaxSolver {
        MinimaxSolver::new(config.agent).with_cache_lifetime(config.cache_lifetime)
    }

    /// Build a playout estimator over the app's random source.
    pub fn create_estimator(
        &self,
        config: &EngineConfig,
    ) -> Result<PlayoutEstimator<Box<dyn RandomSource>>> {
        let seed = config.seed.or(self.default_seed);
        PlayoutEstimator::new(config.trials, (self.random_factory)(seed))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
pub struct AppBuilder {
    random_factory: Option<RandomSourceFactory>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            random_factory: None,
            default_seed: None,
        }
    }

    /// Replace the random source used by playout engines.
    pub fn with_random_source<F>(mut self, factory: F) -> Self
    where
        F: Fn(Option<u64>) -> Box<dyn RandomSource> + Send + Sync + 'static,
    {
        self.random_factory = Some(Arc::new(factory));
        self
    }

    /// Set a default random seed for all engines created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app. Without a custom factory, `StdRandom` is used.
    pub fn build(self) -> App {
        App {
            random_factory: self.random_factory.unwrap_or_else(std_random_factory),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::ScriptedRandom,
        tictactoe::{Board, Move, Player},
    };

    #[test]
    fn test_app_creates_both_engines() {
        let app = App::new();
        let minimax = app
            .create_engine(&EngineConfig::new(EngineKind::Minimax))
            .unwrap();
        let playout = app
            .create_engine(&EngineConfig::new(EngineKind::Playout))
            .unwrap();
        assert_eq!(minimax.name(), "minimax");
        assert_eq!(playout.name(), "playout");
    }

    #[test]
    fn rejects_invalid_config() {
        let app = App::new();
        let config = EngineConfig::new(EngineKind::Playout).with_trials(0);
        assert!(app.create_engine(&config).is_err());
    }

    #[test]
    fn injected_random_source_drives_playouts() {
        let app = App::for_testing()
            .with_random_source(|_| Box::new(ScriptedRandom::new(vec![1])))
            .build();
        let config = EngineConfig::new(EngineKind::Playout).with_trials(3);
        let mut engine = app.create_engine(&config).unwrap();

        let board = Board::from_string("XX./OO./...").unwrap();
        let mv = engine.best_move(&board, Player::X).unwrap();
        assert_eq!(mv, Move::new(1, 2).unwrap());
    }

    #[test]
    fn config_seed_overrides_app_default() {
        let app = App::for_testing().with_default_seed(42).build();
        let board = Board::from_string("X../.O./...").unwrap();

        let grid_for = |seed: Option<u64>| {
            let mut config = EngineConfig::new(EngineKind::Playout).with_agent(Player::X);
            config.seed = seed;
            app.create_estimator(&config)
                .unwrap()
                .score_grid(&board, Player::X)
                .unwrap()
        };

        assert_eq!(grid_for(None), grid_for(Some(42)));
    }
}
