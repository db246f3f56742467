//! Configuration types for engine creation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    playout::DEFAULT_TRIALS,
    solver::CacheLifetime,
    tictactoe::Player,
};

/// Which decision engine to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    /// Exact memoized minimax
    #[default]
    Minimax,
    /// Monte Carlo playout estimator
    Playout,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Minimax => "minimax",
            EngineKind::Playout => "playout",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "exact" => Ok(EngineKind::Minimax),
            "playout" | "monte-carlo" | "mc" => Ok(EngineKind::Playout),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown engine '{other}' (expected 'minimax' or 'playout')"),
            }),
        }
    }
}

/// Configuration for creating a decision engine.
///
/// # Examples
///
/// ```
/// use oxo::app::{EngineConfig, EngineKind};
/// use oxo::tictactoe::Player;
///
/// let config = EngineConfig::new(EngineKind::Playout)
///     .with_agent(Player::X)
///     .with_trials(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub kind: EngineKind,
    /// The automated side; the minimax maximizer
    pub agent: Player,
    /// Playouts per decision (playout engine only)
    pub trials: usize,
    /// Random seed for reproducibility (playout engine only)
    pub seed: Option<u64>,
    /// Transposition table lifetime (minimax engine only)
    pub cache_lifetime: CacheLifetime,
}

impl EngineConfig {
    /// Create a configuration with defaults: agent O, 100 trials, no seed,
    /// per-solver cache.
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            agent: Player::O,
            trials: DEFAULT_TRIALS,
            seed: None,
            cache_lifetime: CacheLifetime::default(),
        }
    }

    pub fn with_agent(mut self, agent: Player) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cache_lifetime(mut self, lifetime: CacheLifetime) -> Self {
        self.cache_lifetime = lifetime;
        self
    }

    /// Reject configurations no engine can run with.
    pub fn validate(&self) -> Result<()> {
        if self.kind == EngineKind::Playout && self.trials == 0 {
            return Err(crate::Error::InvalidTrials {
                trials: self.trials,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(EngineKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_names() {
        assert_eq!("minimax".parse::<EngineKind>().unwrap(), EngineKind::Minimax);
        assert_eq!("Playout".parse::<EngineKind>().unwrap(), EngineKind::Playout);
        assert!("alphabeta".parse::<EngineKind>().is_err());
    }

    #[test]
    fn zero_trials_only_matters_for_playout() {
        assert!(EngineConfig::new(EngineKind::Minimax).with_trials(0).validate().is_ok());
        assert!(matches!(
            EngineConfig::new(EngineKind::Playout).with_trials(0).validate(),
            Err(crate::Error::InvalidTrials { trials: 0 })
        ));
    }
}
