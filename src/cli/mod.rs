//! Command-line interface for the `oxo` engine
//!
//! This module provides single decisions, engine-versus-engine comparisons and
//! interactive play against an engine.

pub mod commands;
pub mod output;

use clap::Args;

use crate::{
    app::{EngineConfig, EngineKind},
    solver::CacheLifetime,
    tictactoe::Player,
};

/// Engine flags shared by the commands
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Engine to use (`minimax` or `playout`)
    #[arg(long, short = 'e', default_value = "minimax")]
    pub engine: EngineKind,

    /// Playouts per decision for the playout engine
    #[arg(long, short = 't', default_value_t = crate::playout::DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Clear the minimax table before every decision
    #[arg(long)]
    pub cold_cache: bool,
}

impl EngineArgs {
    /// Engine configuration for the side playing `agent`
    pub fn to_config(&self, agent: Player) -> EngineConfig {
        let lifetime = if self.cold_cache {
            CacheLifetime::PerSearch
        } else {
            CacheLifetime::PerSolver
        };
        let config = EngineConfig::new(self.engine)
            .with_agent(agent)
            .with_trials(self.trials)
            .with_cache_lifetime(lifetime);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
