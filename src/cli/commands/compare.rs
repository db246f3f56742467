//! Compare command - play two engines against each other

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::{App, EngineConfig, EngineKind},
    cli::output::{format_percent, print_kv, print_section},
    pipeline::{
        MatchResult, MatchRunner, MetricsObserver, MetricsSummary, Opener, ProgressObserver,
        TracingObserver,
    },
    ports::GameObserver,
    solver::CacheLifetime,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play one engine against another")]
pub struct CompareArgs {
    /// Engine playing X
    #[arg(long = "x-engine", default_value = "playout")]
    pub x_engine: EngineKind,

    /// Engine playing O
    #[arg(long = "o-engine", default_value = "minimax")]
    pub o_engine: EngineKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Playouts per decision for playout engines
    #[arg(long, short = 't', default_value_t = crate::playout::DEFAULT_TRIALS)]
    pub trials: usize,

    /// Random seed; each game reseeds both engines from it
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which side opens (`x`, `o` or `alternate`)
    #[arg(long, default_value = "alternate")]
    pub opener: Opener,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let (result, metrics) = run(&args, !args.no_progress && !args.json)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serializing match result")?;
        println!("{json}");
        return Ok(());
    }

    print_section("Match Results");
    print_kv("X", &result.x_engine);
    print_kv("O", &result.o_engine);
    print_kv("Games", &result.games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", result.x_wins, format_percent(result.win_rate(Player::X))),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", result.o_wins, format_percent(result.win_rate(Player::O))),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, format_percent(result.draw_rate())),
    );
    print_kv("Avg game length", &format!("{:.2}", result.avg_game_length()));
    if let (Some(shortest), Some(longest)) = (metrics.shortest_game, metrics.longest_game) {
        print_kv("Shortest / longest", &format!("{shortest} / {longest}"));
    }
    Ok(())
}

fn engine_config(kind: EngineKind, agent: Player, args: &CompareArgs) -> EngineConfig {
    let config = EngineConfig::new(kind)
        .with_agent(agent)
        .with_trials(args.trials)
        .with_cache_lifetime(CacheLifetime::PerSolver);
    match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Build both engines and play the match.
pub fn run(args: &CompareArgs, show_progress: bool) -> Result<(MatchResult, MetricsSummary)> {
    let app = App::new();
    let x = app
        .create_engine(&engine_config(args.x_engine, Player::X, args))
        .context("building the X engine")?;
    let o = app
        .create_engine(&engine_config(args.o_engine, Player::O, args))
        .context("building the O engine")?;

    let mut runner = MatchRunner::new(x, o).with_opener(args.opener);
    if let Some(seed) = args.seed {
        runner = runner.with_seed(seed);
    }

    let mut metrics = MetricsObserver::new();
    let mut tracing_observer = TracingObserver;
    let mut progress = ProgressObserver::new();
    let mut observers: Vec<&mut dyn GameObserver> = Vec::new();
    observers.push(&mut metrics);
    observers.push(&mut tracing_observer);
    if show_progress {
        observers.push(&mut progress);
    }

    let result = runner.run_with_observers(args.games, &mut observers)?;
    Ok((result, metrics.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimax_mirror_match_is_all_draws() {
        let args = CompareArgs::parse_from([
            "compare",
            "--x-engine",
            "minimax",
            "--o-engine",
            "minimax",
            "--games",
            "2",
        ]);
        let (result, metrics) = run(&args, false).unwrap();
        assert_eq!(result.draws, 2);
        assert_eq!(metrics.total_games, 2);
        assert_eq!(metrics.shortest_game, Some(9));
    }

    #[test]
    fn playout_never_beats_minimax() {
        let args = CompareArgs::parse_from(["compare", "--games", "4", "--trials", "20", "--seed", "5"]);
        let (result, _) = run(&args, false).unwrap();
        assert_eq!(result.games, 4);
        assert_eq!(result.x_wins, 0);
    }
}
