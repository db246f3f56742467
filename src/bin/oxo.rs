//! oxo CLI - noughts-and-crosses decision engines
//!
//! This CLI provides:
//! - Single decisions for a given board (exact minimax or playout estimate)
//! - Engine-versus-engine matches
//! - Interactive play against an engine

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Noughts-and-crosses decision engines", long_about = None)]
struct Cli {
    /// Log engine decisions (debug level) unless RUST_LOG is set
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a move for one position
    BestMove(oxo::cli::commands::best_move::BestMoveArgs),

    /// Play one engine against another
    Compare(oxo::cli::commands::compare::CompareArgs),

    /// Play against an engine
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "oxo=debug" } else { "oxo=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::BestMove(args) => oxo::cli::commands::best_move::execute(args),
        Commands::Compare(args) => oxo::cli::commands::compare::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
