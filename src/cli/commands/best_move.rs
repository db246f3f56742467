//! Best-move command - a single decision for a given board

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    app::{App, EngineKind},
    cli::{
        EngineArgs,
        output::{print_kv, print_section, print_subsection},
    },
    playout::ScoreGrid,
    solver::{Score, SearchStats},
    tictactoe::{Board, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Pick a move for one position")]
pub struct BestMoveArgs {
    /// Board as nine cells, row-major; `/` and spaces are ignored
    /// (e.g. `XX./OO./...`)
    pub board: String,

    /// Player to move; inferred from the piece counts with X opening when omitted
    #[arg(long)]
    pub to_move: Option<Player>,

    /// Mark whose wins score +1 for the minimax engine; defaults to the player to move
    #[arg(long)]
    pub maximizer: Option<Player>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one decision
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveReport {
    pub board: String,
    pub to_move: Player,
    pub engine: EngineKind,
    #[serde(rename = "move")]
    pub mv: Move,
    pub row: usize,
    pub col: usize,
    /// Minimax score of every empty cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<MoveScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
    /// Playout score grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<ScoreGrid>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveScore {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: Score,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let report = decide(&args)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Run the configured engine on the parsed board.
pub fn decide(args: &BestMoveArgs) -> Result<BestMoveReport> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("parsing board {:?}", args.board))?;
    let to_move = match args.to_move {
        Some(player) => player,
        None => board
            .implied_to_move(Player::X)
            .ok_or_else(|| anyhow!("cannot infer the player to move; pass --to-move"))?,
    };

    let config = args.engine.to_config(args.maximizer.unwrap_or(to_move));
    config.validate()?;
    let app = App::new();

    let (mv, scores, stats, grid) = match config.kind {
        EngineKind::Minimax => {
            let mut solver = app.create_solver(&config);
            let scored = solver.evaluate_moves(&board, to_move)?;
            let (mv, _) = solver
                .choose(&scored, to_move)
                .ok_or(crate::Error::NoValidMoves)?;
            let scores = scored
                .into_iter()
                .map(|(mv, score)| MoveScore { mv, score })
                .collect();
            (mv, Some(scores), Some(solver.stats()), None)
        }
        EngineKind::Playout => {
            let mut estimator = app.create_estimator(&config)?;
            let (mv, grid) = estimator.best_move_with_grid(&board, to_move)?;
            (mv, None, None, Some(grid))
        }
    };

    Ok(BestMoveReport {
        board: board.encode(),
        to_move,
        engine: config.kind,
        mv,
        row: mv.row(),
        col: mv.col(),
        scores,
        stats,
        grid,
    })
}

fn print_report(report: &BestMoveReport) {
    print_section("Best Move");
    if let Ok(board) = Board::from_string(&report.board) {
        println!("{board}");
    }
    println!();
    print_kv("Engine", report.engine.as_str());
    print_kv("To move", &report.to_move.to_string());
    print_kv("Move", &report.mv.to_string());

    if let Some(scores) = &report.scores {
        print_subsection("Minimax scores");
        for entry in scores {
            print_kv(&entry.mv.to_string(), &format!("{:+}", entry.score));
        }
    }
    if let Some(stats) = &report.stats {
        print_kv("Nodes", &stats.nodes.to_string());
        print_kv("Table size", &stats.table_size.to_string());
    }
    if let Some(grid) = &report.grid {
        print_subsection("Playout scores");
        println!("{grid}");
    }
}
