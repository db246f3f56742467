//! Play command - a human against an engine over stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    app::App,
    cli::{EngineArgs, output::write_board},
    ports::MoveEngine,
    tictactoe::{Board, Game, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against an engine")]
pub struct PlayArgs {
    /// Mark you play
    #[arg(long, default_value = "x")]
    pub human: Player,

    /// Mark that opens the game
    #[arg(long, default_value = "x")]
    pub first: Player,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.engine.to_config(args.human.opponent());
    let mut engine = App::new()
        .create_engine(&config)
        .context("building the engine")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        engine.as_mut(),
        args.human,
        args.first,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    Ok(())
}

/// Why a line of input was not accepted as a move
enum Rejection {
    Malformed,
    OutOfRange { row: usize, col: usize },
    Occupied(Move),
}

fn parse_move(line: &str, board: &Board) -> std::result::Result<Move, Rejection> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| Rejection::Malformed)?;
    let [row, col] = numbers[..] else {
        return Err(Rejection::Malformed);
    };
    let mv = Move::new(row, col).map_err(|_| Rejection::OutOfRange { row, col })?;
    if !board.is_empty(mv) {
        return Err(Rejection::Occupied(mv));
    }
    Ok(mv)
}

/// Read lines until one names a free cell.
fn read_human_move<R: BufRead, W: Write>(input: &mut R, out: &mut W, board: &Board) -> Result<Move> {
    writeln!(out, "Enter your move as: row col")?;
    loop {
        let mut line = String::new();
        if input.read_line(&mut line).context("reading move")? == 0 {
            bail!("input closed before the game finished");
        }
        match parse_move(&line, board) {
            Ok(mv) => return Ok(mv),
            Err(Rejection::Malformed) => {
                writeln!(out, "Enter two numbers separated by a space.")?;
            }
            Err(Rejection::OutOfRange { row, col }) => {
                writeln!(out, "({row}, {col}) is off the board; use 0, 1 or 2.")?;
            }
            Err(Rejection::Occupied(mv)) => {
                writeln!(out, "The cell {mv} is not free.")?;
            }
        }
    }
}

/// Play one game, reading the human's moves from `input`.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut dyn MoveEngine,
    human: Player,
    first: Player,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let mut game = Game::new_with_player(first);
    writeln!(out, "You play {human}; {} opens.", first)?;

    while !game.board().is_terminal() {
        writeln!(out)?;
        write_board(out, game.board())?;
        let to_move = game.to_move();
        let mv = if to_move == human {
            read_human_move(input, out, game.board())?
        } else {
            let mv = engine.best_move(game.board(), to_move)?;
            writeln!(out, "{} plays {mv}", engine.name())?;
            mv
        };
        game.play(mv)?;
    }

    writeln!(out)?;
    write_board(out, game.board())?;
    let outcome = game.outcome();
    match outcome {
        Outcome::Win(player) if player == human => writeln!(out, "*** You win ***")?,
        Outcome::Win(_) => writeln!(out, "*** {} wins ***", engine.name())?,
        _ => writeln!(out, "Game over, it's a draw.")?,
    }
    Ok(outcome)
}
