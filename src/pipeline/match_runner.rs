//! Engine-versus-engine matches
//!
//! The runner is the driver the decision core expects: it hands each engine
//! the current board and the player to move, applies the returned move, and
//! re-checks the terminal state after every move.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    Result,
    ports::{GameObserver, MoveEngine},
    tictactoe::{Game, Outcome, Player},
};

/// Which side opens each game of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opener {
    #[default]
    X,
    O,
    /// X opens even-numbered games, O odd-numbered ones
    Alternate,
}

impl Opener {
    pub fn for_game(self, game_num: usize) -> Player {
        match self {
            Opener::X => Player::X,
            Opener::O => Player::O,
            Opener::Alternate if game_num.is_multiple_of(2) => Player::X,
            Opener::Alternate => Player::O,
        }
    }
}

impl FromStr for Opener {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Opener::X),
            "o" => Ok(Opener::O),
            "alternate" | "alt" => Ok(Opener::Alternate),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown opener '{other}' (expected x, o or alternate)"),
            }),
        }
    }
}

/// Tally of a finished match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Name of the engine playing X
    pub x_engine: String,
    /// Name of the engine playing O
    pub o_engine: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchResult {
    pub fn new(x_engine: String, o_engine: String) -> Self {
        Self {
            x_engine,
            o_engine,
            games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            total_moves: 0,
        }
    }

    /// Record one finished game
    pub fn record(&mut self, outcome: Outcome, moves: usize) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.games += 1;
        self.total_moves += moves;
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins(player) as f64 / self.games as f64
        }
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.draws as f64 / self.games as f64
        }
    }

    pub fn avg_game_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Plays one engine as X against another as O.
pub struct MatchRunner {
    x_engine: Box<dyn MoveEngine>,
    o_engine: Box<dyn MoveEngine>,
    opener: Opener,
    seed: Option<u64>,
}

impl MatchRunner {
    pub fn new(x_engine: Box<dyn MoveEngine>, o_engine: Box<dyn MoveEngine>) -> Self {
        Self {
            x_engine,
            o_engine,
            opener: Opener::default(),
            seed: None,
        }
    }

    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// Reseed both engines before every game from `seed` and the game number,
    /// making each game reproducible on its own.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn engine(&self, player: Player) -> &dyn MoveEngine {
        match player {
            Player::X => self.x_engine.as_ref(),
            Player::O => self.o_engine.as_ref(),
        }
    }

    fn engine_mut(&mut self, player: Player) -> &mut dyn MoveEngine {
        match player {
            Player::X => self.x_engine.as_mut(),
            Player::O => self.o_engine.as_mut(),
        }
    }

    /// Play a single game to completion.
    pub fn play_game(
        &mut self,
        game_num: usize,
        observers: &mut [&mut dyn GameObserver],
    ) -> Result<Game> {
        let first = self.opener.for_game(game_num);
        if let Some(seed) = self.seed {
            let game_seed = seed.wrapping_add(game_num as u64);
            self.x_engine.reseed(game_seed);
            self.o_engine.reseed(game_seed.wrapping_add(1));
        }

        let mut game = Game::new_with_player(first);
        for observer in observers.iter_mut() {
            observer.on_game_start(game_num, first)?;
        }

        while !game.board().is_terminal() {
            let to_move = game.to_move();
            let board = *game.board();
            let mv = self.engine_mut(to_move).best_move(&board, to_move)?;
            game.play(mv)?;
            for observer in observers.iter_mut() {
                observer.on_move(game.board(), mv, to_move)?;
            }
        }

        for observer in observers.iter_mut() {
            observer.on_game_end(game_num, game.board(), game.outcome())?;
        }
        Ok(game)
    }

    /// Play `games` games without observers.
    pub fn run(&mut self, games: usize) -> Result<MatchResult> {
        self.run_with_observers(games, &mut [])
    }

    /// Play `games` games, notifying every observer.
    pub fn run_with_observers(
        &mut self,
        games: usize,
        observers: &mut [&mut dyn GameObserver],
    ) -> Result<MatchResult> {
        let mut result = MatchResult::new(
            self.x_engine.name().to_string(),
            self.o_engine.name().to_string(),
        );

        for observer in observers.iter_mut() {
            observer.on_match_start(games)?;
        }
        for game_num in 0..games {
            let game = self.play_game(game_num, observers)?;
            result.record(game.outcome(), game.moves().len());
        }
        for observer in observers.iter_mut() {
            observer.on_match_end()?;
        }

        info!(
            x = %result.x_engine,
            o = %result.o_engine,
            games = result.games,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }
}
