//! Stock observers for matches
//!
//! Observers collect data while a match runs without coupling the runner to
//! any particular output.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Move, Outcome, Player},
};

/// Progress bar observer - shows match progress on stderr
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (X:{msg})")
                .map_err(|e| crate::Error::InvalidConfiguration {
                    message: format!("progress bar template: {e}"),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, _board: &Board, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Metrics observer - tracks outcomes and game lengths
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    pub fn win_rate(&self, player: Player) -> f64 {
        let wins = match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        };
        rate(wins, self.total_games)
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.total_games)
    }

    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            x_win_rate: self.win_rate(Player::X),
            o_win_rate: self.win_rate(Player::O),
            draw_rate: self.draw_rate(),
            avg_game_length: self.avg_game_length(),
            shortest_game: self.move_counts.iter().copied().min(),
            longest_game: self.move_counts.iter().copied().max(),
        }
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Summary of match metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
    pub avg_game_length: f64,
    pub shortest_game: Option<usize>,
    pub longest_game: Option<usize>,
}

impl GameObserver for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize, _first_player: Player) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(&mut self, _board: &Board, _mv: Move, _player: Player) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _board: &Board, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return Ok(()),
        }
        self.total_games += 1;
        Ok(())
    }
}

/// Emits every event as a `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, game_num: usize, first_player: Player) -> Result<()> {
        debug!(game = game_num, first = %first_player, "game started");
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move, player: Player) -> Result<()> {
        debug!(%player, %mv, board = %board.encode(), "move applied");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, board: &Board, outcome: Outcome) -> Result<()> {
        info!(game = game_num, ?outcome, board = %board.encode(), "game finished");
        Ok(())
    }
}
