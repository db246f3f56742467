//! Observer port - move and terminal-state notifications for drivers

use crate::{
    Result,
    tictactoe::{Board, Move, Outcome, Player},
};

/// Observer of games played by a driver.
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num, first_player)`
///    - `on_move(board, mv, player)` - after each applied move, with the
///      board as it stands after the move
///    - `on_game_end(game_num, board, outcome)` - once the board is terminal
/// 3. `on_match_end()` - once
///
/// Every method defaults to doing nothing.
pub trait GameObserver: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize, _first_player: Player) -> Result<()> {
        Ok(())
    }

    fn on_move(&mut self, _board: &Board, _mv: Move, _player: Player) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _board: &Board, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
