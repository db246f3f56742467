//! Winning line analysis for the 3x3 board

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Return the common mark of a line, or `Cell::Empty` if the line is not
/// fully owned by one side.
pub fn evaluate_line(line: [Cell; 3]) -> Cell {
    let [first, second, third] = line;
    if first != Cell::Empty && first == second && second == third {
        first
    } else {
        Cell::Empty
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Cells of one line, read from the board
    pub fn line_cells(cells: &[Cell; 9], line: &[usize; 3]) -> [Cell; 3] {
        [cells[line[0]], cells[line[1]], cells[line[2]]]
    }

    /// The first fully owned line in scan order, with its owner.
    ///
    /// Rows are scanned before columns, columns before diagonals. A board
    /// with lines for both marks cannot arise from alternating play and is
    /// not treated specially.
    pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        WINNING_LINES.iter().find_map(|line| {
            evaluate_line(Self::line_cells(cells, line))
                .to_player()
                .map(|player| (player, *line))
        })
    }

    /// Check if a player has three in a row anywhere
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| evaluate_line(Self::line_cells(cells, line)) == target)
    }
}
