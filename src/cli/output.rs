//! Output formatting for the CLI

use std::io::Write;

use crate::tictactoe::{BOARD_SIZE, Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Format a ratio as a percentage with one decimal
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Write a board with row and column labels.
///
/// ```text
///     0 1 2
///   0 X . O
///   1 . X .
///   2 . . .
/// ```
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> std::io::Result<()> {
    let header: Vec<String> = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
    writeln!(out, "    {}", header.join(" "))?;
    for (row, line) in board.to_string().lines().enumerate() {
        writeln!(out, "  {row} {line}")?;
    }
    Ok(())
}
