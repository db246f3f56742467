//! CLI subcommands

pub mod best_move;
pub mod compare;
pub mod play;
