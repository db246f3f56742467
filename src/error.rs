//! Error types for the oxo crate

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Every variant is either a precondition the caller broke, a bad engine
/// configuration, or an I/O failure at the driver boundary. None of them are
/// transient, so nothing in the crate retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Configuration,
    Io,
}

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("it is {expected:?}'s turn, not {got:?}'s")]
    WrongTurn {
        expected: crate::tictactoe::Player,
        got: crate::tictactoe::Player,
    },

    #[error("board string must hold {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("trial count must be positive, got {trials}")]
    InvalidTrials { trials: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTrials { .. } | Error::InvalidConfiguration { .. } => {
                ErrorKind::Configuration
            }
            Error::Io { .. } => ErrorKind::Io,
            _ => ErrorKind::Precondition,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
