//! Error types for the zerosum crate

use thiserror::Error;

/// Main error type for the zerosum crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("cell ({row}, {col}) is out of bounds (rows and columns run 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("board string has {got} cells, expected exactly {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position} in board string")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("utility requested for a non-terminal state")]
    NotTerminal,

    #[error("no legal actions available in this position")]
    NoActionsAvailable,

    #[error("cannot parse move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("input stream closed before a move was read")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
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
