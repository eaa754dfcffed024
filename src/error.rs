//! Error types for the gomoku-agents crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the gomoku-agents crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board size {size} is not supported here (expected {expected}x{expected})")]
    UnsupportedBoardSize { size: usize, expected: usize },

    #[error("invalid board size {size}: {reason}")]
    InvalidBoardSize { size: usize, reason: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid canonical key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("malformed value table {path:?} at line {line}: {reason}")]
    MalformedTable {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
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
