//! Error types for the Freedom engine

use thiserror::Error;

use crate::board::Pos;

/// Why a proposed placement was rejected.
///
/// Every variant is recoverable: the front end asks for another move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("'{token}' is not a non-negative integer")]
    Parse { token: String },

    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("{pos} is already occupied")]
    Occupied { pos: Pos },

    #[error("{pos} is not adjacent to the last placed stone {last}")]
    NotAdjacent { pos: Pos, last: Pos },

    #[error("game already over")]
    GameOver,
}

/// Errors raised while building a game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown difficulty '{0}' (expected beginner, novice or experienced)")]
    UnknownDifficulty(String),

    #[error("config validation error: {0}")]
    Validation(String),
}
