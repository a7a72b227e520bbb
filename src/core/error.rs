//! Error types for board construction and input parsing.
//!
//! Engine operations never fail; they report "nothing happened" as `false`.
//! Errors only arise at the edges, when a caller hands us raw data.

use thiserror::Error;

/// Errors surfaced when building a board or parsing a direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected {expected} cells, got {actual}")]
    WrongCellCount { expected: usize, actual: usize },

    #[error("cell {index} holds {value}, which is neither 0 nor a power of two >= 2")]
    InvalidTile { index: usize, value: u32 },

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
