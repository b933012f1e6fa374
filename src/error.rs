//! Error types for board construction, placement and parsing.

use thiserror::Error;

/// Errors raised when constructing a [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {0} (expected a positive size)")]
    InvalidSize(usize),
}

/// Reasons a placement is rejected. The board is never modified when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// Colour token is not `black` or `white`
    #[error("invalid color")]
    InvalidColor,
    /// Coordinate outside `[0, size)`
    #[error("proposed play not on board")]
    OutOfBounds,
    /// Intersection already holds a stone
    #[error("occupied territory")]
    Occupied,
    /// The new chain would have zero liberties
    #[error("suicide: move leaves the chain without liberties")]
    NoLiberties,
}

/// Errors raised when parsing rendered board text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty board text")]
    Empty,
    /// Row `row` has `len` cells but the board has `size` rows.
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("unexpected character {0:?}")]
    BadChar(char),
}
