//! Errors used throughout the engine.
//!
//! Move generation and undo cannot fail. Errors arise only from parsing text
//! input (squares, FEN) and from `apply_move` being handed a move that does not
//! fit the current board, which is a caller contract violation.

use thiserror::Error;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Square text such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),

    /// A FEN field was missing or malformed.
    #[error("invalid FEN {field} field: {reason}")]
    InvalidFen { field: &'static str, reason: String },

    /// The position does not hold exactly one king of `color`.
    #[error("position must contain exactly one {color} king, found {found}")]
    KingCount { color: &'static str, found: usize },

    /// The position could not have arisen in play: the side not to move is
    /// in check, or the en-passant target has no pawn that just skipped it.
    #[error("illegal position: {0}")]
    IllegalPosition(&'static str),

    /// `apply_move` was given a move that was not generated from the current
    /// position. Nothing was mutated.
    #[error("move {notation} does not apply to the current position: {reason}")]
    MoveNotApplicable { notation: String, reason: &'static str },
}

impl ChessError {
    pub(crate) fn fen(field: &'static str, reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            field,
            reason: reason.into(),
        }
    }
}
