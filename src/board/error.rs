//! Error types for chess rule operations.

use std::fmt;

use super::special::CastleSide;
use super::types::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a proposed move was not played.
///
/// Every variant is a recoverable rejection: the board is unchanged and
/// the same player is still to move. `InvalidNotation` is malformed
/// input; the others are rule violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A square string was not valid algebraic notation
    InvalidNotation { notation: String },
    /// The source square holds no piece
    NoPieceAtSource { square: Square },
    /// The piece on the source square belongs to the opponent
    WrongColor { square: Square, expected: Color },
    /// The piece's movement pattern cannot reach the target square
    IllegalMove { from: Square, to: Square },
    /// The move would leave the mover's own king under attack
    KingExposed { from: Square, to: Square },
    /// Castling on the requested side is not currently legal
    IllegalCastle { side: CastleSide },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidNotation { notation } => {
                write!(f, "Invalid square '{notation}' (expected file a-h and rank 1-8)")
            }
            MoveError::NoPieceAtSource { square } => {
                write!(f, "No piece at {square}")
            }
            MoveError::WrongColor { square, expected } => {
                write!(f, "The piece at {square} does not belong to {expected}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "The piece at {from} cannot move to {to}")
            }
            MoveError::KingExposed { from, to } => {
                write!(f, "Moving {from} to {to} would leave the king in check")
            }
            MoveError::IllegalCastle { side } => {
                write!(f, "Cannot castle {side}")
            }
            MoveError::GameOver => {
                write!(f, "The game is already over")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        let notation = match e {
            SquareError::InvalidNotation { notation } => notation,
            other => other.to_string(),
        };
        MoveError::InvalidNotation { notation }
    }
}
