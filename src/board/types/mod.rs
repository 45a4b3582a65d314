//! Core value types for the board.

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
