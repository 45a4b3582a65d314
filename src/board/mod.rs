//! Chess board representation and rules.
//!
//! A mailbox board (8x8 grid of owned pieces) with per-kind movement
//! patterns, attack and check detection, single-move simulation with
//! guaranteed rollback, and the special-move rules (castling, promotion,
//! en passant).
//!
//! # Example
//! ```
//! use cli_chess::board::{Board, Color};
//!
//! let board = Board::new();
//! assert!(!board.is_in_check(Color::White));
//! ```

mod error;
mod patterns;
pub mod special;
mod state;
mod types;


pub use error::{MoveError, SquareError};
pub use special::CastleSide;
pub use state::Board;
pub use types::{Color, Piece, PieceKind, Square};
