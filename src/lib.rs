//! A two-player console chess game.
//!
//! The rules engine lives in [`board`] (movement patterns, attack and
//! check detection, special moves) and [`game`] (turn sequencing and
//! terminal states). [`console`] is a thin text front end over them.

pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, CastleSide, Color, MoveError, Piece, PieceKind, Square};
pub use game::{Game, GameStatus, MoveOutcome, Player};
