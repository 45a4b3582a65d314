//! Special moves: castling, pawn promotion, and en passant.
//!
//! Stateless rule functions over a [`Board`]. Eligibility checks and
//! executors are split: [`castle`] and [`perform_en_passant`] assume
//! their corresponding predicate has already passed and perform no
//! validation of their own.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Board;
use super::types::{Color, Piece, PieceKind, Square};

/// Which rook the king castles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    /// Rook's home column for this side
    #[inline]
    const fn rook_col(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Columns strictly between king and rook
    const fn between(self) -> &'static [usize] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// Columns the king occupies or transits, destination included.
    /// The queenside rook's transit square (col 1) is deliberately
    /// absent: only the king's path must be free of attacks.
    const fn king_path(self) -> [usize; 3] {
        match self {
            CastleSide::King => [4, 5, 6],
            CastleSide::Queen => [4, 3, 2],
        }
    }

    /// King's destination column
    #[inline]
    const fn king_target_col(self) -> usize {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Rook's destination column, adjacent to the castled king
    #[inline]
    const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::King => write!(f, "kingside"),
            CastleSide::Queen => write!(f, "queenside"),
        }
    }
}

/// Whether `color` may castle on `side` right now.
///
/// Requires an unmoved king and rook of the right kind and color on
/// their home squares (checked defensively against corrupted squares),
/// every square strictly between them empty, and no square on the
/// king's path — current square and destination included — attacked by
/// the opponent.
#[must_use]
pub fn can_castle(color: Color, side: CastleSide, board: &Board) -> bool {
    let row = color.back_row();

    let Some(king) = board.piece_at(Square::at(row, 4)) else {
        return false;
    };
    let Some(rook) = board.piece_at(Square::at(row, side.rook_col())) else {
        return false;
    };

    if king.kind != PieceKind::King || rook.kind != PieceKind::Rook {
        return false;
    }
    if king.color != color || rook.color != color {
        return false;
    }
    if king.has_moved || rook.has_moved {
        return false;
    }

    if side
        .between()
        .iter()
        .any(|&col| !board.is_empty(Square::at(row, col)))
    {
        return false;
    }

    let enemy = color.opponent();
    side.king_path()
        .iter()
        .all(|&col| !board.is_under_attack(Square::at(row, col), enemy))
}

/// Execute castling for `color` on `side`: the king moves two columns
/// toward the rook and the rook lands on the far side of the king.
/// Both pieces are marked as moved.
///
/// The caller must have validated with [`can_castle`]; this performs no
/// checks of its own.
pub fn castle(color: Color, side: CastleSide, board: &mut Board) {
    let row = color.back_row();
    board.move_piece(Square::at(row, 4), Square::at(row, side.king_target_col()));
    board.move_piece(
        Square::at(row, side.rook_col()),
        Square::at(row, side.rook_target_col()),
    );
}

/// Replace the pawn on `square` with a fresh piece of the same color
/// chosen by `letter` (Q/R/B/N, case-insensitive; anything else
/// promotes to a queen).
///
/// Returns the kind promoted to, or `None` — leaving the board
/// untouched — if the square is empty or does not hold a pawn.
pub fn promote(square: Square, letter: char, board: &mut Board) -> Option<PieceKind> {
    let pawn = board.piece_at(square)?;
    if pawn.kind != PieceKind::Pawn {
        return None;
    }

    let kind = promotion_kind(letter);
    board.place(square, Piece::new(kind, pawn.color));
    Some(kind)
}

/// Promotion letter to piece kind; unrecognized letters default to
/// queen.
fn promotion_kind(letter: char) -> PieceKind {
    match letter.to_ascii_lowercase() {
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        _ => PieceKind::Queen,
    }
}

/// Whether `from -> to` is an en passant capture: a pawn moving onto
/// the currently available en passant target.
///
/// Geometry is not re-checked here; this is only consulted after the
/// pawn's own pattern predicate has passed.
#[must_use]
pub fn is_en_passant(from: Square, to: Square, board: &Board) -> bool {
    board
        .piece_at(from)
        .is_some_and(|p| p.kind == PieceKind::Pawn)
        && board.en_passant_target() == Some(to)
}

/// Execute an en passant capture: relocate the pawn and remove the
/// passed pawn, which sits on the same row as `from` in the column of
/// `to`. Returns the captured pawn.
pub fn perform_en_passant(from: Square, to: Square, board: &mut Board) -> Option<Piece> {
    let captured = board.remove(Square::at(from.row(), to.col()));
    board.move_piece(from, to);
    captured
}
