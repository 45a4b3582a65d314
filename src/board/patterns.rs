//! Movement-pattern legality for each piece kind.
//!
//! Pattern legality is pure geometry plus occupancy. It never considers
//! king safety; that is layered on top by [`Board::would_be_in_check`].
//! The piece set is closed, so each behavior is a single exhaustive
//! dispatch over [`PieceKind`].

use super::state::Board;
use super::types::{Piece, PieceKind, Square};

impl Piece {
    /// Whether this piece's movement pattern permits `from -> to` on the
    /// given board.
    ///
    /// Zero displacement and capturing one's own color are illegal for
    /// every kind. Castling is not a movement pattern; see
    /// [`crate::board::special`].
    #[must_use]
    pub fn is_legal_pattern(self, from: Square, to: Square, board: &Board) -> bool {
        if from == to {
            return false;
        }
        if board.piece_at(to).is_some_and(|p| p.color == self.color) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => pawn_pattern(self, from, to, board),
            PieceKind::Knight => knight_pattern(from, to),
            PieceKind::Bishop => diagonal_line(from, to) && board.is_path_clear(from, to),
            PieceKind::Rook => straight_line(from, to) && board.is_path_clear(from, to),
            PieceKind::Queen => {
                (straight_line(from, to) || diagonal_line(from, to))
                    && board.is_path_clear(from, to)
            }
            PieceKind::King => king_pattern(from, to),
        }
    }

    /// Whether this piece threatens `target` from `from`, for king
    /// safety and castling transit.
    ///
    /// Attack is not the same as a legal move: a pawn threatens both
    /// forward diagonals whether or not they are occupied, so the pawn
    /// case cannot reuse the capture-only move pattern.
    #[must_use]
    pub fn attacks(self, from: Square, target: Square, board: &Board) -> bool {
        match self.kind {
            PieceKind::Pawn => {
                let (drow, dcol) = deltas(from, target);
                drow == self.color.pawn_direction() && dcol.abs() == 1
            }
            _ => self.is_legal_pattern(from, target, board),
        }
    }
}

/// Signed (row, col) displacement from `from` to `to`.
fn deltas(from: Square, to: Square) -> (isize, isize) {
    (
        to.row() as isize - from.row() as isize,
        to.col() as isize - from.col() as isize,
    )
}

fn straight_line(from: Square, to: Square) -> bool {
    from.row() == to.row() || from.col() == to.col()
}

fn diagonal_line(from: Square, to: Square) -> bool {
    let (drow, dcol) = deltas(from, to);
    drow.abs() == dcol.abs()
}

fn knight_pattern(from: Square, to: Square) -> bool {
    let (drow, dcol) = deltas(from, to);
    matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1))
}

fn king_pattern(from: Square, to: Square) -> bool {
    let (drow, dcol) = deltas(from, to);
    drow.abs() <= 1 && dcol.abs() <= 1
}

fn pawn_pattern(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    let dir = piece.color.pawn_direction();
    let (drow, dcol) = deltas(from, to);

    // Single step forward onto an empty square
    if dcol == 0 && drow == dir && board.is_empty(to) {
        return true;
    }

    // Double step from the starting row; both squares must be empty
    if dcol == 0 && drow == 2 * dir && !piece.has_moved {
        let midway = from.offset(dir, 0);
        if midway.is_some_and(|m| board.is_empty(m)) && board.is_empty(to) {
            return true;
        }
    }

    // Diagonal capture, onto an enemy piece or the en passant target.
    // The passed pawn's removal is the special-move executor's job.
    if dcol.abs() == 1 && drow == dir {
        if board.piece_at(to).is_some_and(|p| p.color != piece.color) {
            return true;
        }
        if board.en_passant_target() == Some(to) {
            return true;
        }
    }

    false
}
