//! Board state: an 8x8 mailbox of owned pieces plus en passant tracking.

use std::fmt;

use super::types::{Color, Piece, PieceKind, Square};

/// Back-rank piece order, from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The chess board.
///
/// Each square owns at most one piece. The board also tracks the en
/// passant target: the square a pawn jumped over on the immediately
/// preceding ply, if that ply was a double step. There is no cached
/// check state; check is always recomputed from the pieces present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    en_passant: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place(Square::at(0, col), Piece::new(kind, Color::Black));
            board.place(Square::at(7, col), Piece::new(kind, Color::White));
        }
        for col in 0..8 {
            board.place(Square::at(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.place(Square::at(6, col), Piece::new(PieceKind::Pawn, Color::White));
        }
        board
    }

    /// Create a board with no pieces and no en passant target.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            en_passant: None,
        }
    }

    /// Piece occupying `square`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    /// Whether `square` holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, discarding any previous occupant.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row()][square.col()] = Some(piece);
    }

    /// Take the piece off `square` and return it.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// Mechanically relocate the piece on `from` to `to`, discarding any
    /// occupant of `to` and marking the piece as moved.
    ///
    /// Performs no legality checking. Returns `false` and leaves the
    /// board untouched if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        let Some(mut piece) = self.remove(from) else {
            return false;
        };
        piece.has_moved = true;
        self.place(to, piece);
        true
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Whether every square strictly between `from` and `to` is empty.
    ///
    /// Walks the unit step from `from` toward `to`, endpoints excluded.
    /// The segment must be straight or diagonal for the walk to land on
    /// `to`; on any other pair the walk stops at the board edge.
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let drow = (to.row() as isize - from.row() as isize).signum();
        let dcol = (to.col() as isize - from.col() as isize).signum();

        let mut current = from.offset(drow, dcol);
        while let Some(square) = current {
            if square == to {
                return true;
            }
            if !self.is_empty(square) {
                return false;
            }
            current = square.offset(drow, dcol);
        }
        true
    }

    /// Whether any piece of `by_color` threatens `square`.
    ///
    /// Uses the attack predicate rather than raw move legality: pawns
    /// threaten their forward diagonals even when those squares are
    /// empty, which matters for king safety and castling transit.
    #[must_use]
    pub fn is_under_attack(&self, square: Square, by_color: Color) -> bool {
        self.pieces()
            .any(|(from, piece)| piece.color == by_color && piece.attacks(from, square, self))
    }

    /// Locate the king of `color`. `None` if no king is on the board.
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Whether the king of `color` is under attack.
    ///
    /// A board with no king of `color` is not in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_position(color)
            .map_or(false, |king| self.is_under_attack(king, color.opponent()))
    }

    /// Whether playing `from -> to` would leave the king of `color`
    /// under attack.
    ///
    /// Simulates the relocation in place, evaluates check, then restores
    /// the board exactly: the moving piece returns to `from` with its
    /// prior `has_moved` flag and any captured piece reappears on `to`.
    /// An empty source square reports `true` (fail closed).
    #[must_use]
    pub fn would_be_in_check(&mut self, from: Square, to: Square, color: Color) -> bool {
        let Some(moving) = self.remove(from) else {
            return true;
        };
        let captured = self.remove(to);

        let mut placed = moving;
        placed.has_moved = true;
        self.place(to, placed);

        let in_check = self.is_in_check(color);

        // Restore: `moving` still carries the pre-move has_moved flag.
        match captured {
            Some(piece) => self.place(to, piece),
            None => {
                let _ = self.remove(to);
            }
        }
        self.place(from, moving);

        in_check
    }

    /// Square a pawn may capture onto en passant, if the previous ply
    /// was a pawn double step
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Record the square a pawn jumped over on a double step.
    pub fn set_en_passant_target(&mut self, square: Square) {
        self.en_passant = Some(square);
    }

    /// Clear en passant availability. The window survives exactly one
    /// ply; the controller clears it before every move commits.
    pub fn clear_en_passant(&mut self) {
        self.en_passant = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(piece) => write!(f, " {} |", piece.symbol())?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
