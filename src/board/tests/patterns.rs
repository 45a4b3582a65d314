//! Movement-pattern legality tests, one section per piece kind.

use super::sq;
use crate::board::{Board, Color, Piece, PieceKind, Square};

fn lone(kind: PieceKind, color: Color, at: &str) -> (Board, Piece, Square) {
    let mut board = Board::empty();
    let piece = Piece::new(kind, color);
    let square = sq(at);
    board.place(square, piece);
    (board, piece, square)
}

#[test]
fn test_no_kind_allows_zero_displacement() {
    for kind in PieceKind::ALL {
        let (board, piece, from) = lone(kind, Color::White, "d4");
        assert!(
            !piece.is_legal_pattern(from, from, &board),
            "{kind} must not move onto its own square"
        );
    }
}

#[test]
fn test_no_kind_captures_its_own_color() {
    for kind in PieceKind::ALL {
        let (mut board, piece, from) = lone(kind, Color::White, "d4");
        // Ring of friendly pawns plus a far friendly piece on d8.
        for target in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            board.place(sq(target), Piece::new(PieceKind::Pawn, Color::White));
        }
        board.place(sq("d8"), Piece::new(PieceKind::Knight, Color::White));

        for to in Square::all() {
            if board.piece_at(to).is_some_and(|p| p.color == Color::White) && to != from {
                assert!(
                    !piece.is_legal_pattern(from, to, &board),
                    "{kind} captured its own piece on {to}"
                );
            }
        }
    }
}

// Rook

#[test]
fn test_rook_moves_along_rank_and_file() {
    let (board, rook, from) = lone(PieceKind::Rook, Color::White, "d4");
    assert!(rook.is_legal_pattern(from, sq("d8"), &board));
    assert!(rook.is_legal_pattern(from, sq("d1"), &board));
    assert!(rook.is_legal_pattern(from, sq("a4"), &board));
    assert!(rook.is_legal_pattern(from, sq("h4"), &board));
    assert!(!rook.is_legal_pattern(from, sq("e5"), &board));
    assert!(!rook.is_legal_pattern(from, sq("c6"), &board));
}

#[test]
fn test_rook_blocked_by_any_piece() {
    let (mut board, rook, from) = lone(PieceKind::Rook, Color::White, "d4");
    board.place(sq("d6"), Piece::new(PieceKind::Pawn, Color::Black));

    assert!(rook.is_legal_pattern(from, sq("d5"), &board));
    assert!(rook.is_legal_pattern(from, sq("d6"), &board), "capture");
    assert!(!rook.is_legal_pattern(from, sq("d7"), &board), "beyond blocker");
    assert!(!rook.is_legal_pattern(from, sq("d8"), &board));
}

// Knight

#[test]
fn test_knight_l_shapes_only() {
    let (board, knight, from) = lone(PieceKind::Knight, Color::White, "d4");
    for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(knight.is_legal_pattern(from, sq(target), &board), "{target}");
    }
    for target in ["d5", "e5", "d6", "b4", "f4", "d2"] {
        assert!(!knight.is_legal_pattern(from, sq(target), &board), "{target}");
    }
}

#[test]
fn test_knight_jumps_over_pieces() {
    let (mut board, knight, from) = lone(PieceKind::Knight, Color::White, "d4");
    for wall in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        board.place(sq(wall), Piece::new(PieceKind::Pawn, Color::Black));
    }
    assert!(knight.is_legal_pattern(from, sq("b5"), &board));
    assert!(knight.is_legal_pattern(from, sq("f3"), &board));
}

// Bishop

#[test]
fn test_bishop_diagonals_only() {
    let (board, bishop, from) = lone(PieceKind::Bishop, Color::White, "d4");
    assert!(bishop.is_legal_pattern(from, sq("a1"), &board));
    assert!(bishop.is_legal_pattern(from, sq("h8"), &board));
    assert!(bishop.is_legal_pattern(from, sq("a7"), &board));
    assert!(bishop.is_legal_pattern(from, sq("g1"), &board));
    assert!(!bishop.is_legal_pattern(from, sq("d5"), &board));
    assert!(!bishop.is_legal_pattern(from, sq("e4"), &board));
}

#[test]
fn test_bishop_blocked_on_diagonal() {
    let (mut board, bishop, from) = lone(PieceKind::Bishop, Color::White, "d4");
    board.place(sq("f6"), Piece::new(PieceKind::Pawn, Color::Black));
    assert!(bishop.is_legal_pattern(from, sq("e5"), &board));
    assert!(bishop.is_legal_pattern(from, sq("f6"), &board), "capture");
    assert!(!bishop.is_legal_pattern(from, sq("g7"), &board));
}

// Queen

#[test]
fn test_queen_is_rook_plus_bishop() {
    let (board, queen, from) = lone(PieceKind::Queen, Color::White, "d4");
    for target in ["d8", "a4", "h4", "d1", "a1", "h8", "a7", "g1"] {
        assert!(queen.is_legal_pattern(from, sq(target), &board), "{target}");
    }
    for target in ["e6", "c2", "b5", "f5"] {
        assert!(!queen.is_legal_pattern(from, sq(target), &board), "{target}");
    }
}

#[test]
fn test_queen_respects_blockers() {
    let (mut board, queen, from) = lone(PieceKind::Queen, Color::White, "d4");
    board.place(sq("d6"), Piece::new(PieceKind::Knight, Color::Black));
    board.place(sq("f6"), Piece::new(PieceKind::Knight, Color::Black));
    assert!(!queen.is_legal_pattern(from, sq("d8"), &board));
    assert!(!queen.is_legal_pattern(from, sq("h8"), &board));
}

// King

#[test]
fn test_king_single_step_any_direction() {
    let (board, king, from) = lone(PieceKind::King, Color::White, "d4");
    for target in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        assert!(king.is_legal_pattern(from, sq(target), &board), "{target}");
    }
    assert!(!king.is_legal_pattern(from, sq("d6"), &board));
    assert!(!king.is_legal_pattern(from, sq("f4"), &board));
    assert!(!king.is_legal_pattern(from, sq("f6"), &board));
}

// Pawn

#[test]
fn test_pawn_single_step_toward_opponent() {
    let (board, white, from) = lone(PieceKind::Pawn, Color::White, "e2");
    assert!(white.is_legal_pattern(from, sq("e3"), &board));
    assert!(!white.is_legal_pattern(from, sq("e1"), &board), "backward");

    let (board, black, from) = lone(PieceKind::Pawn, Color::Black, "e7");
    assert!(black.is_legal_pattern(from, sq("e6"), &board));
    assert!(!black.is_legal_pattern(from, sq("e8"), &board), "backward");
}

#[test]
fn test_pawn_double_step_requires_unmoved_and_clear() {
    let (board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e2");
    assert!(pawn.is_legal_pattern(from, sq("e4"), &board));

    // Intermediate square occupied
    let (mut board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e2");
    board.place(sq("e3"), Piece::new(PieceKind::Knight, Color::Black));
    assert!(!pawn.is_legal_pattern(from, sq("e4"), &board));

    // Destination occupied
    let (mut board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e2");
    board.place(sq("e4"), Piece::new(PieceKind::Knight, Color::Black));
    assert!(!pawn.is_legal_pattern(from, sq("e4"), &board));

    // Already moved
    let mut board = Board::empty();
    let mut pawn = Piece::new(PieceKind::Pawn, Color::White);
    pawn.has_moved = true;
    board.place(sq("e3"), pawn);
    assert!(!pawn.is_legal_pattern(sq("e3"), sq("e5"), &board));
}

#[test]
fn test_pawn_forward_capture_is_illegal() {
    let (mut board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e4");
    board.place(sq("e5"), Piece::new(PieceKind::Pawn, Color::Black));
    assert!(!pawn.is_legal_pattern(from, sq("e5"), &board));
}

#[test]
fn test_pawn_diagonal_needs_enemy_or_en_passant() {
    let (mut board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e4");
    assert!(!pawn.is_legal_pattern(from, sq("d5"), &board), "empty diagonal");

    board.place(sq("d5"), Piece::new(PieceKind::Knight, Color::Black));
    assert!(pawn.is_legal_pattern(from, sq("d5"), &board), "capture");

    // En passant target makes the empty diagonal legal
    let (mut board, pawn, from) = lone(PieceKind::Pawn, Color::White, "e5");
    board.place(sq("d5"), Piece::new(PieceKind::Pawn, Color::Black));
    board.set_en_passant_target(sq("d6"));
    assert!(pawn.is_legal_pattern(from, sq("d6"), &board));

    board.clear_en_passant();
    assert!(!pawn.is_legal_pattern(from, sq("d6"), &board));
}
