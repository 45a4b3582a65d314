//! Property-based tests using proptest.

use proptest::prelude::*;

use super::sq;
use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::game::{Game, QueenPromotion};

/// Strategy for a random seed for board/move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Build a board with `piece_count` random pieces on distinct squares.
fn random_board(seed: u64, piece_count: usize) -> Board {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(&mut rng);

    let mut board = Board::empty();
    for square in squares.into_iter().take(piece_count) {
        let kind = *PieceKind::ALL.choose(&mut rng).expect("nonempty");
        let color = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let mut piece = Piece::new(kind, color);
        piece.has_moved = rng.gen_bool(0.5);
        board.place(square, piece);
    }
    board
}

/// Every pattern-legal and king-safe move for `color`.
fn legal_moves(board: &mut Board, color: Color) -> Vec<(Square, Square)> {
    let own: Vec<_> = board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .collect();

    let mut moves = Vec::new();
    for (from, piece) in own {
        for to in Square::all() {
            if piece.is_legal_pattern(from, to, board)
                && !board.would_be_in_check(from, to, color)
            {
                moves.push((from, to));
            }
        }
    }
    moves
}

fn kings_of(board: &Board, color: Color) -> usize {
    board
        .pieces()
        .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
        .count()
}

proptest! {
    /// Property: algebraic notation round-trips for every valid square
    #[test]
    fn prop_notation_round_trip(row in 0..8usize, col in 0..8usize) {
        let square = Square::new(row, col).expect("in bounds");
        let parsed: Square = square.to_string().parse().expect("own notation parses");
        prop_assert_eq!(parsed, square);
    }

    /// Property: pattern legality never allows zero displacement or
    /// capturing one's own color, on any board
    #[test]
    fn prop_patterns_never_self_capture(seed in seed_strategy(), piece_count in 2..24usize) {
        let board = random_board(seed, piece_count);

        for (from, piece) in board.pieces() {
            for to in Square::all() {
                if piece.is_legal_pattern(from, to, &board) {
                    prop_assert_ne!(from, to);
                    let same_color_target = board
                        .piece_at(to)
                        .is_some_and(|p| p.color == piece.color);
                    prop_assert!(!same_color_target, "{} {} -> {}", piece.symbol(), from, to);
                }
            }
        }
    }

    /// Property: check simulation restores the board exactly, whatever
    /// squares it is probed with
    #[test]
    fn prop_simulation_restores_board(seed in seed_strategy(), piece_count in 2..24usize) {
        use rand::prelude::*;

        let mut board = random_board(seed, piece_count);
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let squares: Vec<Square> = Square::all().collect();

        for _ in 0..32 {
            let from = squares[rng.gen_range(0..64)];
            let to = squares[rng.gen_range(0..64)];
            let before = board.clone();

            for color in Color::BOTH {
                let _ = board.would_be_in_check(from, to, color);
                prop_assert_eq!(&board, &before);
            }
        }
    }

    /// Property: random legal playouts from the starting position keep
    /// exactly one king per side and accept every enumerated move
    #[test]
    fn prop_random_playouts_keep_kings(seed in seed_strategy(), plies in 1..40usize) {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for _ in 0..plies {
            if game.is_game_over() {
                break;
            }
            let color = game.current_color();
            let mut scratch = game.board().clone();
            let moves = legal_moves(&mut scratch, color);
            if moves.is_empty() {
                break;
            }

            let (from, to) = moves[rng.gen_range(0..moves.len())];
            game.attempt_move(&from.to_string(), &to.to_string(), &mut QueenPromotion)
                .expect("enumerated move is accepted");

            prop_assert_eq!(kings_of(game.board(), Color::White), 1);
            prop_assert_eq!(kings_of(game.board(), Color::Black), 1);
        }
    }
}

#[test]
fn test_legal_moves_matches_known_startpos_count() {
    // 16 pawn moves plus 4 knight moves
    let mut board = Board::new();
    assert_eq!(legal_moves(&mut board, Color::White).len(), 20);
    assert_eq!(legal_moves(&mut board, Color::Black).len(), 20);
}

#[test]
fn test_en_passant_target_counts_as_pawn_move() {
    let mut board = Board::empty();
    board.place(sq("e5"), Piece::new(PieceKind::Pawn, Color::White));
    board.place(sq("d5"), Piece::new(PieceKind::Pawn, Color::Black));
    board.place(sq("h1"), Piece::new(PieceKind::King, Color::White));
    board.place(sq("h8"), Piece::new(PieceKind::King, Color::Black));
    board.set_en_passant_target(sq("d6"));

    let moves = legal_moves(&mut board, Color::White);
    assert!(moves.contains(&(sq("e5"), sq("d6"))));
}
