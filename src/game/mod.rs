//! Game orchestration: turn sequencing, move legality, terminal states.
//!
//! [`Game`] ties the layers together: it parses notation, asks the piece
//! for pattern legality, asks the board for king safety, consults the
//! special-move rules, commits the move, and then checks for checkmate
//! or stalemate. Rejected moves leave the board untouched.

use std::fmt;

use crate::board::special::{self, CastleSide};
use crate::board::{Board, Color, MoveError, PieceKind, Square};

mod player;

pub use player::Player;

/// Supplies the promotion letter when a pawn reaches the last rank.
///
/// The rules engine never touches the console; the front end implements
/// this by prompting, and tests implement it with a fixed answer.
pub trait PromotionInput {
    /// Choose the piece for `color`'s pawn promoting on `square`.
    ///
    /// Expected answers are Q/R/B/N (case-insensitive); anything else
    /// promotes to a queen.
    fn choose_promotion(&mut self, color: Color, square: Square) -> char;
}

/// Always promotes to a queen.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueenPromotion;

impl PromotionInput for QueenPromotion {
    fn choose_promotion(&mut self, _color: Color, _square: Square) -> char {
        'q'
    }
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Play continues
    InProgress,
    /// The side to move has no legal move and is in check
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check
    Stalemate,
    /// A player conceded
    Resigned { winner: Color },
    /// Both players agreed to a draw
    DrawAgreed,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Resigned { winner } => write!(f, "resignation, {winner} wins"),
            GameStatus::DrawAgreed => write!(f, "draw agreed"),
        }
    }
}

/// What a committed ply did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Kind of the piece this ply captured, if any
    pub captured: Option<PieceKind>,
    /// Kind the pawn promoted to, if this ply promoted
    pub promoted: Option<PieceKind>,
    /// Whether this ply was an en passant capture
    pub en_passant: bool,
    /// Game status after the ply
    pub status: GameStatus,
}

/// The game controller: one board, two players, alternating turns.
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: Color,
    status: GameStatus,
    winner: Option<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with the standard starting position. White moves
    /// first; players carry their color names until renamed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    /// Create a game over a prepared board with `to_move` to play.
    #[must_use]
    pub fn with_board(board: Board, to_move: Color) -> Self {
        Game {
            board,
            players: [
                Player::new("White", Color::White),
                Player::new("Black", Color::Black),
            ],
            current: to_move,
            status: GameStatus::InProgress,
            winner: None,
        }
    }

    /// Read-only board view for rendering and inspection
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[must_use]
    pub const fn current_color(&self) -> Color {
        self.current
    }

    /// Player record for `color`
    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Player to move
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Rename a player. The console collects names before the first turn.
    pub fn set_player_name(&mut self, color: Color, name: impl Into<String>) {
        self.player_mut(color).set_name(name);
    }

    /// Current game status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Winner's name, if the game ended decisively
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    /// Attempt to play a move given two squares in algebraic notation.
    ///
    /// Runs the full legality pipeline — notation, ownership, movement
    /// pattern, king safety, special-move rules — and on success commits
    /// the move, updates bookkeeping, passes the turn, and checks for
    /// checkmate or stalemate. On failure the board is unchanged and the
    /// same player is still to move.
    pub fn attempt_move(
        &mut self,
        from: &str,
        to: &str,
        promotions: &mut dyn PromotionInput,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let from: Square = from.parse()?;
        let to: Square = to.parse()?;

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;

        if piece.color != self.current {
            return Err(MoveError::WrongColor {
                square: from,
                expected: self.current,
            });
        }

        if !piece.is_legal_pattern(from, to, &self.board) {
            return Err(MoveError::IllegalMove { from, to });
        }

        if self.board.would_be_in_check(from, to, self.current) {
            return Err(MoveError::KingExposed { from, to });
        }

        // Special-move state must be read before the board changes.
        let en_passant = special::is_en_passant(from, to, &self.board);
        let double_step =
            piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;

        // The en passant window lasts exactly one ply.
        self.board.clear_en_passant();

        let captured = if en_passant {
            special::perform_en_passant(from, to, &mut self.board)
        } else {
            let occupant = self.board.piece_at(to);
            if !self.board.move_piece(from, to) {
                return Err(MoveError::NoPieceAtSource { square: from });
            }
            occupant
        };

        if double_step {
            let midway = (from.row() + to.row()) / 2;
            self.board
                .set_en_passant_target(Square::at(midway, from.col()));
        }

        let promoted = self.maybe_promote(to, promotions);

        if let Some(captured) = captured {
            self.player_mut(self.current)
                .add_captured_value(captured.kind.capture_value());
        }

        #[cfg(feature = "logging")]
        log::debug!("{} played {from} -> {to}", self.current);

        self.finish_ply();

        Ok(MoveOutcome {
            captured: captured.map(|p| p.kind),
            promoted,
            en_passant,
            status: self.status,
        })
    }

    /// Attempt to castle for the current player.
    pub fn attempt_castle(&mut self, side: CastleSide) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !special::can_castle(self.current, side, &self.board) {
            return Err(MoveError::IllegalCastle { side });
        }

        special::castle(self.current, side, &mut self.board);
        self.board.clear_en_passant();

        #[cfg(feature = "logging")]
        log::debug!("{} castled {side}", self.current);

        self.finish_ply();

        Ok(MoveOutcome {
            captured: None,
            promoted: None,
            en_passant: false,
            status: self.status,
        })
    }

    /// The current player concedes; their opponent wins.
    pub fn resign(&mut self) {
        if self.is_game_over() {
            return;
        }
        let winner = self.current.opponent();
        self.record_win(winner);
        self.status = GameStatus::Resigned { winner };
    }

    /// Both players agreed to a draw. The front end runs the offer
    /// dialog; by the time this is called, the offer was accepted.
    pub fn agree_draw(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.status = GameStatus::DrawAgreed;
    }

    /// Whether `color` has at least one legal move: some piece, some
    /// target square, pattern-legal and not king-exposing.
    ///
    /// Scans every source and destination square; fine for human-paced
    /// turn-based play.
    #[must_use]
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        let own_pieces: Vec<_> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .collect();

        for (from, piece) in own_pieces {
            for to in Square::all() {
                if piece.is_legal_pattern(from, to, &self.board)
                    && !self.board.would_be_in_check(from, to, color)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Promote the pawn on `square` if it just reached its last rank.
    fn maybe_promote(
        &mut self,
        square: Square,
        promotions: &mut dyn PromotionInput,
    ) -> Option<PieceKind> {
        let piece = self.board.piece_at(square)?;
        if piece.kind != PieceKind::Pawn || square.row() != piece.color.promotion_row() {
            return None;
        }
        let choice = promotions.choose_promotion(piece.color, square);
        special::promote(square, choice, &mut self.board)
    }

    /// Pass the turn, refresh both players' check flags, and detect
    /// checkmate or stalemate for the new side to move.
    fn finish_ply(&mut self) {
        self.current = self.current.opponent();

        for color in Color::BOTH {
            let in_check = self.board.is_in_check(color);
            self.player_mut(color).set_in_check(in_check);
        }

        if self.has_any_legal_move(self.current) {
            return;
        }

        if self.board.is_in_check(self.current) {
            let winner = self.current.opponent();
            self.record_win(winner);
            self.status = GameStatus::Checkmate { winner };
            #[cfg(feature = "logging")]
            log::debug!("checkmate, {winner} wins");
        } else {
            self.status = GameStatus::Stalemate;
            #[cfg(feature = "logging")]
            log::debug!("stalemate");
        }
    }

    fn record_win(&mut self, winner: Color) {
        self.player_mut(winner).add_score(1);
        self.winner = Some(self.player(winner).name().to_string());
    }
}
