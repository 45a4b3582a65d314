//! Text front end: prompts, token parsing, and rendering.
//!
//! All rule decisions live in [`crate::board`] and [`crate::game`];
//! this module only collects input, relays it to the controller, and
//! prints the results.

use std::io::{self, Write};

use crate::board::{CastleSide, Color};
use crate::game::{Game, GameStatus, MoveOutcome, PromotionInput};
use crate::MoveError;

/// Prompts on stdout and reads the promotion letter from stdin.
struct ConsolePromotion;

impl PromotionInput for ConsolePromotion {
    fn choose_promotion(&mut self, color: Color, square: crate::Square) -> char {
        let answer = prompt(&format!(
            "{color} pawn promotes on {square}! Choose piece (Q/R/B/N): "
        ));
        answer
            .unwrap_or_default()
            .chars()
            .next()
            .unwrap_or('q')
    }
}

/// Run the interactive console game until it ends or the user quits.
pub fn run() {
    println!("=================================");
    println!("    Welcome to CLI Chess Game    ");
    println!("=================================");
    println!();
    println!("Commands:");
    println!("  - Move: e2 e4");
    println!("  - Castle Kingside: O-O or 0-0");
    println!("  - Castle Queenside: O-O-O or 0-0-0");
    println!("  - Resign: resign");
    println!("  - Offer a draw: draw");
    println!("  - Quit: quit or exit");
    println!();

    let mut game = Game::new();
    collect_names(&mut game);

    while !game.is_game_over() {
        println!("\n{}\n", game.board());

        let to_move = game.current_player();
        let check_note = if to_move.in_check() { " (in CHECK!)" } else { "" };
        let Some(line) = prompt(&format!(
            "{}'s turn{check_note}\nEnter move: ",
            to_move.name()
        )) else {
            // stdin closed; treat like quit
            return;
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return,
            ["resign"] => game.resign(),
            ["draw"] => handle_draw_offer(&mut game),
            [token] => match castle_side(token) {
                Some(side) => report(game.attempt_castle(side)),
                None => println!(
                    "Error: enter a move like 'e2 e4', a castle (O-O / O-O-O), \
                     resign, draw, or quit"
                ),
            },
            [from, to] => report(game.attempt_move(from, to, &mut ConsolePromotion)),
            _ => println!("Error: enter exactly two squares, like 'e2 e4'"),
        }
    }

    println!("\n{}\n", game.board());
    print!("Game Over! ");
    match game.winner() {
        Some(name) => println!("{name} wins!"),
        None => println!("Draw!"),
    }
}

/// Castle token per convention: O-O/0-0 kingside, O-O-O/0-0-0
/// queenside, any case.
fn castle_side(token: &str) -> Option<CastleSide> {
    match token.to_ascii_lowercase().as_str() {
        "o-o" | "0-0" => Some(CastleSide::King),
        "o-o-o" | "0-0-0" => Some(CastleSide::Queen),
        _ => None,
    }
}

fn collect_names(game: &mut Game) {
    for color in Color::BOTH {
        if let Some(name) = prompt(&format!("Enter {color} player's name: ")) {
            if !name.is_empty() {
                game.set_player_name(color, name);
            }
        }
    }
}

fn handle_draw_offer(game: &mut Game) {
    let opponent = game.player(game.current_color().opponent()).name();
    let answer = prompt(&format!(
        "{} offers a draw. {opponent}, accept? (y/n): ",
        game.current_player().name()
    ));
    if answer.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
        game.agree_draw();
        println!("Draw agreed.");
    } else {
        println!("Draw declined.");
    }
}

fn report(result: Result<MoveOutcome, MoveError>) {
    match result {
        Ok(outcome) => {
            if let Some(kind) = outcome.captured {
                if outcome.en_passant {
                    println!("En passant! Captured a {kind}.");
                } else {
                    println!("Captured a {kind}.");
                }
            }
            if let Some(kind) = outcome.promoted {
                println!("Promoted to a {kind}.");
            }
            match outcome.status {
                GameStatus::Checkmate { winner } => println!("\nCheckmate! {winner} wins!"),
                GameStatus::Stalemate => println!("\nStalemate! It's a draw!"),
                _ => {}
            }
        }
        Err(e) => println!("Error: {e}"),
    }
}

/// Print `text`, flush, and read one trimmed line from stdin.
/// `None` on EOF or read error.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
