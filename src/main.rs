//! Terminal play loop: human (White) against the selector engine (Black).
//!
//! Synchronous and single-threaded; reads long-coordinate moves from stdin
//! and prints the board after every ply. The difficulty level (1..=4) comes
//! from the first command-line argument.

use std::io::{self, BufRead, Write};

use makruk_engine::engines::engine_selector::SelectorEngine;
use makruk_engine::engines::engine_trait::Engine;
use makruk_engine::game_state::chess_types::{MoveRecord, Side};
use makruk_engine::game_state::game_state::GameState;
use makruk_engine::move_generation::legal_move_apply::apply_move;
use makruk_engine::move_generation::legal_move_checks::is_in_check;
use makruk_engine::move_generation::legal_move_generator::generate_candidates;
use makruk_engine::utils::algebraic::{location_to_coordinate, parse_move_coordinates};
use makruk_engine::utils::render_game_state::render_game_state;

fn main() {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .unwrap_or(2);

    let mut engine = SelectorEngine::new(level);
    let mut game = GameState::new_game();

    println!("Makruk: you are White. Enter moves like e3e4, or 'quit'.");
    println!("Opponent: {}\n", engine.name());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}\n", render_game_state(&game));

        match game.side_to_move {
            Side::White => {
                if generate_candidates(&game).is_empty() {
                    println!("You have no move left. {} wins.", engine.name());
                    break;
                }
                if is_in_check(&game, Side::White) {
                    println!("Your khun is in check.");
                }

                print!("Your move: ");
                if io::stdout().flush().is_err() {
                    break;
                }

                let line = match lines.next() {
                    Some(Ok(line)) => line,
                    _ => break,
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "quit" {
                    break;
                }

                let (from, to) = match parse_move_coordinates(trimmed) {
                    Ok(pair) => pair,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };

                match apply_move(&mut game, from, to) {
                    Some(record) => announce(&record, "You play"),
                    None => println!("Illegal move."),
                }
            }
            Side::Black => {
                let output = match engine.choose_move(&game) {
                    Ok(output) => output,
                    Err(message) => {
                        eprintln!("engine failure: {message}");
                        break;
                    }
                };

                let Some(candidate) = output.best_move else {
                    println!("The computer has no move left. You win!");
                    break;
                };

                match apply_move(&mut game, candidate.from, candidate.to) {
                    Some(record) => announce(&record, "Computer plays"),
                    None => {
                        eprintln!("engine produced an illegal move");
                        break;
                    }
                }

                if is_in_check(&game, Side::White) {
                    println!("Check!");
                }
            }
        }
    }
}

fn announce(record: &MoveRecord, who: &str) {
    let from = location_to_coordinate(record.from).unwrap_or_default();
    let to = location_to_coordinate(record.to).unwrap_or_default();
    let mut line = format!("{who} {from}{to}");
    if let Some(captured) = record.captured {
        line.push_str(&format!(", capturing a {:?}", captured.kind));
    }
    if record.promoted {
        line.push_str(", promoting to Bia Ngai");
    }
    println!("{line}");
}
