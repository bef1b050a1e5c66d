//! Input line classification.
//!
//! One raw line in, exactly one [`Command`] out. Parsing is case-insensitive,
//! tokenizes on whitespace runs, and is total: there is no parse failure,
//! only the `Missing`/`Unknown` command variants. Blank lines are a no-op
//! signal handled by the session before the parser is invoked.

use crate::game::types::{Command, Direction};

/// Classify one non-blank input line.
pub fn parse(line: &str) -> Command {
    let lowered = line.to_lowercase();
    let mut tokens = lowered.split_whitespace();

    match tokens.next() {
        Some("help") => Command::Help,
        Some("show") => Command::Show,
        Some("quit") => Command::Quit,
        Some("move") => match tokens.next() {
            None => Command::MissingDirection,
            Some(token) => match parse_direction(token) {
                Some(direction) => Command::Move(direction),
                None => Command::UnknownDirection,
            },
        },
        _ => Command::UnknownCommand,
    }
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}
