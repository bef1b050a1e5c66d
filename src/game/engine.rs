//! The step engine: a pure function from `(World, Command)` to a
//! [`StepOutcome`]. No I/O happens here; the session loop interprets the
//! outcome.

use crate::game::errors::GameError;
use crate::game::types::{Command, StepOutcome, World};

/// Fixed help text, bracketed by blank lines like the grid rendering.
pub const HELP_TEXT: &str = "\nValid commands:\n\n help\n show\n move <up|down|left|right>\n quit\n";

pub const MISSING_DIRECTION: &str = "Missing direction";
pub const UNKNOWN_DIRECTION: &str = "Unknown direction";
pub const UNKNOWN_COMMAND: &str = "Unknown command";
pub const INVALID_DIRECTION: &str = "Invalid direction";

/// Apply one command to the world.
///
/// Every command except `Quit` keeps the session running; `Quit` is the only
/// transition to the terminal state. An out-of-bounds move is reported as a
/// message and leaves the world unchanged.
pub fn step(world: &World, command: &Command) -> StepOutcome {
    match command {
        Command::Help => StepOutcome::ContinueWithMessage(HELP_TEXT.to_string()),
        Command::Show => StepOutcome::ContinueWithMessage(world.render()),
        Command::MissingDirection => StepOutcome::ContinueWithMessage(MISSING_DIRECTION.to_string()),
        Command::UnknownDirection => StepOutcome::ContinueWithMessage(UNKNOWN_DIRECTION.to_string()),
        Command::UnknownCommand => StepOutcome::ContinueWithMessage(UNKNOWN_COMMAND.to_string()),
        Command::Move(direction) => {
            let candidate = world.player.pos.offset(direction.delta());
            match world.place(world.player.at(candidate)) {
                Ok(next) => StepOutcome::Continue(next),
                Err(GameError::InvalidDirection) => {
                    StepOutcome::ContinueWithMessage(INVALID_DIRECTION.to_string())
                }
            }
        }
        Command::Quit => StepOutcome::Stop(format!("Bye bye {}!", world.player.name)),
    }
}
