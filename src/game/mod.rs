//! The grid exploration game: typed commands, a pure step engine, and the
//! session loop that ties them to line-oriented I/O.
//!
//! Data flows one way per iteration: the session reads a line,
//! [`commands::parse`] classifies it into a [`Command`], [`engine::step`]
//! turns `(World, Command)` into a [`StepOutcome`], and the session
//! interprets the outcome (replace the world, print a message, or stop).

pub mod commands;
pub mod engine;
mod errors;
pub mod session;
pub mod types;

pub use errors::GameError;
pub use session::GameSession;
pub use types::{Command, Direction, Grid, Player, Position, StepOutcome, World};
