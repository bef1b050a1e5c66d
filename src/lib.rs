//! # Gridwalk - a line-oriented grid exploration game
//!
//! Gridwalk is a small turn-based game played one command per line: the
//! player walks a bounded square grid with `move <up|down|left|right>`,
//! inspects it with `show`, and leaves with `quit`. Movement that would
//! step outside the grid is rejected with a message and the world is left
//! untouched.
//!
//! The crate is split so the whole game is testable without a terminal:
//!
//! - [`game::types`] - the value types (`Position`, `Direction`, `Player`,
//!   `Grid`, `World`) plus the `Command` and `StepOutcome` enums
//! - [`game::commands`] - turns a raw input line into exactly one `Command`
//! - [`game::engine`] - the pure `step` function from `(World, Command)` to
//!   a `StepOutcome`; no I/O happens here
//! - [`game::session`] - the interactive loop over any `BufRead`/`Write`
//!   pair, used by the binary with stdin/stdout and by tests with buffers
//! - [`config`] - TOML configuration (grid size, cell markers, log level)
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gridwalk::config::Config;
//! use gridwalk::game::GameSession;
//! use std::io;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml")?;
//!     let stdin = io::stdin();
//!     let stdout = io::stdout();
//!     GameSession::new(stdin.lock(), stdout.lock(), config.game).run()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod game;
pub mod logutil;
