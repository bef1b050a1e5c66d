//! The interactive session loop.
//!
//! Reads one line at a time, routes it through the parser and the step
//! engine, and interprets the outcome. Generic over the reader and writer so
//! integration tests can drive a full session with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use crate::config::GameConfig;
use crate::game::commands;
use crate::game::engine;
use crate::game::types::{Grid, StepOutcome, World};
use crate::logutil::escape_log;

/// One interactive game session over a line-oriented reader/writer pair.
pub struct GameSession<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the session to completion: ask for a name, greet, then loop one
    /// command per iteration until `quit` or end of input. End of input is
    /// treated like quit, minus the farewell.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "What is your name?")?;
        let name = match self.read_line()? {
            Some(line) => line.trim().to_string(),
            None => {
                debug!("input ended at the name prompt");
                return Ok(());
            }
        };
        writeln!(self.output, "Hello, {}, welcome to the game!", name)?;
        info!("session started for {}", escape_log(&name));

        let grid = Grid::with_markers(
            self.config.grid_size,
            self.config.empty_marker,
            self.config.player_marker,
        );
        let mut world = World::new(name, grid);
        writeln!(self.output, "Use commands to play")?;

        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("input exhausted, ending session");
                    break;
                }
            };
            // Blank lines are a no-op: re-prompt without parsing.
            if line.trim().is_empty() {
                continue;
            }

            let command = commands::parse(&line);
            debug!("parsed {:?} from line {:?}", command, escape_log(&line));

            match engine::step(&world, &command) {
                StepOutcome::Continue(next) => world = next,
                StepOutcome::ContinueWithMessage(message) => {
                    writeln!(self.output, "{}", message)?;
                }
                StepOutcome::Stop(message) => {
                    writeln!(self.output, "{}", message)?;
                    break;
                }
            }
        }

        info!("session ended for {}", escape_log(&world.player.name));
        Ok(())
    }

    /// Read one line, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            Ok(None)
        } else {
            Ok(Some(buf))
        }
    }
}
