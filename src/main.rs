//! Binary entrypoint for the gridwalk CLI.
//!
//! Commands:
//! - `play` (the default) - run an interactive game on stdin/stdout
//! - `init` - create a starter `config.toml`
//!
//! Logging goes to stderr so it never interleaves with game output.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use gridwalk::config::Config;
use gridwalk::game::GameSession;

#[derive(Parser)]
#[command(name = "gridwalk")]
#[command(about = "A tiny line-oriented grid exploration game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after the subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play,
    /// Initialize a default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Init => {
            Config::create_default(&cli.config)?;
            println!("Wrote default configuration to {}", cli.config);
        }
        Commands::Play => {
            let config = Config::load_or_default(&cli.config)?;
            init_logging(&config, cli.verbose);

            let stdin = io::stdin();
            let stdout = io::stdout();
            GameSession::new(stdin.lock(), stdout.lock(), config.game).run()?;
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    let _ = builder.try_init();
}
