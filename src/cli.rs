//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the player holding X
    #[arg(long, env = "HOTSEAT_PLAYER_X")]
    pub player_x: Option<String>,

    /// Name of the player holding O
    #[arg(long, env = "HOTSEAT_PLAYER_O")]
    pub player_o: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Run a sequence of clicks without a UI and print the result
    Replay {
        /// Events: a cell index 0-8, a label such as `center`, or `r` to reset
        #[arg(required = true)]
        events: Vec<String>,

        /// Print the final game as JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },
}
