//! Hotseat - two-player tic-tac-toe CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hotseat_tictactoe::{GameConfig, TextRenderer, replay, tui};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { events, json } => run_replay(&config, &events, json),
    }
}

/// Reads the config file, if any, then applies CLI and env overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = config.with_overrides(cli.player_x.clone(), cli.player_o.clone())?;
    Ok(config)
}

/// Run the terminal UI
fn run_play(config: &GameConfig) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run_tui(config)
}

/// Run a headless replay and print the result
fn run_replay(config: &GameConfig, events: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let inputs = replay::parse_events(events)?;
    info!(count = inputs.len(), "Replaying events");

    if json {
        let game = replay::replay(config, &inputs, TextRenderer::new(io::sink()));
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &game.snapshot())?;
        writeln!(stdout)?;
    } else {
        let game = replay::replay(config, &inputs, TextRenderer::new(io::stdout().lock()));
        game.into_renderer().into_inner().flush()?;
    }
    Ok(())
}
