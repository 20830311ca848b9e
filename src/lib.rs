//! Hotseat tic-tac-toe library
//!
//! Two players share one screen and take turns placing X and O on a
//! 3x3 board.
//!
//! # Architecture
//!
//! - **Board**: owns the nine cells; validated placement and reset
//! - **Rules**: pure win and tie detection over the eight lines
//! - **TurnController**: turns click/reset inputs into board changes and
//!   reports them to an injected [`Renderer`]
//! - **TUI**: a ratatui front end that acts as the renderer
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{EffectLog, Input, TurnController};
//!
//! let mut game = TurnController::new("Player X", "Player O", EffectLog::new());
//! game.handle(Input::CellClicked(4));
//! assert_eq!(game.renderer().last_message(), Some("Player O's turn"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Cell, CellView, Effect, EffectLog, Input, Mark, Outcome, Player, Position,
    Renderer, Snapshot, StatusMessage, TextRenderer, Transition, TurnController, TurnState,
};
