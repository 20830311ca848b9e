//! Two-player tic-tac-toe: board, rules and turn controller.

mod action;
mod board;
mod controller;
mod message;
mod phases;
mod position;
mod render;
pub mod rules;
mod types;

pub use action::{Input, Transition};
pub use board::{Board, CELL_COUNT};
pub use controller::{Snapshot, TurnController};
pub use message::StatusMessage;
pub use phases::{Outcome, TurnState};
pub use position::Position;
pub use render::{CellView, Effect, EffectLog, Renderer, TextRenderer};
pub use types::{Cell, Mark, Player};
