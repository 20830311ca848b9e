//! Input events and transition results.
//!
//! Inputs are plain values so any front end (terminal, text replay,
//! tests) can drive the same controller.

use super::phases::Outcome;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An event consumed by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A cell was clicked. The index is not validated until placement.
    CellClicked(usize),
    /// The reset control was clicked.
    ResetRequested,
}

impl Input {
    /// Parses `r`/`reset` or a cell given as an index or label.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("reset") {
            return Some(Input::ResetRequested);
        }
        if let Ok(index) = s.parse::<usize>() {
            return Some(Input::CellClicked(index));
        }
        Position::from_label_or_number(s).map(Position::into)
    }
}

impl From<Position> for Input {
    fn from(pos: Position) -> Self {
        Input::CellClicked(pos.to_index())
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::CellClicked(index) => write!(f, "click {}", index),
            Input::ResetRequested => write!(f, "reset"),
        }
    }
}

/// What handling one input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Input was rejected; nothing changed and nothing was rendered.
    Ignored,
    /// A mark was placed and the turn passed to the other player.
    Moved,
    /// A mark was placed and ended the game.
    Finished(Outcome),
    /// The board was cleared and a new game started.
    Reset,
}
