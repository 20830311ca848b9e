//! Render collaborator interface.
//!
//! The turn controller never draws anything itself. It reports board
//! changes and status text to a [`Renderer`], which may be a terminal
//! UI, a text transcript, or an [`EffectLog`] in tests.

use super::board::CELL_COUNT;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{instrument, warn};

/// Receives the controller's output side effects.
pub trait Renderer {
    /// Redraw all nine cells.
    fn render_board(&mut self, board: &[Cell; CELL_COUNT]);

    /// Display a status line.
    fn show_message(&mut self, text: &str);
}

/// How one cell should be shown.
///
/// Empty cells have no symbol and are not occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Character to draw, if any.
    pub symbol: Option<char>,
    /// Whether the cell should be styled as taken.
    pub occupied: bool,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        let symbol = cell.mark().map(Mark::symbol);
        Self {
            symbol,
            occupied: symbol.is_some(),
        }
    }
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// `render_board` was called with this board.
    RenderBoard([Cell; CELL_COUNT]),
    /// `show_message` was called with this text.
    ShowMessage(String),
}

/// Renderer that records every effect in order.
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    effects: Vec<Effect>,
}

impl EffectLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All effects recorded so far.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Removes and returns the recorded effects.
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Most recent message, if one was shown.
    pub fn last_message(&self) -> Option<&str> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::ShowMessage(text) => Some(text.as_str()),
            Effect::RenderBoard(_) => None,
        })
    }

    /// Most recently rendered board, if any.
    pub fn last_board(&self) -> Option<&[Cell; CELL_COUNT]> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::RenderBoard(board) => Some(board),
            Effect::ShowMessage(_) => None,
        })
    }
}

impl Renderer for EffectLog {
    fn render_board(&mut self, board: &[Cell; CELL_COUNT]) {
        self.effects.push(Effect::RenderBoard(*board));
    }

    fn show_message(&mut self, text: &str) {
        self.effects.push(Effect::ShowMessage(text.to_string()));
    }
}

/// Renderer that writes a plain-text transcript.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    #[instrument(skip(self, text))]
    fn write_block(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Failed to write transcript");
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_board(&mut self, board: &[Cell; CELL_COUNT]) {
        let mut grid = String::new();
        for (index, cell) in board.iter().enumerate() {
            let view = CellView::from(*cell);
            grid.push(view.symbol.unwrap_or('.'));
            if index % 3 == 2 {
                grid.push('\n');
            }
        }
        self.write_block(grid.trim_end());
    }

    fn show_message(&mut self, text: &str) {
        self.write_block(&format!("> {}", text));
    }
}
