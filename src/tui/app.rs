//! Application state for the terminal UI.

use crate::games::tictactoe::{CELL_COUNT, Cell, Position, Renderer};
use ratatui::layout::Rect;
use tracing::debug;

/// What the terminal currently shows.
///
/// `App` is the render collaborator handed to the turn controller: it
/// only stores what it is told and draws it on the next frame.
#[derive(Debug, Clone)]
pub struct App {
    board: [Cell; CELL_COUNT],
    status_message: String,
    cursor: Position,
    cell_areas: [Rect; CELL_COUNT],
}

impl App {
    /// Creates an application with an empty board.
    pub fn new() -> Self {
        Self {
            board: [Cell::Empty; CELL_COUNT],
            status_message: String::new(),
            cursor: Position::Center,
            cell_areas: [Rect::default(); CELL_COUNT],
        }
    }

    /// Last board the controller rendered.
    pub fn board(&self) -> &[Cell; CELL_COUNT] {
        &self.board
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Records where each cell was drawn on the last frame.
    pub fn set_cell_areas(&mut self, areas: [Rect; CELL_COUNT]) {
        self.cell_areas = areas;
    }

    /// Screen areas of the cells from the last frame.
    pub fn cell_areas(&self) -> &[Rect; CELL_COUNT] {
        &self.cell_areas
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for App {
    fn render_board(&mut self, board: &[Cell; CELL_COUNT]) {
        debug!("Board updated");
        self.board = *board;
    }

    fn show_message(&mut self, text: &str) {
        debug!(text, "Status updated");
        self.status_message = text.to_string();
    }
}
