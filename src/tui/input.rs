//! Keyboard and mouse mapping for the terminal UI.

use crate::games::tictactoe::{CELL_COUNT, Input, Position};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// What a terminal event asks the UI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an input to the turn controller.
    Game(Input),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the application.
    Quit,
    /// Nothing to do.
    None,
}

/// Maps a terminal event to an action.
///
/// Digits `1`-`9` click cells 0-8, Enter or Space clicks the cursor cell,
/// `r` resets, `q` or Esc quits, and a left mouse click on a cell clicks it.
pub fn map_event(event: &Event, cursor: Position, cell_areas: &[Rect; CELL_COUNT]) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Game(Input::ResetRequested),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                Action::Game(Input::CellClicked(index))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Game(cursor.into()),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                Action::MoveCursor(move_cursor(cursor, code))
            }
            _ => Action::None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            match cell_at(cell_areas, mouse.column, mouse.row) {
                Some(pos) => Action::Game(pos.into()),
                None => Action::None,
            }
        }
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Finds the cell drawn at a screen coordinate.
pub fn cell_at(cell_areas: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<Position> {
    cell_areas
        .iter()
        .position(|area| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
        .and_then(Position::from_index)
}
