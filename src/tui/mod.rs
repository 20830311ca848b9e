//! Terminal UI for hotseat tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;
use crate::games::tictactoe::TurnController;
pub use app::App;
pub use input::{Action, cell_at, map_event, move_cursor};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the players quit.
#[instrument(
    skip_all,
    fields(player_x = %config.player_x_name(), player_o = %config.player_o_name())
)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let controller =
        TurnController::new(config.player_x_name(), config.player_o_name(), App::new());
    let res = run_app(&mut terminal, controller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draws, waits for one terminal event, and feeds it to the controller.
fn run_app(terminal: &mut Tui, mut controller: TurnController<App>) -> Result<()> {
    loop {
        let mut cell_areas = *controller.renderer().cell_areas();
        terminal.draw(|f| cell_areas = ui::draw(f, controller.renderer()))?;
        controller.renderer_mut().set_cell_areas(cell_areas);

        let event = event::read()?;
        let app = controller.renderer();
        match map_event(&event, app.cursor(), app.cell_areas()) {
            Action::Quit => return Ok(()),
            Action::Game(input) => {
                let transition = controller.handle(input);
                debug!(%input, ?transition, "Input handled");
            }
            Action::MoveCursor(pos) => controller.renderer_mut().set_cursor(pos),
            Action::None => {}
        }
    }
}
