//! Turn controller for a two-player game.
//!
//! The controller owns the board, both player records and the turn
//! state. Each [`Input`] is handled to completion: the board is asked to
//! place the current mark, the rules decide whether the game ended, and
//! the injected [`Renderer`] is told what to show.

use super::action::{Input, Transition};
use super::board::{Board, CELL_COUNT};
use super::message::StatusMessage;
use super::phases::{Outcome, TurnState};
use super::render::Renderer;
use super::rules;
use super::types::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Serializable view of a game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: [Cell; CELL_COUNT],
    /// Name of the player to move, or of the last mover once the game is over.
    pub current_player: String,
    /// True once a win or tie has been reached.
    pub game_over: bool,
    /// Result of a finished game.
    pub outcome: Option<Outcome>,
}

/// Orchestrates turns between two players over one board.
#[derive(Debug)]
pub struct TurnController<R: Renderer> {
    board: Board,
    players: [Player; 2],
    state: TurnState,
    renderer: R,
}

impl<R: Renderer> TurnController<R> {
    /// Starts a game between `player_x` (who moves first) and `player_o`.
    ///
    /// Renders the empty board and prompts the first player.
    #[instrument(skip_all)]
    pub fn new(player_x: impl AsRef<str>, player_o: impl AsRef<str>, renderer: R) -> Self {
        let mut controller = Self {
            board: Board::new(),
            players: [
                Player::new(player_x.as_ref(), Mark::X),
                Player::new(player_o.as_ref(), Mark::O),
            ],
            state: TurnState::INITIAL,
            renderer,
        };
        info!(
            player_x = %controller.players[0],
            player_o = %controller.players[1],
            "Starting game"
        );
        controller.render();
        controller.prompt_current();
        controller
    }

    /// Handles one input event.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn handle(&mut self, input: Input) -> Transition {
        match input {
            Input::CellClicked(index) => self.click(index),
            Input::ResetRequested => {
                self.reset();
                Transition::Reset
            }
        }
    }

    /// Plays the current player's mark at `index`.
    fn click(&mut self, index: usize) -> Transition {
        let current = match self.state {
            TurnState::GameOver(outcome) => {
                debug!(?outcome, index, "Game is over, ignoring click");
                return Transition::Ignored;
            }
            TurnState::AwaitingMove { current } => current,
        };

        if !self.board.place_mark(index, current) {
            debug!(index, mark = %current, "Placement rejected");
            return Transition::Ignored;
        }

        self.render();

        if let Some(winner) = rules::check_winner(&self.board) {
            return self.finish(Outcome::Win(winner));
        }

        if rules::is_tie(&self.board) {
            return self.finish(Outcome::Tie);
        }

        self.state = TurnState::AwaitingMove {
            current: current.opponent(),
        };
        self.prompt_current();
        Transition::Moved
    }

    /// Enters the terminal state and announces the result.
    fn finish(&mut self, outcome: Outcome) -> Transition {
        self.state = TurnState::GameOver(outcome);
        let message = match outcome.winner() {
            Some(mark) => StatusMessage::Win(self.player(mark).name().clone()),
            None => StatusMessage::Tie,
        };
        info!(?outcome, "Game over");
        self.renderer.show_message(&message.to_string());
        Transition::Finished(outcome)
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board.reset();
        self.state = TurnState::INITIAL;
        self.render();
        self.prompt_current();
    }

    fn render(&mut self) {
        let cells = self.board.get_board();
        self.renderer.render_board(&cells);
    }

    fn prompt_current(&mut self) {
        let message = StatusMessage::Turn(self.current_player().name().clone());
        self.renderer.show_message(&message.to_string());
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn current_player(&self) -> &Player {
        match self.state {
            TurnState::AwaitingMove { current } => self.player(current),
            TurnState::GameOver(Outcome::Win(mark)) => self.player(mark),
            // X moves first and there are nine cells, so X fills the last one.
            TurnState::GameOver(Outcome::Tie) => self.player(Mark::X),
        }
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns true once a win or tie has been reached.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Returns the result of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Captures the game in a serializable form.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.get_board(),
            current_player: self.current_player().name().clone(),
            game_over: self.is_game_over(),
            outcome: self.outcome(),
        }
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
