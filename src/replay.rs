//! Headless play from a list of events.

use crate::config::GameConfig;
use crate::games::tictactoe::{Input, Renderer, TurnController};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// An event string that is neither a cell nor a reset.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized event '{}' (argument {})", event, position)]
pub struct ReplayError {
    /// The text that failed to parse.
    pub event: String,
    /// 1-based position in the argument list.
    pub position: usize,
}

/// Parses every event up front so nothing is played from a bad list.
#[instrument(skip(raw), fields(count = raw.len()))]
pub fn parse_events<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Input>, ReplayError> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            Input::parse(s.as_ref()).ok_or_else(|| ReplayError {
                event: s.as_ref().to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Starts a game and feeds it `events` in order.
#[instrument(skip_all, fields(events = events.len()))]
pub fn replay<R: Renderer>(
    config: &GameConfig,
    events: &[Input],
    renderer: R,
) -> TurnController<R> {
    let mut controller =
        TurnController::new(config.player_x_name(), config.player_o_name(), renderer);
    for input in events {
        let transition = controller.handle(*input);
        debug!(%input, ?transition, "Replayed event");
    }
    info!(outcome = ?controller.outcome(), "Replay finished");
    controller
}
