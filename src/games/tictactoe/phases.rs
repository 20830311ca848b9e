//! Turn state machine phases.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player holding this mark completed a line.
    Win(Mark),
    /// The board filled with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }
}

/// Where the turn controller is in a game.
///
/// `GameOver` is terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the player holding `current` to move.
    AwaitingMove {
        /// Mark of the player to move.
        current: Mark,
    },
    /// Game finished; input is ignored.
    GameOver(Outcome),
}

impl TurnState {
    /// State at the start of every game.
    pub const INITIAL: TurnState = TurnState::AwaitingMove { current: Mark::X };

    /// Returns true once a win or tie has been reached.
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }

    /// Returns the outcome if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnState::AwaitingMove { .. } => None,
            TurnState::GameOver(outcome) => Some(*outcome),
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::INITIAL
    }
}
