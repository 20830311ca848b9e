//! Status line text.

use derive_more::Display;

/// Status shown to the players after each transition.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StatusMessage {
    /// Prompt for the player who moves next.
    #[display("{_0}'s turn")]
    Turn(String),
    /// Announcement of the winner.
    #[display("{_0} Wins!")]
    Win(String),
    /// Announcement of a full board with no winner.
    #[display("It is Tie!")]
    Tie,
}
