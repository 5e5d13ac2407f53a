//! Inbound commands to the game service.
//!
//! Scripted control from outside the tick loop (console, tests). The
//! [`GameService`](super::service::GameService) interprets and acts upon them.

use crate::game::Difficulty;

/// Commands that external adapters can send into the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Start a session at `Difficulty` (only honoured from the menu).
    StartGame(Difficulty),

    /// Abandon whatever is running and go back to the menu.
    ReturnToMenu,
}
