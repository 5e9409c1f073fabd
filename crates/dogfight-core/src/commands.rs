//! Player commands sent from the frontend to the game engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::input::InputEvent;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a game from the title or game-over screen.
    StartGame,
    /// Throw away the current game and start a fresh one.
    Restart,
    /// Leave the current game for the title screen.
    ReturnToTitle,
    Pause,
    Resume,

    // --- Controls ---
    /// Raw keyboard, mouse or touch input.
    Input { event: InputEvent },
}
