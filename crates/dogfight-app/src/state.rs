//! Application state shared between the IPC layer and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use dogfight_core::commands::PlayerCommand;
use dogfight_core::config::GameConfig;
use dogfight_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Stop the game loop thread.
    Shutdown,
}

/// Shared application state.
///
/// Managed state must be Send + Sync, so the channel sender lives behind a
/// `Mutex` and the latest snapshot behind `Arc<Mutex<..>>` shared with the
/// loop thread.
pub struct AppState {
    pub config: GameConfig,
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }

    /// Forward a command to the running loop.
    pub fn send(&self, command: PlayerCommand) -> Result<(), crate::AppError> {
        let lock = self
            .command_tx
            .lock()
            .map_err(|_| crate::AppError::LoopStopped)?;
        let tx = lock.as_ref().ok_or(crate::AppError::LoopStopped)?;
        tx.send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| crate::AppError::LoopStopped)
    }

    /// A clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}
