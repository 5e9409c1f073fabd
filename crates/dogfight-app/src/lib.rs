//! Dogfight application shell.
//!
//! Runs the engine on a frame thread and turns snapshots into HUD text.
//! With the `webview` feature the same loop is exposed to a Tauri frontend
//! through IPC commands and events.

pub mod autopilot;
pub mod debug;
pub mod game_loop;
pub mod hud;
#[cfg(feature = "webview")]
pub mod ipc;
pub mod state;

pub use dogfight_core as core;

use dogfight_core::config::ConfigError;

/// Errors surfaced by the application shell.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("game loop is not running")]
    LoopStopped,
}
