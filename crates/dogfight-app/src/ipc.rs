//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via `invoke()`.
//! They bridge frontend requests to the game loop thread via channels.

use std::sync::Arc;

use tauri::{AppHandle, Emitter, State};

use dogfight_core::commands::PlayerCommand;
use dogfight_core::state::GameStateSnapshot;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Event carrying each frame's snapshot to the frontend.
pub const FRAME_EVENT: &str = "game:frame";

/// Start the frame loop if needed, then begin a game.
///
/// Frontend: `invoke("start_game")`
#[tauri::command]
pub fn start_game(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    if !*running {
        let latest = Arc::clone(&state.latest_snapshot);
        let sink = move |snapshot: &GameStateSnapshot| {
            let _ = app_handle.emit(FRAME_EVENT, snapshot);
            if let Ok(mut lock) = latest.lock() {
                *lock = Some(snapshot.clone());
            }
        };
        // The loop lives as long as the app; its handle is not joined.
        let (cmd_tx, _handle) = game_loop::spawn_game_loop(state.config.clone(), sink)
            .map_err(|e| e.to_string())?;
        *tx_lock = Some(cmd_tx);
        *running = true;
    }

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .map_err(|e| format!("Failed to start game: {}", e)),
        None => Err("Game loop not running".into()),
    }
}

/// Send a player command (input events included) to the engine.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: PlayerCommand, state: State<'_, AppState>) -> Result<(), String> {
    state.send(command).map_err(|e| e.to_string())
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}
