//! Game loop thread: drives the engine at 60 Hz and hands out snapshots.
//!
//! The engine is created inside the thread. Commands arrive over an `mpsc`
//! channel. Each frame measures the real time since the previous one, like
//! an animation-frame callback, and passes it to `GameEngine::update`.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use dogfight_core::config::GameConfig;
use dogfight_core::constants::FRAME_RATE;
use dogfight_core::state::GameStateSnapshot;
use dogfight_sim::GameEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Receives every snapshot the loop produces.
pub trait FrameSink: Send + 'static {
    fn frame(&mut self, snapshot: &GameStateSnapshot);
}

impl<F> FrameSink for F
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    fn frame(&mut self, snapshot: &GameStateSnapshot) {
        self(snapshot)
    }
}

/// Spawn the game loop thread.
///
/// Returns the command sender and the thread handle. Sending `Shutdown` or
/// dropping every sender stops the loop; join the handle to wait for it.
pub fn spawn_game_loop<S: FrameSink>(
    config: GameConfig,
    sink: S,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("dogfight-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, sink))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop<S: FrameSink>(
    config: GameConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut sink: S,
) {
    let mut engine = GameEngine::new(config);
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    log::info!("game loop started");

    loop {
        // 1. Drain pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            log::info!("game loop stopped");
            return;
        }

        // 2. Advance by the measured delta (the engine clamps long stalls)
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.update(dt);

        // 3. Hand the frame out
        sink.frame(&snapshot);

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; skip ahead instead of catching up.
            next_frame_time = now;
        }
    }
}

/// Queue every pending command. Returns `false` when the loop should stop.
fn drain_commands(engine: &mut GameEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
