// Prevents additional console window on Windows in release
#![cfg_attr(
    all(feature = "webview", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use dogfight_app::autopilot::Autopilot;
use dogfight_app::debug::{DebugFlags, DebugPanel, FpsCounter};
use dogfight_app::game_loop::{self, FRAME_DURATION};
use dogfight_app::hud::HudText;
use dogfight_app::state::GameLoopCommand;
use dogfight_app::AppError;
use dogfight_core::commands::PlayerCommand;
use dogfight_core::config::GameConfig;
use dogfight_core::state::GameStateSnapshot;

/// Default length of a headless session.
const DEFAULT_SESSION_SECS: f32 = 20.0;

/// Command-line options: `dogfight [config.toml] [seconds]`.
/// `DOGFIGHT_DEBUG` takes a query string like `debug=on`.
struct Options {
    config_path: Option<PathBuf>,
    session_secs: f32,
    debug: DebugFlags,
}

impl Options {
    fn from_args() -> Result<Self, AppError> {
        let mut args = std::env::args().skip(1);
        let config_path = args.next().map(PathBuf::from);
        let session_secs = match args.next() {
            Some(secs) => secs
                .parse::<f32>()
                .ok()
                .filter(|s| s.is_finite() && *s > 0.0)
                .ok_or_else(|| AppError::Argument(format!("bad session length: {secs}")))?,
            None => DEFAULT_SESSION_SECS,
        };
        let debug = std::env::var("DOGFIGHT_DEBUG")
            .map(|query| DebugFlags::from_query(&query))
            .unwrap_or_default();

        Ok(Self {
            config_path,
            session_secs,
            debug,
        })
    }

    fn load_config(&self) -> Result<GameConfig, AppError> {
        match &self.config_path {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Ok(GameConfig::load(path)?)
            }
            None => Ok(GameConfig::default()),
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "webview"))]
fn run() -> Result<(), AppError> {
    let options = Options::from_args()?;
    run_headless(&options)
}

#[cfg(feature = "webview")]
fn run() -> Result<(), AppError> {
    use dogfight_app::ipc;
    use dogfight_app::state::AppState;

    let options = Options::from_args()?;
    let config = options.load_config()?;

    tauri::Builder::default()
        .manage(AppState::new(config))
        .invoke_handler(tauri::generate_handler![
            ipc::start_game,
            ipc::send_command,
            ipc::get_snapshot,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}

/// Fly an autopilot session on the frame thread and log the HUD once a
/// second.
#[cfg_attr(feature = "webview", allow(dead_code))]
fn run_headless(options: &Options) -> Result<(), AppError> {
    let config = options.load_config()?;
    log::info!(
        "headless session: {:.0}s, seed {}",
        options.session_secs,
        config.seed
    );

    let latest: Arc<Mutex<Option<GameStateSnapshot>>> = Arc::new(Mutex::new(None));
    let sink_latest = Arc::clone(&latest);
    let debug = options.debug;
    let mut fps = FpsCounter::default();
    let mut last_frame = Instant::now();
    let mut last_report = 0u64;

    let sink = move |snapshot: &GameStateSnapshot| {
        let now = Instant::now();
        fps.record(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        let second = snapshot.time.elapsed_secs as u64;
        if second > last_report {
            last_report = second;
            log::info!("{}", HudText::from_view(&snapshot.hud));
            if debug.enabled {
                for line in DebugPanel::lines(snapshot, fps.fps()) {
                    log::debug!("{line}");
                }
            }
        }
        for event in &snapshot.events {
            log::debug!("{event:?}");
        }
        if let Ok(mut lock) = sink_latest.lock() {
            *lock = Some(snapshot.clone());
        }
    };

    let (tx, handle) = game_loop::spawn_game_loop(config, sink)?;
    let send = |command: PlayerCommand| {
        tx.send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopStopped)
    };

    send(PlayerCommand::StartGame)?;
    let mut pilot = Autopilot::new();
    let start = Instant::now();
    loop {
        let elapsed = start.elapsed().as_secs_f32();
        if elapsed >= options.session_secs {
            break;
        }
        for command in pilot.step(elapsed) {
            send(command)?;
        }
        let game_over = latest
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|snap| snap.hud.game_over))
            .unwrap_or(false);
        if game_over {
            break;
        }
        std::thread::sleep(FRAME_DURATION);
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
        return Err(AppError::LoopStopped);
    }

    let final_snapshot = latest.lock().ok().and_then(|lock| lock.clone());
    match final_snapshot {
        Some(snapshot) => log::info!(
            "session over after {:.1}s: {}",
            snapshot.time.elapsed_secs,
            HudText::from_view(&snapshot.hud)
        ),
        None => log::warn!("session ended before the first frame"),
    }
    Ok(())
}
