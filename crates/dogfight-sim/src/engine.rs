//! Game engine: owns the world and drives a frame.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no Tauri dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dogfight_core::commands::PlayerCommand;
use dogfight_core::components::PlayerShip;
use dogfight_core::config::GameConfig;
use dogfight_core::constants::{FIXED_DT, MAX_FRAME_DELTA};
use dogfight_core::enums::GamePhase;
use dogfight_core::events::GameEvent;
use dogfight_core::input::InputManager;
use dogfight_core::state::GameStateSnapshot;
use dogfight_core::types::{SimTime, Transform};

use crate::session::Session;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// The game engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    input: InputManager,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    session: Session,
}

impl GameEngine {
    /// Create an engine on the title screen. The star field is already in
    /// place so the title has a backdrop.
    pub fn new(config: GameConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputManager::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            session: Session::new(&config),
            config,
        };
        engine.reset_world();
        engine
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one frame at the nominal frame rate.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.update(FIXED_DT)
    }

    /// Advance by a measured frame delta and return the resulting snapshot.
    ///
    /// The delta is clamped to `[0, MAX_FRAME_DELTA]`; non-finite deltas count
    /// as zero.
    pub fn update(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
            self.check_game_over();
        }

        let input = self.input.state();
        let ctx = SnapshotContext {
            time: self.time,
            phase: self.phase,
            session: &self.session,
            input: &input,
            config: &self.config,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, std::mem::take(&mut self.events))
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current game time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn wave(&self) -> u32 {
        self.session.wave
    }

    /// Fighters spawned since the game started.
    pub fn total_spawned(&self) -> u32 {
        self.session.total_spawned
    }

    /// Fighters shot down since the game started.
    pub fn enemies_destroyed(&self) -> u32 {
        self.session.enemies_destroyed
    }

    /// The player's current pose.
    pub fn player_transform(&self) -> Option<Transform> {
        systems::player_transform(&self.world)
    }

    /// Mutable world access for tests that stage specific encounters.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Title | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::Restart => self.start_game(),
            PlayerCommand::ReturnToTitle => {
                if self.phase != GamePhase::Title {
                    self.reset_world();
                    self.phase = GamePhase::Title;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Input { event } => self.input.handle(&event),
        }
    }

    /// Fresh world, fresh RNG stream, fresh bookkeeping.
    fn reset_world(&mut self) {
        self.world.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.session = Session::new(&self.config);
        self.time = SimTime::default();
        self.events.clear();
        world_setup::setup_game(&mut self.world, &mut self.rng, &self.config);
    }

    fn start_game(&mut self) {
        self.reset_world();
        self.phase = GamePhase::Playing;
        log::info!("game started (seed {})", self.config.seed);
        self.events.push(GameEvent::WaveStarted { wave: 1 });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let input = self.input.state();
        let (width, height) = self.input.viewport();
        let aspect = width / height;

        // 1. Player flight
        systems::player::run(&mut self.world, input.steer, dt, &self.config);
        // 2. Star field wrap around the new player position
        systems::starfield::run(&mut self.world, &self.config);
        // 3. Waves and spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.config,
            dt,
            &mut self.events,
        );
        // 4. Behaviour strategies
        systems::behavior::run(&mut self.world, dt);
        // 5. Guns, lasers, hit test
        systems::fire_control::run(
            &mut self.world,
            &mut self.rng,
            &input,
            aspect,
            &mut self.session,
            &self.config,
            dt,
            &mut self.events,
        );
        // 6. Bolt integration
        systems::movement::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 7. Enemy fire and ramming
        systems::enemy_fire::run(
            &mut self.world,
            &mut self.rng,
            &mut self.session,
            &self.config,
            dt,
            &mut self.events,
        );
        // 8. Wreckage
        systems::explosion::run(&mut self.world, dt, &self.config, &mut self.despawn_buffer);
        // 9. Cleanup (out of range, finished)
        systems::cleanup::run(
            &mut self.world,
            &self.config,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Shields at zero end the game. Runs only while playing, so the event
    /// fires once.
    fn check_game_over(&mut self) {
        let depleted = self
            .world
            .query_mut::<&PlayerShip>()
            .into_iter()
            .any(|(_, ship)| ship.shields <= 0.0);

        if depleted {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over: score {} in wave {}, {} fighters down",
                self.session.score,
                self.session.wave,
                self.session.enemies_destroyed
            );
            self.events.push(GameEvent::GameOver {
                score: self.session.score,
                wave: self.session.wave,
            });
        }
    }
}
