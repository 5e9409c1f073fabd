//! Per-game bookkeeping that is not attached to any entity.
//!
//! Stored in `GameEngine`, NOT as ECS entities.

use dogfight_core::config::GameConfig;

/// Score, wave and spawn timers for the game in progress.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub score: u32,
    /// Current wave, starting at 1.
    pub wave: u32,
    /// Seconds into the current wave.
    pub wave_timer: f32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f32,
    /// Fighters spawned this game. Never decreases.
    pub total_spawned: u32,
    pub enemies_destroyed: u32,
    pub next_enemy_id: u32,
    pub next_laser_id: u32,
    pub next_bolt_id: u32,
    /// Seconds the crosshair hit marker stays lit.
    pub hit_marker_secs: f32,
    pub max_shields: f32,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            wave: 1,
            max_shields: config.max_shields,
            ..Default::default()
        }
    }

    pub fn allocate_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    pub fn allocate_laser_id(&mut self) -> u32 {
        let id = self.next_laser_id;
        self.next_laser_id += 1;
        id
    }

    pub fn allocate_bolt_id(&mut self) -> u32 {
        let id = self.next_bolt_id;
        self.next_bolt_id += 1;
        id
    }
}
