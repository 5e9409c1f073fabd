//! Game tuning configuration.
//!
//! Loaded from TOML. Every field has a default, so a config file only needs
//! the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable gameplay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and inputs give the same game.
    pub seed: u64,

    // --- Player ---
    pub player_speed: f32,
    pub yaw_rate: f32,
    pub pitch_rate: f32,
    pub max_bank: f32,
    /// How quickly bank eases toward its target (1/s).
    pub bank_response: f32,
    pub max_shields: f32,

    // --- Star field ---
    pub star_count: usize,
    /// Half-width of the cube of stars kept around the player.
    pub star_extent: f32,

    // --- Spawning ---
    pub spawn_interval_secs: f32,
    pub min_spawn_interval_secs: f32,
    /// Interval multiplier applied once per wave.
    pub spawn_interval_decay: f32,
    pub spawn_distance: f32,
    pub spawn_spread: f32,
    pub max_enemies: usize,
    pub cleanup_distance: f32,
    pub wave_duration_secs: f32,

    // --- Enemies ---
    pub enemy_speed: f32,
    pub enemy_fire_range: f32,
    pub enemy_fire_cooldown_secs: f32,
    /// Half-angle of the cone an enemy must have the player in to fire (radians).
    pub enemy_fire_cone: f32,
    pub enemy_bolt_speed: f32,
    pub enemy_bolt_damage: f32,
    pub collision_radius: f32,
    pub collision_damage: f32,
    pub explosion_secs: f32,

    // --- Player weapons ---
    pub fire_cooldown_secs: f32,
    pub laser_speed: f32,
    pub laser_target_depth: f32,
    /// Base angular tolerance of the screen-space hit test (radians).
    pub hit_angle_tolerance: f32,
    pub enemy_hit_radius: f32,
    pub laser_max_range: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_speed: 60.0,
            yaw_rate: 1.6,
            pitch_rate: 1.3,
            max_bank: 0.6,
            bank_response: 4.0,
            max_shields: 100.0,
            star_count: 600,
            star_extent: 400.0,
            spawn_interval_secs: 2.5,
            min_spawn_interval_secs: 0.6,
            spawn_interval_decay: 0.85,
            spawn_distance: 500.0,
            spawn_spread: 120.0,
            max_enemies: 12,
            cleanup_distance: 900.0,
            wave_duration_secs: 30.0,
            enemy_speed: 90.0,
            enemy_fire_range: 260.0,
            enemy_fire_cooldown_secs: 1.8,
            enemy_fire_cone: 0.35,
            enemy_bolt_speed: 220.0,
            enemy_bolt_damage: 8.0,
            collision_radius: 12.0,
            collision_damage: 25.0,
            explosion_secs: 1.6,
            fire_cooldown_secs: 0.18,
            laser_speed: 700.0,
            laser_target_depth: 350.0,
            hit_angle_tolerance: 0.06,
            enemy_hit_radius: 9.0,
            laser_max_range: 700.0,
        }
    }
}

impl GameConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config as pretty TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reject values the systems cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("player_speed", self.player_speed),
            ("yaw_rate", self.yaw_rate),
            ("pitch_rate", self.pitch_rate),
            ("max_bank", self.max_bank),
            ("bank_response", self.bank_response),
            ("max_shields", self.max_shields),
            ("star_extent", self.star_extent),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("min_spawn_interval_secs", self.min_spawn_interval_secs),
            ("spawn_interval_decay", self.spawn_interval_decay),
            ("spawn_distance", self.spawn_distance),
            ("spawn_spread", self.spawn_spread),
            ("cleanup_distance", self.cleanup_distance),
            ("wave_duration_secs", self.wave_duration_secs),
            ("enemy_speed", self.enemy_speed),
            ("enemy_fire_range", self.enemy_fire_range),
            ("enemy_fire_cooldown_secs", self.enemy_fire_cooldown_secs),
            ("enemy_fire_cone", self.enemy_fire_cone),
            ("enemy_bolt_speed", self.enemy_bolt_speed),
            ("enemy_bolt_damage", self.enemy_bolt_damage),
            ("collision_radius", self.collision_radius),
            ("collision_damage", self.collision_damage),
            ("explosion_secs", self.explosion_secs),
            ("fire_cooldown_secs", self.fire_cooldown_secs),
            ("laser_speed", self.laser_speed),
            ("laser_target_depth", self.laser_target_depth),
            ("hit_angle_tolerance", self.hit_angle_tolerance),
            ("enemy_hit_radius", self.enemy_hit_radius),
            ("laser_max_range", self.laser_max_range),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let positive = [
            ("player_speed", self.player_speed),
            ("max_shields", self.max_shields),
            ("star_extent", self.star_extent),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("min_spawn_interval_secs", self.min_spawn_interval_secs),
            ("spawn_distance", self.spawn_distance),
            ("cleanup_distance", self.cleanup_distance),
            ("wave_duration_secs", self.wave_duration_secs),
            ("enemy_speed", self.enemy_speed),
            ("enemy_bolt_speed", self.enemy_bolt_speed),
            ("explosion_secs", self.explosion_secs),
            ("fire_cooldown_secs", self.fire_cooldown_secs),
            ("laser_speed", self.laser_speed),
            ("laser_target_depth", self.laser_target_depth),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.min_spawn_interval_secs > self.spawn_interval_secs {
            return Err(ConfigError::Invalid(
                "min_spawn_interval_secs exceeds spawn_interval_secs".into(),
            ));
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn_interval_decay must be in (0, 1], got {}",
                self.spawn_interval_decay
            )));
        }
        if self.spawn_spread < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_spread must not be negative, got {}",
                self.spawn_spread
            )));
        }
        if self.star_count == 0 {
            return Err(ConfigError::Invalid("star_count must be non-zero".into()));
        }
        if self.cleanup_distance <= self.spawn_distance {
            log::warn!(
                "cleanup_distance {} is inside spawn_distance {}; fighters will vanish on arrival",
                self.cleanup_distance,
                self.spawn_distance
            );
        }
        Ok(())
    }

    /// Seconds between spawns during the given wave (1-based).
    pub fn spawn_interval_for_wave(&self, wave: u32) -> f32 {
        let decay = self.spawn_interval_decay.powi(wave.saturating_sub(1) as i32);
        (self.spawn_interval_secs * decay).max(self.min_spawn_interval_secs)
    }

    /// Seconds a laser takes to reach its target depth.
    pub fn laser_flight_secs(&self) -> f32 {
        self.laser_target_depth / self.laser_speed
    }
}
