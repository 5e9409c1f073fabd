//! Events emitted by the engine for audio and UI feedback.
//!
//! Events are collected during a frame and drained into that frame's
//! snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorKind, Gun};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began.
    WaveStarted { wave: u32 },
    /// A fighter entered the battle.
    EnemySpawned { id: u32, kind: BehaviorKind },
    /// The player fired a laser.
    LaserFired { gun: Gun },
    /// A laser connected and the fighter is breaking apart.
    EnemyDestroyed {
        id: u32,
        kind: BehaviorKind,
        score: u32,
    },
    /// A fighter flew past the cleanup distance.
    EnemyEscaped { id: u32 },
    /// A fighter fired at the player.
    EnemyFired { id: u32 },
    /// The player took damage.
    PlayerHit { damage: f32, shields: f32 },
    /// A fighter rammed the player.
    Collision { id: u32 },
    /// Shields reached zero.
    GameOver { score: u32, wave: u32 },
}
