//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the player to start.
    #[default]
    Title,
    Playing,
    Paused,
    /// Shields depleted. The world is frozen until restart.
    GameOver,
}

/// Which behaviour strategy drives an enemy fighter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    /// Sinusoidal weave along a straight pass.
    #[default]
    Oscillate,
    /// Multi-phase approach, pursuit and escape.
    Smart,
}

/// Phase reported by a behaviour strategy for the current elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorPhase {
    /// Single-phase strategies stay here.
    #[default]
    Cruise,
    Approach,
    Pursuit,
    Escape,
}

/// Which wing gun fired a laser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gun {
    #[default]
    Left,
    Right,
}

impl Gun {
    /// The gun that fires next.
    pub fn other(self) -> Self {
        match self {
            Gun::Left => Gun::Right,
            Gun::Right => Gun::Left,
        }
    }

    /// Muzzle position in normalized device coordinates.
    pub fn muzzle_ndc(self) -> [f32; 2] {
        let [x, y] = crate::constants::LEFT_GUN_NDC;
        match self {
            Gun::Left => [x, y],
            Gun::Right => [-x, y],
        }
    }
}

impl BehaviorKind {
    /// Points awarded for shooting down this kind of fighter.
    pub fn score(self) -> u32 {
        match self {
            BehaviorKind::Oscillate => crate::constants::SCORE_OSCILLATE,
            BehaviorKind::Smart => crate::constants::SCORE_SMART,
        }
    }
}
