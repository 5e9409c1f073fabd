//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorKind, BehaviorPhase, Gun};

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player flight and weapon state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Visual roll about the forward axis (radians). Not part of the flight path.
    pub bank: f32,
    pub shields: f32,
    pub max_shields: f32,
    /// Seconds until the guns may fire again.
    pub fire_cooldown: f32,
    pub next_gun: Gun,
}

/// Marks a backdrop star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star;

/// An enemy fighter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id used by the renderer to match meshes between frames.
    pub id: u32,
    pub kind: BehaviorKind,
    /// Seconds since spawn; the behaviour strategy is evaluated at this time.
    pub age: f32,
    /// Phase last reported by the strategy.
    pub phase: BehaviorPhase,
    /// Seconds until this fighter may fire again.
    pub fire_cooldown: f32,
}

/// Spawn frame that behaviour offsets are applied relative to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Terminal "break apart" animation. A fighter with this component is no
/// longer steered, cannot be hit and cannot fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub elapsed: f32,
    pub pieces: Vec<ExplosionPiece>,
}

/// One drifting fragment of an exploding fighter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionPiece {
    /// Offset from the fighter's position when it was hit.
    pub offset: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    /// Axis-angle spin in radians per second.
    pub spin: Vec3,
}

/// A player laser. Lasers live in screen space: they travel from a gun muzzle
/// toward the crosshair while receding to a fixed depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub id: u32,
    pub gun: Gun,
    /// Muzzle position on screen at fire time (NDC).
    pub from: Vec2,
    /// Crosshair position on screen at fire time (NDC).
    pub to: Vec2,
    /// 0 at the muzzle, 1 at the target depth.
    pub progress: f32,
    /// World-space aim direction through the crosshair at fire time.
    pub aim: Vec3,
}

/// An enemy bolt flying in world space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bolt {
    pub id: u32,
    pub velocity: Vec3,
    /// Seconds left before the bolt fizzles out.
    pub ttl: f32,
}
