//! ECS systems that operate on the game world each frame.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: entity state lives in components and per-game
//! bookkeeping lives in [`crate::session::Session`].

pub mod behavior;
pub mod cleanup;
pub mod enemy_fire;
pub mod explosion;
pub mod fire_control;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod starfield;

use glam::Vec3;
use hecs::World;

use dogfight_core::components::{Player, PlayerShip};
use dogfight_core::types::Transform;

/// The player's transform, if a player exists.
pub fn player_transform(world: &World) -> Option<Transform> {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| *transform)
}

/// The player's position, or the origin when there is no player.
pub fn player_position(world: &World) -> Vec3 {
    player_transform(world)
        .map(|t| t.position)
        .unwrap_or_default()
}

/// Apply damage to the player's shields, never going below zero.
/// Returns the remaining shields.
pub fn damage_player(world: &mut World, damage: f32) -> f32 {
    let mut remaining = 0.0;
    for (_entity, (_player, ship)) in world.query_mut::<(&Player, &mut PlayerShip)>() {
        ship.shields = (ship.shields - damage).max(0.0);
        remaining = ship.shields;
    }
    remaining
}
