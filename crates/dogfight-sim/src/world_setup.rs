//! Entity spawn factories for setting up the game world.
//!
//! Creates the player ship, the star field and enemy fighters with
//! appropriate component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dogfight_behavior::profiles::pick_for_wave;
use dogfight_behavior::{evaluate, Behavior};
use dogfight_core::components::*;
use dogfight_core::config::GameConfig;
use dogfight_core::enums::Gun;
use dogfight_core::types::Transform;

/// Set up a fresh game: player at the origin surrounded by stars.
/// Fighters are spawned later by the spawner system.
pub fn setup_game(world: &mut World, rng: &mut ChaCha8Rng, config: &GameConfig) {
    spawn_player(world, config);
    spawn_star_field(world, rng, Vec3::ZERO, config);
}

/// Spawn the player's ship at the origin facing -Z.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.spawn((
        Player,
        Transform::default(),
        PlayerShip {
            bank: 0.0,
            shields: config.max_shields,
            max_shields: config.max_shields,
            fire_cooldown: 0.0,
            next_gun: Gun::Left,
        },
    ))
}

/// Scatter `star_count` stars uniformly through the cube around `center`.
pub fn spawn_star_field(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Vec3,
    config: &GameConfig,
) {
    let extent = config.star_extent;
    for _ in 0..config.star_count {
        let offset = Vec3::new(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        );
        world.spawn((Star, Transform::from_position(center + offset)));
    }
}

/// Spawn a TIE fighter ahead of the player, facing back toward it.
///
/// The strategy is chosen by wave: later waves mix in more multi-phase
/// fighters.
pub fn spawn_tie_fighter(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u32,
    player: &Transform,
    config: &GameConfig,
    wave: u32,
) -> hecs::Entity {
    let behavior = pick_for_wave(rng, wave, config.enemy_speed);

    let spread = config.spawn_spread;
    let (lateral, vertical) = if spread > 0.0 {
        (
            rng.gen_range(-spread..spread),
            rng.gen_range(-spread * 0.5..spread * 0.5),
        )
    } else {
        (0.0, 0.0)
    };
    let position = player.position
        + player.forward() * config.spawn_distance
        + player.right() * lateral
        + player.up() * vertical;

    let fire_cooldown = config.enemy_fire_cooldown_secs * rng.gen_range(0.5..1.0);
    spawn_enemy(world, id, position, player.position, behavior, fire_cooldown)
}

/// Spawn a fighter anchored at `position`, facing `facing`, flying `behavior`.
pub fn spawn_enemy(
    world: &mut World,
    id: u32,
    position: Vec3,
    facing: Vec3,
    behavior: Behavior,
    fire_cooldown: f32,
) -> hecs::Entity {
    let frame = Transform::looking_at(position, facing);
    let anchor = Anchor {
        position: frame.position,
        rotation: frame.rotation,
    };
    let start = evaluate(&behavior, 0.0);

    world.spawn((
        Enemy {
            id,
            kind: behavior.kind(),
            age: 0.0,
            phase: start.phase,
            fire_cooldown,
        },
        anchor,
        behavior,
        Transform::new(
            anchor.position + anchor.rotation * start.offset,
            anchor.rotation * start.rotation,
        ),
    ))
}
