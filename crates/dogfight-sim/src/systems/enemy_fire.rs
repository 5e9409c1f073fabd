//! Enemy return fire and ramming.
//!
//! Fighters that have the player inside their forward cone fire leading
//! bolts on a cooldown. Bolts and fighters that reach the player's collision
//! sphere drain shields.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use dogfight_core::components::{Bolt, Enemy, Explosion};
use dogfight_core::config::GameConfig;
use dogfight_core::events::GameEvent;
use dogfight_core::types::Transform;

use super::{damage_player, explosion, player_transform};
use crate::session::Session;

/// Run enemy fire for one frame.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    config: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let Some(player) = player_transform(world) else {
        return;
    };

    resolve_bolt_hits(world, player.position, config, events);

    let player_velocity = player.forward() * config.player_speed;
    let mut shots: Vec<(u32, Vec3, Vec3)> = Vec::new();
    let mut rammed: Vec<(Entity, u32)> = Vec::new();

    for (entity, (enemy, transform, wreck)) in
        world.query_mut::<(&mut Enemy, &Transform, Option<&Explosion>)>()
    {
        if wreck.is_some() {
            continue;
        }

        let to_player = player.position - transform.position;
        let distance = transform.distance_to(player.position);
        if distance <= config.collision_radius {
            rammed.push((entity, enemy.id));
            continue;
        }

        enemy.fire_cooldown = (enemy.fire_cooldown - dt).max(0.0);
        if enemy.fire_cooldown > 0.0 || distance > config.enemy_fire_range {
            continue;
        }
        if transform.forward().angle_between(to_player) > config.enemy_fire_cone {
            continue;
        }

        let direction = lead_direction(
            transform.position,
            player.position,
            player_velocity,
            config.enemy_bolt_speed,
        );
        if direction == Vec3::ZERO {
            continue;
        }
        enemy.fire_cooldown = config.enemy_fire_cooldown_secs;
        shots.push((enemy.id, transform.position, direction));
    }

    let ttl = bolt_lifetime(config);
    for (enemy_id, origin, direction) in shots {
        let bolt = Bolt {
            id: session.allocate_bolt_id(),
            velocity: direction * config.enemy_bolt_speed,
            ttl,
        };
        world.spawn((bolt, Transform::looking_at(origin, origin + direction)));
        events.push(GameEvent::EnemyFired { id: enemy_id });
    }

    for (entity, enemy_id) in rammed {
        let shields = damage_player(world, config.collision_damage);
        log::debug!("fighter {enemy_id} rammed the player, shields {shields}");
        events.push(GameEvent::Collision { id: enemy_id });
        events.push(GameEvent::PlayerHit {
            damage: config.collision_damage,
            shields,
        });
        let _ = world.insert_one(entity, explosion::break_apart(rng));
    }
}

/// Bolts inside the player's collision sphere hit and are removed.
fn resolve_bolt_hits(
    world: &mut World,
    player_position: Vec3,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let radius_sq = config.collision_radius * config.collision_radius;
    let hits: Vec<Entity> = world
        .query::<(&Bolt, &Transform)>()
        .iter()
        .filter(|(_, (_, transform))| {
            transform.position.distance_squared(player_position) <= radius_sq
        })
        .map(|(entity, _)| entity)
        .collect();

    for entity in hits {
        let _ = world.despawn(entity);
        let shields = damage_player(world, config.enemy_bolt_damage);
        events.push(GameEvent::PlayerHit {
            damage: config.enemy_bolt_damage,
            shields,
        });
    }
}

/// Seconds a bolt lives: long enough to cross the firing range.
pub fn bolt_lifetime(config: &GameConfig) -> f32 {
    config.enemy_fire_range / config.enemy_bolt_speed
}

/// Unit direction that intercepts a target moving at constant velocity,
/// using a single time-of-flight estimate.
pub fn lead_direction(
    shooter: Vec3,
    target: Vec3,
    target_velocity: Vec3,
    bolt_speed: f32,
) -> Vec3 {
    let flight = shooter.distance(target) / bolt_speed;
    (target + target_velocity * flight - shooter).normalize_or_zero()
}
