//! Fire control: gun cooldown, laser flight and the screen-space hit test.
//!
//! Lasers are drawn as screen-space quads. They travel from a wing gun toward
//! the crosshair while receding to a fixed depth; when they arrive the aim
//! ray recorded at fire time is tested against the fighters.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use dogfight_core::components::*;
use dogfight_core::config::GameConfig;
use dogfight_core::constants::HIT_MARKER_SECS;
use dogfight_core::events::GameEvent;
use dogfight_core::input::InputState;
use dogfight_core::types::Transform;

use super::explosion;
use crate::projection::{aim_direction, hit_tolerance};
use crate::session::Session;

/// Run fire control for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    input: &InputState,
    aspect: f32,
    session: &mut Session,
    config: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    // Step 1: Guns
    fire_guns(world, input, aspect, session, config, dt, events);

    // Step 2: Advance lasers, collecting the ones that reached depth
    let mut arrived: Vec<(Entity, Vec3)> = Vec::new();
    for (entity, laser) in world.query_mut::<&mut Laser>() {
        laser.progress = advance_progress(laser.progress, dt, config);
        if laser.progress >= 1.0 {
            arrived.push((entity, laser.aim));
        }
    }

    // Step 3: Resolve arrivals against the fighters' current positions
    let Some(player) = super::player_transform(world) else {
        return;
    };
    let mut downed: Vec<Entity> = Vec::new();
    for (laser_entity, aim) in arrived {
        let _ = world.despawn(laser_entity);

        let candidates: Vec<(Entity, Vec3)> = world
            .query::<(&Enemy, &Transform, Option<&Explosion>)>()
            .iter()
            .filter(|(entity, (_, _, explosion))| explosion.is_none() && !downed.contains(entity))
            .map(|(entity, (_, transform, _))| (entity, transform.position))
            .collect();

        if let Some(target) = hit_test(player.position, aim, &candidates, config) {
            downed.push(target);
        }
    }

    for target in downed {
        destroy_enemy(world, rng, target, session, events);
    }

    session.hit_marker_secs = (session.hit_marker_secs - dt).max(0.0);
}

/// Cool the guns and fire one laser if the trigger is held and they are ready.
fn fire_guns(
    world: &mut World,
    input: &InputState,
    aspect: f32,
    session: &mut Session,
    config: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let mut shot: Option<Laser> = None;
    for (_entity, (_player, ship, transform)) in
        world.query_mut::<(&Player, &mut PlayerShip, &Transform)>()
    {
        ship.fire_cooldown = (ship.fire_cooldown - dt).max(0.0);
        if !input.firing || ship.fire_cooldown > 0.0 {
            continue;
        }

        let gun = ship.next_gun;
        ship.next_gun = gun.other();
        ship.fire_cooldown = config.fire_cooldown_secs;

        shot = Some(Laser {
            id: session.allocate_laser_id(),
            gun,
            from: Vec2::from(gun.muzzle_ndc()),
            to: input.cursor,
            progress: 0.0,
            aim: aim_direction(transform.rotation, input.cursor, aspect),
        });
    }

    if let Some(laser) = shot {
        events.push(GameEvent::LaserFired { gun: laser.gun });
        world.spawn((laser,));
    }
}

/// Laser progress after `dt` more seconds of flight, capped at 1.
pub fn advance_progress(progress: f32, dt: f32, config: &GameConfig) -> f32 {
    (progress + config.laser_speed * dt / config.laser_target_depth).min(1.0)
}

/// Screen position, draw depth and quad scale of a laser in flight.
pub fn laser_screen(laser: &Laser, config: &GameConfig) -> (Vec2, f32, f32) {
    let p = laser.progress.clamp(0.0, 1.0);
    (
        laser.from.lerp(laser.to, p),
        p * config.laser_target_depth,
        1.0 - dogfight_core::constants::LASER_SHRINK * p,
    )
}

/// The nearest candidate within the angular tolerance of the aim ray.
///
/// Candidates behind the shooter or beyond `laser_max_range` are ignored.
pub fn hit_test(
    origin: Vec3,
    aim: Vec3,
    candidates: &[(Entity, Vec3)],
    config: &GameConfig,
) -> Option<Entity> {
    candidates
        .iter()
        .filter_map(|&(entity, position)| {
            let to_target = position - origin;
            let distance = to_target.length();
            if distance <= f32::EPSILON || distance > config.laser_max_range {
                return None;
            }
            if to_target.dot(aim) <= 0.0 {
                return None;
            }
            let angle = aim.angle_between(to_target);
            let tolerance =
                hit_tolerance(config.hit_angle_tolerance, config.enemy_hit_radius, distance);
            (angle <= tolerance).then_some((entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Break a fighter apart and credit the player.
fn destroy_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    target: Entity,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
) {
    let Ok((id, kind)) = world
        .get::<&Enemy>(target)
        .map(|enemy| (enemy.id, enemy.kind))
    else {
        return;
    };

    let score = kind.score();
    session.score += score;
    session.enemies_destroyed += 1;
    session.hit_marker_secs = HIT_MARKER_SECS;
    log::debug!("fighter {id} destroyed (+{score})");
    events.push(GameEvent::EnemyDestroyed { id, kind, score });

    let _ = world.insert_one(target, explosion::break_apart(rng));
}
