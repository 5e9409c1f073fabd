//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use dogfight_core::components::*;
use dogfight_core::config::GameConfig;
use dogfight_core::enums::GamePhase;
use dogfight_core::events::GameEvent;
use dogfight_core::input::InputState;
use dogfight_core::state::*;
use dogfight_core::types::{SimTime, Transform};

use super::{explosion, fire_control};
use crate::session::Session;

/// Everything besides the world that goes into a snapshot.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub session: &'a Session,
    pub input: &'a InputState,
    pub config: &'a GameConfig,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (player, shields) = build_player(world);
    let enemies = build_enemies(world, ctx.config);

    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        hud: HudView {
            score: ctx.session.score,
            shields,
            max_shields: ctx.session.max_shields,
            wave: ctx.session.wave,
            game_over: ctx.phase == GamePhase::GameOver,
            cursor: ctx.input.cursor,
            hit_marker: ctx.session.hit_marker_secs > 0.0,
            enemy_count: enemies.iter().filter(|e| e.explosion.is_none()).count() as u32,
        },
        player,
        enemies,
        lasers: build_lasers(world, ctx.config),
        bolts: build_bolts(world),
        stars: build_stars(world),
        events,
    }
}

/// Player pose and shields.
fn build_player(world: &World) -> (PlayerView, f32) {
    world
        .query::<(&Player, &Transform, &PlayerShip)>()
        .iter()
        .next()
        .map(|(_, (_, transform, ship))| {
            (
                PlayerView {
                    position: transform.position,
                    rotation: transform.rotation,
                    bank: ship.bank,
                },
                ship.shields,
            )
        })
        .unwrap_or_default()
}

/// Build EnemyView list, including wreckage.
fn build_enemies(world: &World, config: &GameConfig) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Transform, Option<&Explosion>)>()
        .iter()
        .map(|(_, (enemy, transform, wreck))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            phase: enemy.phase,
            position: transform.position,
            rotation: transform.rotation,
            explosion: wreck.map(|wreck| ExplosionView {
                progress: explosion::progress(wreck, config),
                pieces: explosion::piece_views(transform.position, wreck, config),
            }),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build LaserView list in screen space.
fn build_lasers(world: &World, config: &GameConfig) -> Vec<LaserView> {
    let mut lasers: Vec<LaserView> = world
        .query::<&Laser>()
        .iter()
        .map(|(_, laser)| {
            let (screen, depth, scale) = fire_control::laser_screen(laser, config);
            LaserView {
                id: laser.id,
                gun: laser.gun,
                screen,
                depth,
                progress: laser.progress,
                scale,
            }
        })
        .collect();

    lasers.sort_by_key(|l| l.id);
    lasers
}

/// Build BoltView list.
fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut bolts: Vec<BoltView> = world
        .query::<(&Bolt, &Transform)>()
        .iter()
        .map(|(_, (bolt, transform))| BoltView {
            id: bolt.id,
            position: transform.position,
            direction: bolt.velocity.normalize_or_zero(),
        })
        .collect();

    bolts.sort_by_key(|b| b.id);
    bolts
}

/// Star positions. Stars are never created or destroyed mid-game, so hecs
/// iteration order is stable between frames.
fn build_stars(world: &World) -> Vec<glam::Vec3> {
    world
        .query::<(&Star, &Transform)>()
        .iter()
        .map(|(_, (_, transform))| transform.position)
        .collect()
}
