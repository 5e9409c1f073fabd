//! Enemy spawning: wave escalation and the spawn timer.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use dogfight_core::components::{Enemy, Explosion};
use dogfight_core::config::GameConfig;
use dogfight_core::events::GameEvent;

use super::player_transform;
use crate::session::Session;

/// Advance the wave clock and spawn any fighters that are due.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    config: &GameConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    session.wave_timer += dt;
    while session.wave_timer >= config.wave_duration_secs {
        session.wave_timer -= config.wave_duration_secs;
        session.wave += 1;
        log::info!("wave {} started", session.wave);
        events.push(GameEvent::WaveStarted { wave: session.wave });
    }

    let Some(player) = player_transform(world) else {
        return;
    };

    session.spawn_timer += dt;
    let interval = config.spawn_interval_for_wave(session.wave);
    while session.spawn_timer >= interval {
        session.spawn_timer -= interval;

        // At capacity the slot is skipped rather than queued.
        if live_enemy_count(world) >= config.max_enemies {
            continue;
        }

        let id = session.allocate_enemy_id();
        let entity =
            crate::world_setup::spawn_tie_fighter(world, rng, id, &player, config, session.wave);
        session.total_spawned += 1;

        let kind = world
            .get::<&Enemy>(entity)
            .map(|enemy| enemy.kind)
            .unwrap_or_default();
        log::debug!("spawned fighter {id} ({kind:?}) in wave {}", session.wave);
        events.push(GameEvent::EnemySpawned { id, kind });
    }
}

/// Fighters that are still flying (not breaking apart).
pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<(&Enemy, Option<&Explosion>)>()
        .iter()
        .filter(|(_, (_, explosion))| explosion.is_none())
        .count()
}
