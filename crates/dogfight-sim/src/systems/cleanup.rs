//! Cleanup system: despawns entities that finished or flew out of range.

use hecs::{Entity, World};

use dogfight_core::components::{Enemy, Explosion};
use dogfight_core::config::GameConfig;
use dogfight_core::events::GameEvent;
use dogfight_core::types::Transform;

use super::player_position;

/// Remove fighters beyond the cleanup distance, then everything other systems
/// queued in `despawn_buffer`.
pub fn run(
    world: &mut World,
    config: &GameConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let center = player_position(world);
    let limit_sq = config.cleanup_distance * config.cleanup_distance;

    for (entity, (enemy, transform, explosion)) in
        world.query_mut::<(&Enemy, &Transform, Option<&Explosion>)>()
    {
        if transform.position.distance_squared(center) > limit_sq {
            if explosion.is_none() {
                events.push(GameEvent::EnemyEscaped { id: enemy.id });
            }
            despawn_buffer.push(entity);
        }
    }

    // An entity queued twice is despawned once; the second attempt is a no-op.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
