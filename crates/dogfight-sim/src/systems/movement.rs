//! Kinematic integration for enemy bolts.
//!
//! Updates Transform from Bolt velocity each frame: position += velocity * dt.
//! Bolts whose time-to-live runs out are queued for despawn.

use hecs::{Entity, World};

use dogfight_core::components::Bolt;
use dogfight_core::types::Transform;

/// Run kinematic integration for all bolts.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (bolt, transform)) in world.query_mut::<(&mut Bolt, &mut Transform)>() {
        transform.position += bolt.velocity * dt;
        bolt.ttl -= dt;
        if bolt.ttl <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
}
